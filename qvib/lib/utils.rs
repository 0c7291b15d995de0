//! Quadrature and overlap tools for sampled wavefunctions.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;
use crate::error::{ LengthError, QResult };

/// Integrate using the trapezoidal rule.
///
/// Returns zero if `y` has fewer than two points.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner
        = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm ∫|ψ|² of a sampled wavefunction.
///
/// Returns zero if `q` has fewer than two points.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner
        = q.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, qk| acc + qk.powi(2));
    (dx / two) * (q[0].powi(2) + two * inner + q[n - 1].powi(2))
}

/// Calculate the inner product of two real wavefunctions.
///
/// Returns zero if either array has fewer than two points; otherwise the
/// longer array is truncated to the length of the shorter.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner
        = q.iter().zip(p).skip(1).take(n - 2)
        .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk);
    (dx / two) * (q[0] * p[0] + two * inner + q[n - 1] * p[n - 1])
}

/// Like [`wf_dot`], but fail instead of truncating when the arrays have
/// different lengths.
pub fn wf_dot_checked<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> QResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(q, p)?;
    Ok(wf_dot(q, p, dx))
}

/// Compute the matrix of pairwise overlaps ⟨ψ<sub>*i*</sub>|ψ<sub>*j*</sub>⟩
/// for a set of wavefunctions sampled on the same grid.
///
/// For a set of orthonormal states this is the identity matrix, up to
/// quadrature error.
///
/// *Panics if the arrays have length less than 2*.
pub fn overlap_matrix<S>(states: &[nd::ArrayBase<S, Ix1>], dx: f64)
    -> QResult<nd::Array2<f64>>
where S: nd::Data<Elem = f64>
{
    if let Some(first) = states.first() {
        states.iter().skip(1)
            .try_for_each(|s| LengthError::check(first, s))?;
    }
    let m = states.len();
    let mut overlaps: nd::Array2<f64> = nd::Array2::zeros((m, m));
    for i in 0..m {
        for j in i..m {
            let ov = wf_dot(&states[i], &states[j], dx);
            overlaps[[i, j]] = ov;
            overlaps[[j, i]] = ov;
        }
    }
    Ok(overlaps)
}

/// Return the largest absolute deviation of a square matrix from the identity.
pub fn identity_deviation<S>(mat: &nd::ArrayBase<S, nd::Ix2>) -> f64
where S: nd::Data<Elem = f64>
{
    mat.indexed_iter()
        .map(|((i, j), mij)| {
            if i == j { (mij - 1.0).abs() } else { mij.abs() }
        })
        .fold(0.0, f64::max)
}

/// Return the grid spacing of an evenly spaced coordinate array.
///
/// *Panics if `x` has length less than 2*.
pub fn grid_spacing<S>(x: &nd::ArrayBase<S, Ix1>) -> f64
where S: nd::Data<Elem = f64>
{
    x[1] - x[0]
}
