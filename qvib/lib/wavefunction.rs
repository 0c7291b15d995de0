//! Normalized harmonic-oscillator eigenfunctions
//! ```text
//! ψ[n](y) = N[n] H[n](y) exp(-y²/2)
//! N[n] = (α/π)^(1/4) / √(2^n n!)
//! ```
//! in the dimensionless coordinate *y* = √*α* *r*, *α* = *μω*/*ħ*.
//!
//! The product is never formed directly. *N*<sub>*n*</sub> is computed as a
//! log (see [`ln_norm`]), the Hermite factor comes from the rescaled
//! recurrence in [`hermite`][crate::hermite], and everything is combined as
//! ```text
//! ln|ψ[n](y)| = ln N[n] + ln|H[n](y)| - y²/2
//! sgn ψ[n](y) = sgn H[n](y)
//! ```
//! before a single exponentiation. This keeps ψ finite for quantum numbers in
//! the hundreds or thousands, where both 2<sup>*n*</sup> *n*! and
//! *H*<sub>*n*</sub>(*y*) are far outside the range of an `f64`.
//!
//! Far out in the classically forbidden region the true value of ψ can be
//! smaller than the smallest subnormal `f64`, in which case the result is an
//! exact zero. This is not an error: the [`Amplitude`] and [`WfSample`]
//! results carry a `degenerate` flag so that callers can distinguish such
//! points from genuine nodes.
//!
//! ```
//! use qvib::wavefunction::wavefunction;
//!
//! let psi0 = wavefunction(0, 0.0, 1.0).unwrap();
//! assert!((psi0 - std::f64::consts::PI.powf(-0.25)).abs() < 1e-12);
//! ```

use std::f64::consts::{ LN_2, PI };
use ndarray as nd;
use tracing::trace;
use crate::{
    Arr1,
    error::{ LengthError, QError, QResult },
    hermite::{ Scaled, hermite_scaled, hermite_scaled_arr, rescale, step },
    special::ln_factorial,
};

/// Natural log of the normalization constant *N*<sub>*n*</sub>.
///
/// Does not check `alpha`; a non-positive value gives NaN or `-∞`.
pub fn ln_norm(n: usize, alpha: f64) -> f64 {
    0.25 * (alpha / PI).ln() - 0.5 * (n as f64 * LN_2 + ln_factorial(n))
}

/// The normalization constant *N*<sub>*n*</sub> itself.
///
/// This underflows to zero for very large `n` (beyond a few hundred); the
/// wavefunction functions in this module never use it directly.
pub fn norm(n: usize, alpha: f64) -> QResult<f64> {
    QError::check_positive("alpha", alpha)?;
    Ok(ln_norm(n, alpha).exp())
}

/// A single evaluation of ψ<sub>*n*</sub>(*y*).
///
/// Both the amplitude and the probability density are derived from the same
/// evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Amplitude {
    psi: f64,
    degenerate: bool,
}

impl Amplitude {
    /// The (real) amplitude ψ<sub>*n*</sub>(*y*).
    pub fn psi(&self) -> f64 { self.psi }

    /// The probability density |ψ<sub>*n*</sub>(*y*)|².
    pub fn density(&self) -> f64 { self.psi * self.psi }

    /// `true` if the amplitude is mathematically nonzero but underflowed to
    /// exactly zero.
    pub fn degenerate(&self) -> bool { self.degenerate }
}

// combine the log-normalization, a rescaled Hermite value, and the gaussian
// envelope
#[inline]
fn combine(ln_n: f64, h: Scaled, y: f64) -> Amplitude {
    if y.is_finite() && !h.value.is_finite() {
        // a recurrence step overflowed before rescaling (|y| >~ 1e154)
        return Amplitude { psi: 0.0, degenerate: true };
    }
    let sign = h.signum();
    if sign == 0.0 {
        // an exact node, or NaN input
        return Amplitude { psi: h.value * ln_n.exp(), degenerate: false };
    }
    let psi = sign * (ln_n + h.ln_abs() - 0.5 * y * y).exp();
    Amplitude { psi, degenerate: psi == 0.0 }
}

/// Evaluate ψ<sub>`n`</sub>(`y`) once, returning both derived views.
///
/// Fails if `alpha` is not positive and finite.
pub fn evaluate(n: usize, y: f64, alpha: f64) -> QResult<Amplitude> {
    QError::check_positive("alpha", alpha)?;
    Ok(amplitude(n, y, alpha))
}

// `alpha` must already be known to be positive
pub(crate) fn amplitude(n: usize, y: f64, alpha: f64) -> Amplitude {
    combine(ln_norm(n, alpha), hermite_scaled(n, y), y)
}

/// Compute ψ<sub>`n`</sub>(`y`).
///
/// Fails if `alpha` is not positive and finite.
pub fn wavefunction(n: usize, y: f64, alpha: f64) -> QResult<f64> {
    evaluate(n, y, alpha).map(|amp| amp.psi())
}

/// Compute |ψ<sub>`n`</sub>(`y`)|².
///
/// Fails if `alpha` is not positive and finite.
pub fn probability_density(n: usize, y: f64, alpha: f64) -> QResult<f64> {
    evaluate(n, y, alpha).map(|amp| amp.density())
}

/// ψ<sub>*n*</sub> sampled over an array of points.
#[derive(Clone, Debug, PartialEq)]
pub struct WfSample {
    /// Quantum number.
    pub n: usize,
    /// Amplitudes.
    pub psi: nd::Array1<f64>,
    /// Points where the amplitude underflowed to zero.
    pub degenerate: nd::Array1<bool>,
}

impl WfSample {
    /// Compute the probability densities from the stored amplitudes.
    pub fn density(&self) -> nd::Array1<f64> { self.psi.mapv(|p| p * p) }

    /// Number of points where the amplitude underflowed.
    pub fn num_degenerate(&self) -> usize {
        self.degenerate.iter().filter(|d| **d).count()
    }

    /// Number of sample points.
    pub fn len(&self) -> usize { self.psi.len() }

    /// `true` if there are no sample points.
    pub fn is_empty(&self) -> bool { self.psi.is_empty() }
}

// assemble a `WfSample` from one row of the rescaled recurrence
fn collect_sample<S, T, U>(
    n: usize,
    ln_n: f64,
    h: &Arr1<S>,
    ln_scale: &Arr1<T>,
    y: &Arr1<U>,
) -> WfSample
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    let amps: nd::Array1<Amplitude>
        = nd::Zip::from(h).and(ln_scale).and(y)
        .map_collect(|&value, &ln_scale, &yj| {
            combine(ln_n, Scaled { value, ln_scale }, yj)
        });
    let sample = WfSample {
        n,
        psi: amps.mapv(|a| a.psi),
        degenerate: amps.mapv(|a| a.degenerate),
    };
    let m = sample.num_degenerate();
    if m > 0 {
        trace!(n, degenerate = m, "amplitude underflowed to zero");
    }
    sample
}

/// Evaluate ψ<sub>`n`</sub> over an array of points.
///
/// Fails if `alpha` is not positive and finite.
pub fn evaluate_arr<S>(n: usize, y: &Arr1<S>, alpha: f64) -> QResult<WfSample>
where S: nd::Data<Elem = f64>
{
    QError::check_positive("alpha", alpha)?;
    let (h, ln_scale) = hermite_scaled_arr(n, y);
    Ok(collect_sample(n, ln_norm(n, alpha), &h, &ln_scale, y))
}

/// Evaluate all of ψ<sub>0</sub>, ..., ψ<sub>`nmax`</sub> over an array of
/// points with a single sweep of the Hermite recurrence.
///
/// The `k`-th element of the returned vector is identical to
/// `evaluate_arr(k, y, alpha)`.
pub fn eigenstates<S>(nmax: usize, y: &Arr1<S>, alpha: f64)
    -> QResult<Vec<WfSample>>
where S: nd::Data<Elem = f64>
{
    QError::check_positive("alpha", alpha)?;
    let mut h0: nd::Array1<f64> = nd::Array1::ones(y.len());
    let mut h1: nd::Array1<f64> = y.mapv(|yk| 2.0 * yk);
    let mut ln_scale: nd::Array1<f64> = nd::Array1::zeros(y.len());
    let mut states: Vec<WfSample> = Vec::with_capacity(nmax + 1);
    states.push(collect_sample(0, ln_norm(0, alpha), &h0, &ln_scale, y));
    if nmax == 0 { return Ok(states); }
    states.push(collect_sample(1, ln_norm(1, alpha), &h1, &ln_scale, y));
    for k in 1..nmax {
        nd::Zip::from(&mut h0).and(&mut h1).and(&mut ln_scale).and(y)
            .for_each(|h0j, h1j, sj, &yj| {
                step(k, yj, h0j, h1j);
                rescale(h0j, h1j, sj);
            });
        states.push(
            collect_sample(k + 1, ln_norm(k + 1, alpha), &h1, &ln_scale, y));
    }
    Ok(states)
}

/// Stack the amplitudes of several samples as the rows of a matrix.
///
/// Returns an empty `0 × 0` matrix if `states` is empty; all samples must
/// share the same length.
pub fn psi_matrix(states: &[WfSample]) -> QResult<nd::Array2<f64>> {
    let Some(first) = states.first() else {
        return Ok(nd::Array2::zeros((0, 0)));
    };
    let mut mat: nd::Array2<f64> = nd::Array2::zeros((states.len(), first.len()));
    for (mut row, state) in mat.outer_iter_mut().zip(states) {
        LengthError::check(&first.psi, &state.psi)?;
        row.assign(&state.psi);
    }
    Ok(mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{ trapz, wf_dot, wf_norm };

    #[test]
    fn ground_state_peak() {
        let psi0 = wavefunction(0, 0.0, 1.0).unwrap();
        assert!((psi0 - 0.7511255444649425).abs() < 1e-12);
        let rho0 = probability_density(0, 0.0, 1.0).unwrap();
        assert!((rho0 - PI.powf(-0.5)).abs() < 1e-12);
    }

    #[test]
    fn matches_naive_formula_for_small_n() {
        let fact = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0];
        for (n, f) in fact.iter().enumerate() {
            for &y in [-3.0, -1.2, 0.4, 2.2].iter() {
                let naive
                    = (2.0 / PI).powf(0.25)
                    / (2.0_f64.powi(n as i32) * f).sqrt()
                    * crate::hermite::hermite(n, y)
                    * (-y * y / 2.0).exp();
                let computed = wavefunction(n, y, 2.0).unwrap();
                assert!(
                    (naive - computed).abs() < 1e-12,
                    "n = {n}, y = {y}: {naive} vs {computed}",
                );
            }
        }
    }

    #[test]
    fn rejects_bad_alpha() {
        assert!(wavefunction(0, 0.0, 0.0).is_err());
        assert!(wavefunction(0, 0.0, -1.0).is_err());
        assert!(probability_density(3, 1.0, f64::NAN).is_err());
        assert!(norm(2, -2.0).is_err());
        let y = nd::array![0.0, 1.0];
        assert!(evaluate_arr(1, &y, 0.0).is_err());
        assert!(eigenstates(3, &y, -1.0).is_err());
    }

    #[test]
    fn parity_is_exact() {
        for n in 0..12 {
            for &y in [0.3, 1.0, 2.0, 3.7, 6.5].iter() {
                let p = wavefunction(n, y, 1.0).unwrap();
                let m = wavefunction(n, -y, 1.0).unwrap();
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                assert_eq!(m, sign * p);
            }
        }
    }

    #[test]
    fn density_is_square_of_amplitude() {
        let amp = evaluate(3, 0.8, 1.0).unwrap();
        assert_eq!(amp.density(), amp.psi() * amp.psi());
        assert!(amp.density() >= 0.0);
        assert!(!amp.degenerate());
    }

    #[test]
    fn nodes_are_not_degenerate() {
        let amp = evaluate(1, 0.0, 1.0).unwrap();
        assert_eq!(amp.psi(), 0.0);
        assert!(!amp.degenerate());
    }

    #[test]
    fn deep_tail_is_flagged() {
        let amp = evaluate(0, 40.0, 1.0).unwrap();
        assert_eq!(amp.psi(), 0.0);
        assert!(amp.degenerate());

        let y = nd::array![-40.0, 0.0, 40.0];
        let sample = evaluate_arr(2, &y, 1.0).unwrap();
        assert_eq!(sample.num_degenerate(), 2);
        assert_eq!(sample.degenerate, nd::array![true, false, true]);
    }

    #[test]
    fn huge_coordinates_are_flagged() {
        for (n, y) in [(1, 1e308), (2, 1e154), (2, 1e160), (5, 1e200)] {
            for y in [y, -y] {
                let amp = evaluate(n, y, 1.0).unwrap();
                assert_eq!(amp.psi(), 0.0, "n = {n}, y = {y}");
                assert!(amp.degenerate());
                assert_eq!(amp.density(), 0.0);
            }
        }
        let y = nd::array![-1e200, 0.5, 1e200];
        let sample = evaluate_arr(5, &y, 1.0).unwrap();
        assert!(sample.psi.iter().all(|p| p.is_finite()));
        assert_eq!(sample.degenerate, nd::array![true, false, true]);
        let states = eigenstates(5, &y, 1.0).unwrap();
        assert_eq!(states[5], sample);
    }

    #[test]
    fn high_n_stays_normalized() {
        // naive 2^n n! overflows near n = 170
        for n in [170, 200, 500] {
            let turning = (2.0 * n as f64 + 1.0).sqrt();
            let y: nd::Array1<f64>
                = nd::Array1::linspace(-turning - 8.0, turning + 8.0, 20001);
            let dy = y[1] - y[0];
            let sample = evaluate_arr(n, &y, 1.0).unwrap();
            assert!(sample.psi.iter().all(|p| p.is_finite()));
            let total = trapz(&sample.density(), dy);
            assert!((total - 1.0).abs() < 1e-3, "n = {n}: norm = {total}");
        }
    }

    #[test]
    fn sweep_matches_individual_evaluation() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-30.0, 30.0, 241);
        let states = eigenstates(300, &y, 1.3).unwrap();
        assert_eq!(states.len(), 301);
        for n in [0, 1, 2, 50, 299, 300] {
            assert_eq!(states[n], evaluate_arr(n, &y, 1.3).unwrap());
        }
    }

    #[test]
    fn low_states_are_orthonormal() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-8.0, 8.0, 2000);
        let dy = y[1] - y[0];
        let states = eigenstates(3, &y, 1.0).unwrap();
        for (i, si) in states.iter().enumerate() {
            for (j, sj) in states.iter().enumerate() {
                let overlap = wf_dot(&si.psi, &sj.psi, dy);
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((overlap - expected).abs() < 1e-2);
            }
            assert!((wf_norm(&si.psi, dy) - 1.0).abs() < 1e-2);
        }
    }

    #[test]
    fn stacked_amplitudes() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-4.0, 4.0, 9);
        let states = eigenstates(2, &y, 1.0).unwrap();
        let mat = psi_matrix(&states).unwrap();
        assert_eq!(mat.dim(), (3, 9));
        assert_eq!(mat.row(2), states[2].psi);
        assert_eq!(psi_matrix(&[]).unwrap().dim(), (0, 0));
        let short = evaluate_arr(0, &y.slice(nd::s![..4]), 1.0).unwrap();
        assert!(psi_matrix(&[states[0].clone(), short]).is_err());
    }
}
