//! Physicists' Hermite polynomials *H*<sub>*n*</sub>(*x*).
//!
//! All evaluation goes through the three-term recurrence
//! ```text
//! H[0](x) = 1
//! H[1](x) = 2 x
//! H[k + 1](x) = 2 x H[k](x) - 2 k H[k - 1](x)
//! ```
//! which needs no factorials and no explicit polynomial coefficients.
//!
//! *H*<sub>*n*</sub> grows roughly like (2|*x*|)<sup>*n*</sup> (or like
//! √(2<sup>*n*</sup> *n*!) near the origin), so the plain `f64` forms overflow
//! for large `n`. The `*_scaled` variants keep the running pair of the
//! recurrence bounded by repeatedly dividing out an exact power of two and
//! tracking the removed factor as a natural log; see [`Scaled`].
//!
//! ```
//! use qvib::hermite::{ hermite, hermite_scaled };
//!
//! // H[3](x) = 8 x³ - 12 x
//! assert_eq!(hermite(3, 2.0), 40.0);
//!
//! // far beyond what fits in an f64
//! let h = hermite_scaled(1000, 3.0);
//! assert!(h.ln_abs().is_finite() && h.ln_abs() > 709.0);
//! ```

use std::f64::consts::LN_2;
use ndarray as nd;
use crate::Arr1;

// rescaling happens in steps of 2^RESCALE_EXP
const RESCALE_EXP: i32 = 512;

/// A real number stored as `value * exp(ln_scale)`.
///
/// `ln_scale` is always a non-negative integer multiple of `512 ln 2`, so
/// rescaling never introduces rounding error in `value`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scaled {
    /// Mantissa-like part, carrying the sign.
    pub value: f64,
    /// Natural log of the factor divided out of `value`.
    pub ln_scale: f64,
}

impl Scaled {
    /// Natural log of the magnitude; `-∞` for a zero value.
    pub fn ln_abs(self) -> f64 { self.value.abs().ln() + self.ln_scale }

    /// `+1`, `-1`, or `0` according to the sign of the represented number.
    pub fn signum(self) -> f64 {
        if self.value > 0.0 {
            1.0
        } else if self.value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Convert back to a plain `f64`, possibly overflowing to `±∞`.
    pub fn to_f64(self) -> f64 {
        if self.ln_scale == 0.0 {
            self.value
        } else {
            self.signum() * self.ln_abs().exp()
        }
    }
}

// one step of the recurrence: (H[k-1], H[k]) → (H[k], H[k+1])
#[inline]
pub(crate) fn step(k: usize, x: f64, h0: &mut f64, h1: &mut f64) {
    let h2 = 2.0 * x * *h1 - 2.0 * k as f64 * *h0;
    *h0 = *h1;
    *h1 = h2;
}

// divide the running pair by 2^512 if it has grown past 2^512
#[inline]
pub(crate) fn rescale(h0: &mut f64, h1: &mut f64, ln_scale: &mut f64) {
    let big = 2.0_f64.powi(RESCALE_EXP);
    if h0.abs() > big || h1.abs() > big {
        let small = big.recip();
        *h0 *= small;
        *h1 *= small;
        *ln_scale += f64::from(RESCALE_EXP) * LN_2;
    }
}

/// Evaluate *H*<sub>*n*</sub>(*x*).
///
/// Overflows (to `±∞` or NaN) when the true value exceeds the `f64` range;
/// use [`hermite_scaled`] for large `n`.
pub fn hermite(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        _ => {
            let mut h0: f64 = 1.0;
            let mut h1: f64 = 2.0 * x;
            for k in 1..n { step(k, x, &mut h0, &mut h1); }
            h1
        },
    }
}

/// Evaluate *H*<sub>*n*</sub>(*x*) in overflow-safe [`Scaled`] form.
pub fn hermite_scaled(n: usize, x: f64) -> Scaled {
    if n == 0 { return Scaled { value: 1.0, ln_scale: 0.0 }; }
    let mut h0: f64 = 1.0;
    let mut h1: f64 = 2.0 * x;
    let mut ln_scale: f64 = 0.0;
    for k in 1..n {
        step(k, x, &mut h0, &mut h1);
        rescale(&mut h0, &mut h1, &mut ln_scale);
    }
    Scaled { value: h1, ln_scale }
}

/// Evaluate *H*<sub>*n*</sub> over an entire array of points.
///
/// The recurrence is advanced one degree at a time across the whole array, so
/// the total cost is *O*(`n` × `x.len()`).
pub fn hermite_arr<S>(n: usize, x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let mut h0: nd::Array1<f64> = nd::Array1::ones(x.len());
    if n == 0 { return h0; }
    let mut h1: nd::Array1<f64> = x.mapv(|xk| 2.0 * xk);
    for k in 1..n {
        nd::Zip::from(&mut h0).and(&mut h1).and(x)
            .for_each(|h0j, h1j, &xj| step(k, xj, h0j, h1j));
    }
    h1
}

/// Like [`hermite_arr`], but in overflow-safe form.
///
/// Returns the `value` and `ln_scale` parts of each [`Scaled`] result as two
/// arrays.
pub fn hermite_scaled_arr<S>(n: usize, x: &Arr1<S>)
    -> (nd::Array1<f64>, nd::Array1<f64>)
where S: nd::Data<Elem = f64>
{
    let mut h0: nd::Array1<f64> = nd::Array1::ones(x.len());
    let mut ln_scale: nd::Array1<f64> = nd::Array1::zeros(x.len());
    if n == 0 { return (h0, ln_scale); }
    let mut h1: nd::Array1<f64> = x.mapv(|xk| 2.0 * xk);
    for k in 1..n {
        nd::Zip::from(&mut h0).and(&mut h1).and(&mut ln_scale).and(x)
            .for_each(|h0j, h1j, sj, &xj| {
                step(k, xj, h0j, h1j);
                rescale(h0j, h1j, sj);
            });
    }
    (h1, ln_scale)
}

/// Evaluate all of *H*<sub>0</sub>, ..., *H*<sub>`nmax`</sub> over an array
/// of points in a single sweep.
///
/// Row `k` of the returned array holds *H*<sub>*k*</sub>. Values are not
/// rescaled, so this is meant for moderate `nmax`.
pub fn hermite_table<S>(nmax: usize, x: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let mut table: nd::Array2<f64> = nd::Array2::zeros((nmax + 1, x.len()));
    table.row_mut(0).fill(1.0);
    if nmax == 0 { return table; }
    table.row_mut(1).assign(&x.mapv(|xk| 2.0 * xk));
    for k in 1..nmax {
        let next: nd::Array1<f64>
            = nd::Zip::from(table.row(k)).and(table.row(k - 1)).and(x)
            .map_collect(|&hk, &hkm1, &xj| {
                2.0 * xj * hk - 2.0 * k as f64 * hkm1
            });
        table.row_mut(k + 1).assign(&next);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::ln_factorial;

    // explicit forms for the first few polynomials
    fn explicit(n: usize, x: f64) -> f64 {
        match n {
            0 => 1.0,
            1 => 2.0 * x,
            2 => 4.0 * x.powi(2) - 2.0,
            3 => 8.0 * x.powi(3) - 12.0 * x,
            4 => 16.0 * x.powi(4) - 48.0 * x.powi(2) + 12.0,
            5 => 32.0 * x.powi(5) - 160.0 * x.powi(3) + 120.0 * x,
            _ => unreachable!(),
        }
    }

    #[test]
    fn low_orders_match_explicit_forms() {
        for n in 0..=5 {
            for &x in [-2.5, -1.0, -0.3, 0.0, 0.7, 1.9].iter() {
                let expected = explicit(n, x);
                let computed = hermite(n, x);
                assert!(
                    (expected - computed).abs() < 1e-10 * expected.abs().max(1.0),
                    "H[{n}]({x}): expected {expected}, got {computed}",
                );
            }
        }
    }

    #[test]
    fn batched_matches_scalar() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-4.0, 4.0, 33);
        for n in [0, 1, 2, 7, 20] {
            let h = hermite_arr(n, &x);
            h.iter().zip(&x)
                .for_each(|(hk, xk)| assert_eq!(*hk, hermite(n, *xk)));
        }
    }

    #[test]
    fn table_rows_match_batched() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-3.0, 3.0, 17);
        let table = hermite_table(8, &x);
        assert_eq!(table.dim(), (9, 17));
        for n in 0..=8 {
            assert_eq!(table.row(n), hermite_arr(n, &x));
        }
    }

    #[test]
    fn scaled_agrees_where_unscaled_is_finite() {
        for n in [0, 1, 5, 30, 100] {
            for &x in [-3.0, -0.5, 0.25, 2.0].iter() {
                let plain = hermite(n, x);
                let scaled = hermite_scaled(n, x);
                assert_eq!(scaled.ln_scale, 0.0);
                assert_eq!(scaled.to_f64(), plain);
            }
        }
    }

    #[test]
    fn scaled_survives_overflow() {
        let x = 1.5;
        assert!(!hermite(400, x).is_finite());
        let s = hermite_scaled(400, x);
        assert!(s.ln_scale > 0.0);
        assert!(s.ln_abs().is_finite() && s.ln_abs() > 709.0);

        // H[2m](0) = (-1)^m (2m)! / m!
        let s0 = hermite_scaled(400, 0.0);
        let expected = ln_factorial(400) - ln_factorial(200);
        assert!(!hermite(400, 0.0).is_finite());
        assert_eq!(s0.signum(), 1.0);
        assert!((s0.ln_abs() - expected).abs() < 1e-8);
        assert_eq!(hermite_scaled(401, 0.0).signum(), 0.0);
    }

    #[test]
    fn scaled_batched_matches_scalar() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 25);
        let (v, s) = hermite_scaled_arr(300, &x);
        for ((vk, sk), xk) in v.iter().zip(&s).zip(&x) {
            let scalar = hermite_scaled(300, *xk);
            assert_eq!(*vk, scalar.value);
            assert_eq!(*sk, scalar.ln_scale);
        }
    }

    #[test]
    fn exact_parity() {
        for n in 0..40 {
            for &x in [0.1, 0.9, 2.3, 5.0].iter() {
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                assert_eq!(hermite(n, -x), sign * hermite(n, x));
            }
        }
    }
}
