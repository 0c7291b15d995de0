//! One-dimensional potential-energy curves.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ QError, QResult },
};

/// A conservative potential *V*(*r*) that can be sampled over a coordinate
/// grid.
pub trait Potential {
    /// Evaluate the potential at a single point.
    fn eval(&self, r: f64) -> f64;

    /// Position of the global minimum.
    fn equilibrium(&self) -> f64;

    /// Evaluate the potential over an array of points.
    fn eval_arr<S>(&self, r: &Arr1<S>) -> nd::Array1<f64>
    where
        S: nd::Data<Elem = f64>,
        Self: Sized,
    {
        r.mapv(|rk| self.eval(rk))
    }

    /// Return the classical turning points for a given energy as `(inner,
    /// outer)`, or `None` if the energy is below the minimum or the motion is
    /// unbounded.
    fn turning_points(&self, e: f64) -> Option<(f64, f64)>;
}

/// Harmonic potential
/// ```text
/// V(r) = k (r - r₀)² / 2
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HarmonicPotential {
    k: f64,
    center: f64,
}

impl HarmonicPotential {
    /// Create a new harmonic potential with spring constant `k > 0` centered
    /// on `center`.
    pub fn new(k: f64, center: f64) -> QResult<Self> {
        QError::check_positive("spring constant", k)?;
        QError::check_finite("center", center)?;
        Ok(Self { k, center })
    }

    // `k` must already be known to be positive
    pub(crate) fn centered(k: f64) -> Self { Self { k, center: 0.0 } }

    /// `V(y) = y²/2`, the harmonic potential in units of ħω with *y* = √*α*
    /// *r*.
    pub fn natural() -> Self { Self { k: 1.0, center: 0.0 } }

    /// Get the spring constant.
    pub fn spring_constant(&self) -> f64 { self.k }
}

impl Potential for HarmonicPotential {
    fn eval(&self, r: f64) -> f64 {
        0.5 * self.k * (r - self.center).powi(2)
    }

    fn equilibrium(&self) -> f64 { self.center }

    fn turning_points(&self, e: f64) -> Option<(f64, f64)> {
        (e >= 0.0).then(|| {
            let d = (2.0 * e / self.k).sqrt();
            (self.center - d, self.center + d)
        })
    }
}
