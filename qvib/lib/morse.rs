//! The Morse oscillator,
//! ```text
//! V(r) = Dₑ (1 - exp(-a (r - rₑ)))²
//! ```
//! an anharmonic model of a chemical bond with a finite dissociation energy
//! *D*<sub>ₑ</sub>, equilibrium separation *r*<sub>ₑ</sub>, and stiffness *a*.
//! The potential is zero at *r*<sub>ₑ</sub>, rises steeply for
//! *r* < *r*<sub>ₑ</sub>, and levels off to *D*<sub>ₑ</sub> as *r* → ∞.
//!
//! Its bound-state energies are known in closed form:
//! ```text
//! E[v] = ħω₀ (v + 1/2) - (ħω₀ (v + 1/2))² / 4Dₑ
//! ω₀ = a √(2Dₑ/μ)
//! ```
//! for *v* = 0, ..., *v*<sub>max</sub> = ⌊√(2*μD*ₑ)/(*aħ*) − ½⌋.

use tracing::warn;
use crate::{
    energy::EnergyLadder,
    error::{ QError, QResult },
    potential::Potential,
};

/// Morse potential parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MorsePotential {
    de: f64,
    re: f64,
    a: f64,
}

impl MorsePotential {
    /// Create a new Morse potential from a dissociation energy `de > 0`,
    /// equilibrium distance `re`, and stiffness `a > 0`.
    pub fn new(de: f64, re: f64, a: f64) -> QResult<Self> {
        QError::check_positive("dissociation energy", de)?;
        QError::check_finite("equilibrium distance", re)?;
        QError::check_positive("stiffness", a)?;
        Ok(Self { de, re, a })
    }

    /// Get the dissociation energy *D*<sub>ₑ</sub>.
    pub fn dissociation_energy(&self) -> f64 { self.de }

    /// Get the equilibrium distance *r*<sub>ₑ</sub>.
    pub fn equilibrium_distance(&self) -> f64 { self.re }

    /// Get the stiffness *a*.
    pub fn stiffness(&self) -> f64 { self.a }

    /// Evaluate the potential.
    pub fn potential(&self, r: f64) -> f64 {
        self.de * (-(-self.a * (r - self.re)).exp_m1()).powi(2)
    }

    /// Curvature at the minimum, `k = 2 Dₑ a²`.
    pub fn force_constant(&self) -> f64 { 2.0 * self.de * self.a.powi(2) }

    /// Angular frequency of small oscillations about the minimum for a
    /// particle of (reduced) mass `mass`.
    pub fn harmonic_frequency(&self, mass: f64) -> QResult<f64> {
        QError::check_positive("mass", mass)?;
        Ok(self.a * (2.0 * self.de / mass).sqrt())
    }

    /// Highest bound vibrational quantum number, or `None` if the well is too
    /// shallow to hold even the ground state.
    pub fn max_level(&self, mass: f64, hbar: f64) -> QResult<Option<usize>> {
        QError::check_positive("mass", mass)?;
        QError::check_positive("hbar", hbar)?;
        let lambda = (2.0 * mass * self.de).sqrt() / (self.a * hbar);
        let vmax = (lambda - 0.5).floor();
        Ok((vmax >= 0.0).then_some(vmax as usize))
    }

    /// Compute vibrational energy levels, measured from the bottom of the
    /// well.
    ///
    /// At most `count` levels are returned; fewer if the well does not
    /// support that many bound states. Fails if `count` is zero, if `mass` or
    /// `hbar` are not positive and finite, or if the well has no bound states.
    pub fn levels(&self, count: usize, mass: f64, hbar: f64)
        -> QResult<EnergyLadder>
    {
        QError::check_count(count)?;
        let vmax = self.max_level(mass, hbar)?.ok_or(QError::NoStates)?;
        // `vmax` saturates at `usize::MAX` for extremely deep wells
        let bound = vmax.saturating_add(1);
        if count > bound {
            warn!(
                requested = count,
                bound,
                "Morse ladder truncated at the dissociation limit"
            );
        }
        let hw = hbar * self.harmonic_frequency(mass)?;
        let de = self.de;
        let energies
            = (0..count.min(bound))
            .map(|v| {
                let x = hw * (v as f64 + 0.5);
                x - x * x / (4.0 * de)
            });
        Ok(EnergyLadder::from_energies(energies))
    }
}

impl Potential for MorsePotential {
    fn eval(&self, r: f64) -> f64 { self.potential(r) }

    fn equilibrium(&self) -> f64 { self.re }

    fn turning_points(&self, e: f64) -> Option<(f64, f64)> {
        if !(0.0..self.de).contains(&e) { return None; }
        let s = (e / self.de).sqrt();
        let inner = self.re - (1.0 + s).ln() / self.a;
        let outer = self.re - (1.0 - s).ln() / self.a;
        Some((inner, outer))
    }
}
