//! Physical parameters of an oscillator and the quantities derived from them.
//!
//! ```
//! use qvib::params::PhysicalParams;
//!
//! let params = PhysicalParams::new(1.0, 1.0, 1.0).unwrap();
//! assert_eq!(params.alpha(), 1.0);
//! let psi0 = params.wavefunction_y(0, 0.0);
//! assert!((psi0 - 0.7511).abs() < 1e-4);
//! ```

use crate::{
    energy::{ self, EnergyLadder },
    error::{ QError, QResult },
    morse::MorsePotential,
    potential::HarmonicPotential,
    units::Units,
    wavefunction::{ self, Amplitude },
};

/// Immutable oscillator configuration.
///
/// The derived constant *α* = *μω*/*ħ* is computed once on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalParams {
    mass: f64,
    omega: f64,
    hbar: f64,
    alpha: f64,
    morse: Option<MorsePotential>,
}

impl PhysicalParams {
    /// Create a new set of parameters from a (reduced) mass, angular
    /// frequency, and value of ħ.
    ///
    /// Fails if any are not positive and finite, or if *α* over- or
    /// underflows.
    pub fn new(mass: f64, omega: f64, hbar: f64) -> QResult<Self> {
        QError::check_positive("mass", mass)?;
        QError::check_positive("omega", omega)?;
        QError::check_positive("hbar", hbar)?;
        let alpha = mass * omega / hbar;
        QError::check_positive("alpha", alpha)?;
        Ok(Self { mass, omega, hbar, alpha, morse: None })
    }

    /// `μ = ω = ħ = 1`.
    pub fn natural() -> Self {
        Self { mass: 1.0, omega: 1.0, hbar: 1.0, alpha: 1.0, morse: None }
    }

    /// Create a new set of parameters from a spring (force) constant `k`,
    /// with *ω* = √(*k*/*μ*).
    pub fn from_force_constant(k: f64, mass: f64, hbar: f64) -> QResult<Self> {
        QError::check_positive("force constant", k)?;
        QError::check_positive("mass", mass)?;
        Self::new(mass, (k / mass).sqrt(), hbar)
    }

    /// Attach a Morse potential to these parameters.
    pub fn with_morse(mut self, morse: MorsePotential) -> Self {
        self.morse = Some(morse);
        self
    }

    /// Get the (reduced) mass *μ*.
    pub fn mass(&self) -> f64 { self.mass }

    /// Get the angular frequency *ω*.
    pub fn omega(&self) -> f64 { self.omega }

    /// Get the value of ħ.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Get *α* = *μω*/*ħ*.
    pub fn alpha(&self) -> f64 { self.alpha }

    /// Get the energy quantum ħω.
    pub fn quantum(&self) -> f64 { self.hbar * self.omega }

    /// Get the spring constant *k* = *μω*².
    pub fn force_constant(&self) -> f64 { self.mass * self.omega.powi(2) }

    /// Get the ground-state length scale 1/√*α*.
    pub fn length_scale(&self) -> f64 { self.alpha.sqrt().recip() }

    /// Get the Morse potential, if one was attached.
    pub fn morse(&self) -> QResult<&MorsePotential> {
        self.morse.as_ref().ok_or(QError::MissingMorse)
    }

    /// Get the harmonic potential *V*(*r*) = *μω*²*r*²/2.
    pub fn harmonic(&self) -> HarmonicPotential {
        HarmonicPotential::centered(self.force_constant())
    }

    /// Get the natural unit scales of this oscillator.
    pub fn units(&self) -> QResult<Units> {
        Units::from_oscillator(self.mass, self.omega, self.hbar)
    }

    /// Convert a physical coordinate to the dimensionless *y* = √*α* *r*.
    pub fn to_y(&self, r: f64) -> f64 { self.alpha.sqrt() * r }

    /// Convert a dimensionless coordinate back to *r* = *y* / √*α*.
    pub fn to_r(&self, y: f64) -> f64 { y / self.alpha.sqrt() }

    /// Compute the energy of the `n`-th harmonic level.
    pub fn energy(&self, n: usize) -> f64 {
        energy::energy(n, self.hbar, self.omega)
    }

    /// Compute the first `count` harmonic levels.
    pub fn levels(&self, count: usize) -> QResult<EnergyLadder> {
        energy::levels(count, self.hbar, self.omega)
    }

    /// Compute the first `count` bound levels of the attached Morse potential.
    pub fn morse_levels(&self, count: usize) -> QResult<EnergyLadder> {
        self.morse()?.levels(count, self.mass, self.hbar)
    }

    /// Evaluate ψ<sub>`n`</sub> at the dimensionless coordinate `y`.
    pub fn wavefunction_y(&self, n: usize, y: f64) -> f64 {
        self.evaluate_y(n, y).psi()
    }

    /// Evaluate ψ<sub>`n`</sub> at the physical coordinate `r`.
    ///
    /// The result is normalized with respect to *r*.
    pub fn wavefunction_r(&self, n: usize, r: f64) -> f64 {
        self.evaluate_y(n, self.to_y(r)).psi()
    }

    /// Evaluate ψ<sub>`n`</sub> at `y`, returning both the amplitude and
    /// density views.
    pub fn evaluate_y(&self, n: usize, y: f64) -> Amplitude {
        wavefunction::amplitude(n, y, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::Potential;

    #[test]
    fn derived_constants() {
        let p = PhysicalParams::new(2.0, 3.0, 0.5).unwrap();
        assert_eq!(p.alpha(), 12.0);
        assert_eq!(p.quantum(), 1.5);
        assert_eq!(p.force_constant(), 18.0);
        assert!((p.to_r(p.to_y(0.7)) - 0.7).abs() < 1e-15);
        assert_eq!(p.harmonic().eval(1.0), 9.0);
        assert_eq!(p.levels(2).unwrap().energies(), vec![0.75, 2.25]);
    }

    #[test]
    fn spring_constructor() {
        let p = PhysicalParams::from_force_constant(1902.0, 1.0e-30, 1.0).unwrap();
        assert!((p.omega() - (1902.0e30_f64).sqrt()).abs() / p.omega() < 1e-14);
        assert!(((p.force_constant() - 1902.0) / 1902.0).abs() < 1e-12);
        assert!(PhysicalParams::from_force_constant(-1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_bad_constants() {
        assert!(PhysicalParams::new(0.0, 1.0, 1.0).is_err());
        assert!(PhysicalParams::new(1.0, -1.0, 1.0).is_err());
        assert!(PhysicalParams::new(1.0, 1.0, f64::NAN).is_err());
        // α underflows
        assert!(PhysicalParams::new(1e-300, 1e-300, 1e300).is_err());
    }

    #[test]
    fn morse_is_optional() {
        let p = PhysicalParams::natural();
        assert!(matches!(p.morse(), Err(QError::MissingMorse)));
        assert!(p.morse_levels(3).is_err());
        let m = MorsePotential::new(50.0, 0.0, 1.0).unwrap();
        let p = p.with_morse(m);
        assert_eq!(p.morse().unwrap(), &m);
        assert_eq!(p.morse_levels(3).unwrap().len(), 3);
    }

    #[test]
    fn physical_coordinate_normalization() {
        // ψ(√α r) is normalized over r
        let p = PhysicalParams::new(1.0, 4.0, 1.0).unwrap();
        let r: Vec<f64> = (0..=4000).map(|k| -5.0 + 10.0 * k as f64 / 4000.0).collect();
        let dr = r[1] - r[0];
        for n in 0..3 {
            let total: f64
                = r.iter().map(|rk| p.wavefunction_r(n, *rk).powi(2)).sum::<f64>() * dr;
            assert!((total - 1.0).abs() < 1e-6, "n = {n}: {total}");
        }
    }
}
