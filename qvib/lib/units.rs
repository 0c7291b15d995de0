#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! conversion to and from the natural units of a harmonic oscillator.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;
use crate::error::{ QError, QResult };

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Avogadro's number
pub const NA: f64 = 6.02214076e23;
//              +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Convert an energy in joules to a spectroscopic wavenumber in cm^-1.
pub fn joules_to_wavenumber(energy: f64) -> f64 { energy / (h * c) / 100.0 }

/// Convert an energy in joules to electron-volts.
pub fn joules_to_ev(energy: f64) -> f64 { energy / e }

/// Convert an energy per molecule in joules to kJ/mol.
pub fn joules_to_kj_per_mol(energy: f64) -> f64 { energy * NA / 1000.0 }

/// Reduced mass of a two-body system.
pub fn reduced_mass(m1: f64, m2: f64) -> QResult<f64> {
    QError::check_positive("mass", m1)?;
    QError::check_positive("mass", m2)?;
    Ok(m1 * m2 / (m1 + m2))
}

/// Natural scales of a harmonic oscillator relative to some base unit system.
///
/// Lengths are measured in units of the ground-state width √(ħ/*μω*) =
/// 1/√*α* (so that the natural coordinate is *y* = √*α* *r*), energies in
/// units of ħω, and times in units of 1/ω.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
    /// Associated (angular) time scale.
    pub t: f64,
}

impl Units {
    /// Construct from a mass, angular frequency, and value of ħ, all given in
    /// the same base unit system.
    pub fn from_oscillator(mass: f64, omega: f64, hbar_base: f64)
        -> QResult<Self>
    {
        QError::check_positive("mass", mass)?;
        QError::check_positive("omega", omega)?;
        QError::check_positive("hbar", hbar_base)?;
        let a = (hbar_base / mass / omega).sqrt();
        Ok(Self { m: mass, a, e: hbar_base * omega, t: omega.recip() })
    }

    /// Construct from a mass and angular frequency given in
    /// meters/kilograms/seconds (MKS) units.
    pub fn from_mks(mass: f64, omega: f64) -> QResult<Self> {
        Self::from_oscillator(mass, omega, hbar)
    }

    /// Convert a quantity with dimensions of length in the base unit system to
    /// natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }

    /// Convert a quantity with dimensions of time in the base unit system to
    /// natural units.
    pub fn to_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.t.recip()
    }
}
