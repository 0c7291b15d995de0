//! Quantum numbers identifying oscillator eigenstates.
//!
//! Most functions in this crate take a bare `usize` for the quantum number,
//! which is non-negative and integral by construction. `QuantumState` exists
//! for the places where a quantum number arrives from outside the type system
//! (command-line arguments, floating-point configuration) and has to be
//! checked first.

use std::fmt;
use crate::error::{ QError, QResult };

/// Even or odd symmetry of an eigenstate under `y → -y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// `ψ(-y) = ψ(y)`
    Even,
    /// `ψ(-y) = -ψ(y)`
    Odd,
}

impl Parity {
    /// `+1.0` for `Even`, `-1.0` for `Odd`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Even => 1.0,
            Self::Odd => -1.0,
        }
    }
}

/// A validated quantum number `n ≥ 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumState(usize);

impl QuantumState {
    /// Get the quantum number.
    pub fn n(self) -> usize { self.0 }

    /// Get the parity of the associated eigenstate.
    pub fn parity(self) -> Parity {
        if self.0 % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    /// Iterate over the first `count` states, starting from the ground state.
    pub fn first(count: usize) -> impl Iterator<Item = Self> {
        (0..count).map(Self)
    }
}

impl From<usize> for QuantumState {
    fn from(n: usize) -> Self { Self(n) }
}

impl From<QuantumState> for usize {
    fn from(state: QuantumState) -> Self { state.0 }
}

impl TryFrom<i64> for QuantumState {
    type Error = QError;

    fn try_from(n: i64) -> QResult<Self> {
        usize::try_from(n)
            .map(Self)
            .map_err(|_| QError::BadQuantumNumber(n as f64))
    }
}

impl TryFrom<f64> for QuantumState {
    type Error = QError;

    fn try_from(n: f64) -> QResult<Self> {
        if n.is_finite() && n >= 0.0 && n.fract() == 0.0
            && n <= usize::MAX as f64
        {
            Ok(Self(n as usize))
        } else {
            Err(QError::BadQuantumNumber(n))
        }
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n = {}", self.0)
    }
}
