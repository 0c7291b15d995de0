//! Discrete energy spectra.
//!
//! For the harmonic oscillator,
//! ```text
//! E[n] = (n + 1/2) ħω,  n = 0, 1, 2, ...
//! ```
//! so every ladder is strictly increasing with constant spacing ħω. Ladders
//! for the Morse oscillator are built by
//! [`MorsePotential::levels`][crate::morse::MorsePotential::levels] and share
//! the same [`EnergyLadder`] type, but their spacing shrinks with `n`.

use std::slice;
use crate::error::{ QError, QResult };

/// A single entry in an [`EnergyLadder`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Level {
    /// Quantum number.
    pub n: usize,
    /// Energy.
    pub e: f64,
}

/// A transition between two levels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Quantum number of the lower level.
    pub from: usize,
    /// Quantum number of the upper level.
    pub to: usize,
    /// Energy difference (always non-negative).
    pub de: f64,
}

/// Ordered sequence of `(n, E[n])` pairs, starting from `n = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyLadder {
    levels: Vec<Level>,
}

impl EnergyLadder {
    // levels must be indexed 0, 1, ...
    pub(crate) fn from_energies<I>(energies: I) -> Self
    where I: IntoIterator<Item = f64>
    {
        let levels: Vec<Level>
            = energies.into_iter().enumerate()
            .map(|(n, e)| Level { n, e })
            .collect();
        Self { levels }
    }

    /// Number of levels.
    pub fn len(&self) -> usize { self.levels.len() }

    /// `true` if the ladder has no levels.
    pub fn is_empty(&self) -> bool { self.levels.is_empty() }

    /// Get the level with quantum number `n`, if present.
    pub fn get(&self, n: usize) -> Option<Level> { self.levels.get(n).copied() }

    /// Get the highest level, if present.
    pub fn top(&self) -> Option<Level> { self.levels.last().copied() }

    /// Iterate over all levels in order of increasing `n`.
    pub fn iter(&self) -> slice::Iter<'_, Level> { self.levels.iter() }

    /// Collect just the energies.
    pub fn energies(&self) -> Vec<f64> {
        self.levels.iter().map(|lev| lev.e).collect()
    }

    /// Get the transition between levels `n` and `m`, if both are present.
    pub fn transition(&self, n: usize, m: usize) -> Option<Transition> {
        let a = self.get(n)?;
        let b = self.get(m)?;
        let (lo, hi) = if a.e <= b.e { (a, b) } else { (b, a) };
        Some(Transition { from: lo.n, to: hi.n, de: hi.e - lo.e })
    }

    /// List the `n → n + 1` transitions for the whole ladder.
    pub fn adjacent_transitions(&self) -> Vec<Transition> {
        self.levels.iter().zip(self.levels.iter().skip(1))
            .map(|(lo, hi)| Transition { from: lo.n, to: hi.n, de: hi.e - lo.e })
            .collect()
    }

    /// List the differences between adjacent energies.
    pub fn spacings(&self) -> Vec<f64> {
        self.adjacent_transitions().into_iter()
            .map(|tr| tr.de)
            .collect()
    }

    /// Return `true` if every energy is strictly greater than the last.
    pub fn is_strictly_increasing(&self) -> bool {
        self.levels.iter().zip(self.levels.iter().skip(1))
            .all(|(lo, hi)| hi.e > lo.e)
    }
}

impl<'a> IntoIterator for &'a EnergyLadder {
    type Item = &'a Level;
    type IntoIter = slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Compute the energy of the `n`-th harmonic-oscillator level.
pub fn energy(n: usize, hbar: f64, omega: f64) -> f64 {
    (n as f64 + 0.5) * hbar * omega
}

/// Compute the first `count` harmonic-oscillator levels.
///
/// Fails if `count` is zero or `hbar` or `omega` are not positive and finite.
///
/// ```
/// use qvib::energy::levels;
///
/// let ladder = levels(6, 1.0, 3.0).unwrap();
/// assert_eq!(ladder.energies(), vec![1.5, 4.5, 7.5, 10.5, 13.5, 16.5]);
/// ```
pub fn levels(count: usize, hbar: f64, omega: f64) -> QResult<EnergyLadder> {
    QError::check_count(count)?;
    QError::check_positive("hbar", hbar)?;
    QError::check_positive("omega", omega)?;
    Ok(EnergyLadder::from_energies((0..count).map(|n| energy(n, hbar, omega))))
}

/// Compute |*E*<sub>`n`</sub> − *E*<sub>`m`</sub>| for the harmonic
/// oscillator.
pub fn transition_energy(n: usize, m: usize, hbar: f64, omega: f64) -> f64 {
    n.abs_diff(m) as f64 * hbar * omega
}
