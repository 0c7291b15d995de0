//! Provides numerically stable, closed-form models of molecular vibration:
//! the quantum harmonic oscillator and the Morse oscillator.
//!
//! Provides implementations for the following:
//! - Physicists' Hermite polynomials *H*<sub>*n*</sub>(*x*) by three-term
//!   recurrence, either plain or rescaled so that ln|*H*<sub>*n*</sub>| is
//!   available for arbitrarily large *n*
//! - Normalized harmonic-oscillator eigenfunctions ψ<sub>*n*</sub>(*y*) and
//!   probability densities, evaluated in log space
//! - Harmonic and Morse energy ladders, with transition energies
//! - Morse and harmonic potential curves
//! - Sampling of arbitrary labelled functions over a monotonic domain into a
//!   table (optionally in parallel with the `parallel` feature)
//!
//! All public operations are pure functions of immutable inputs. Invalid
//! inputs are rejected with a [`QError`][error::QError]; amplitudes that
//! underflow to zero are flagged rather than treated as errors.
//!
//! See [`docs`] for theoretical background.

pub mod energy;
pub mod error;
pub mod hermite;
pub mod morse;
pub mod params;
pub mod potential;
pub mod sample;
pub mod special;
pub mod state;
pub mod units;
pub mod utils;
pub mod wavefunction;

pub mod docs;

pub use error::{ QError, QResult };
pub use params::PhysicalParams;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
