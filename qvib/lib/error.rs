//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every variant of [`QError`] describes a malformed or out-of-domain
//! configuration and is fatal to the call that returned it. Legitimate
//! underflow of very small amplitudes is *not* an error; see
//! [`Amplitude::degenerate`][crate::wavefunction::Amplitude::degenerate].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from any fallible operation in this crate.
#[derive(Debug, Error)]
pub enum QError {
    /// Returned when a quantum number is negative or non-integral.
    #[error("quantum numbers must be non-negative integers; got {0}")]
    BadQuantumNumber(f64),

    /// Returned when a physical constant that must be strictly positive (and
    /// finite) is not.
    #[error("{0} must be positive and finite; got {1}")]
    NonPositive(&'static str, f64),

    /// Returned when a physical constant that must be finite is not.
    #[error("{0} must be finite; got {1}")]
    NonFinite(&'static str, f64),

    /// Returned when an energy ladder is requested with zero states.
    #[error("the number of states must be at least 1")]
    NoStates,

    /// Returned when a sampling domain has no points.
    #[error("sampling domains must contain at least one point")]
    EmptyDomain,

    /// Returned when a sampling domain is not strictly monotonic (or contains
    /// a NaN) at the given index.
    #[error("sampling domains must be strictly monotonic; violated at index {0}")]
    NonMonotonic(usize),

    /// Returned when a Morse-dependent quantity is requested from parameters
    /// with no Morse configuration.
    #[error("no Morse parameters were configured")]
    MissingMorse,

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl QError {
    pub(crate) fn check_positive(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val > 0.0 && val.is_finite()).then_some(())
            .ok_or(Self::NonPositive(name, val))
    }

    pub(crate) fn check_finite(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        val.is_finite().then_some(()).ok_or(Self::NonFinite(name, val))
    }

    pub(crate) fn check_count(count: usize) -> Result<(), Self> {
        (count != 0).then_some(()).ok_or(Self::NoStates)
    }
}

pub type QResult<T> = Result<T, QError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positivity_checks() {
        assert!(QError::check_positive("mass", 1.0).is_ok());
        assert!(matches!(
            QError::check_positive("mass", 0.0),
            Err(QError::NonPositive("mass", _)),
        ));
        assert!(QError::check_positive("hbar", f64::NAN).is_err());
        assert!(QError::check_positive("hbar", f64::INFINITY).is_err());
        assert!(QError::check_finite("re", -3.0).is_ok());
        assert!(QError::check_finite("re", f64::NEG_INFINITY).is_err());
        assert!(QError::check_count(0).is_err());
    }

    #[test]
    fn length_check() {
        let a = nd::array![1.0, 2.0, 3.0];
        let b = nd::array![1.0, 2.0];
        let err = LengthError::check(&a, &b).unwrap_err();
        assert_eq!((err.0, err.1), (3, 2));
        assert!(LengthError::check(&a, &a).is_ok());
    }
}
