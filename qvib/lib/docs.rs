//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Hermite polynomials](#hermite-polynomials)
//! - [Normalization in log space](#normalization-in-log-space)
//! - [Units](#units)
//! - [The Morse oscillator](#the-morse-oscillator)
//!
//! # Background
//! The one-dimensional harmonic oscillator with (reduced) mass *μ* and angular
//! frequency *ω* has the Hamiltonian
//! ```text
//!       ħ²   ∂²    1
//! H = - --- --- + --- μ ω² r²
//!       2 μ ∂r²    2
//! ```
//! whose eigenvalues form an evenly spaced ladder,
//! ```text
//! E[n] = ħω (n + 1/2),  n = 0, 1, 2, ...
//! ```
//! Introducing *α* = *μω*/*ħ* and the dimensionless coordinate *y* = √*α* *r*,
//! the eigenfunctions are
//! ```text
//!             α  1/4     1
//! ψ[n](y) = (---)    --------- H[n](y) exp(-y²/2)
//!             π      √(2ⁿ n!)
//! ```
//! where *H*<sub>*n*</sub> is the *n*-th physicists' Hermite polynomial. With
//! this choice of prefactor, ψ<sub>*n*</sub>(√*α* *r*) is normalized with
//! respect to *r*; integrating |ψ<sub>*n*</sub>|² over *y* instead gives
//! √*α*. Each eigenfunction has definite parity,
//! ```text
//! ψ[n](-y) = (-1)ⁿ ψ[n](y)
//! ```
//! and *n* nodes, all of which lie inside the classically allowed region
//! |*y*| < √(2*n* + 1).
//!
//! # Hermite polynomials
//! The physicists' Hermite polynomials satisfy
//! ```text
//! H[0](x) = 1
//! H[1](x) = 2 x
//! H[k + 1](x) = 2 x H[k](x) - 2 k H[k - 1](x)
//! ```
//! The recurrence is stable in the forward direction, but its values grow
//! roughly like 2ⁿ *x*ⁿ for large |*x*| and like √(2ⁿ *n*!) near the origin,
//! overflowing an `f64` for *n* in the low hundreds. Since the recurrence is
//! linear and homogeneous in the running pair (*H*<sub>*k* − 1</sub>,
//! *H*<sub>*k*</sub>), both members can be divided by a common factor at any
//! step without changing the ratio of later values. The rescaled evaluation in
//! [`hermite`][crate::hermite] divides the pair by 2⁵¹² whenever either member
//! exceeds 2⁵¹² in magnitude and accumulates the natural log of the removed
//! factors separately:
//! ```text
//! H[n](x) = h exp(s)
//! ```
//! Dividing by a power of two is exact in binary floating point, so signs and
//! zeros (and hence parity) are preserved bit-for-bit.
//!
//! # Normalization in log space
//! The prefactor 1/√(2ⁿ *n*!) underflows just as *H*<sub>*n*</sub> overflows,
//! so the product cannot be formed directly. Instead,
//! ```text
//! ln N[n] = (1/4) ln(α/π) - (1/2) (n ln 2 + ln Γ(n + 1))
//! ln|ψ[n](y)| = ln N[n] + ln|h| + s - y²/2
//! ```
//! and ψ is recovered by a single exponentiation with the sign of *h*. The
//! log-gamma function is computed with the Lanczos approximation (*g* = 7,
//! nine coefficients), which is accurate to near machine precision for
//! positive arguments.
//!
//! In the far classically forbidden region, ln|ψ| can drop below the log of
//! the smallest subnormal `f64` (about −745), where the exponential flushes to
//! zero. The true value is nonzero, so such points are reported as
//! *degenerate*. Exact zeros at genuine nodes (e.g. ψ<sub>1</sub>(0)) are not
//! degenerate.
//!
//! # Units
//! The natural scales of the oscillator are
//! ```text
//! length: 1/√α = √(ħ/μω)
//! energy: ħω
//! time:   1/ω
//! ```
//! In these units the potential is *y*²/2, the ladder is *n* + 1/2, and the
//! classical turning points of level *n* sit at *y* = ±√(2*n* + 1). See
//! [`Units`][crate::units::Units].
//!
//! # The Morse oscillator
//! Real chemical bonds dissociate. The Morse potential[^1]
//! ```text
//! V(r) = Dₑ (1 - exp(-a (r - rₑ)))²
//! ```
//! has a minimum of zero at the equilibrium separation *r*<sub>ₑ</sub> and
//! tends to the dissociation energy *D*<sub>ₑ</sub> as *r* → ∞. Expanding about
//! the minimum gives a harmonic force constant *k* = 2*D*<sub>ₑ</sub>*a*² and
//! small-oscillation frequency *ω*<sub>0</sub> = *a* √(2*D*<sub>ₑ</sub>/*μ*).
//!
//! The Schrödinger equation for this potential is exactly solvable, with bound
//! energies
//! ```text
//!                          (ħω₀ (v + 1/2))²
//! E[v] = ħω₀ (v + 1/2) - ----------------
//!                               4 Dₑ
//! ```
//! for *v* = 0, ..., *v*<sub>max</sub>, where
//! ```text
//! v_max = ⌊√(2 μ Dₑ) / (a ħ) - 1/2⌋
//! ```
//! Level spacings shrink linearly with *v*, converging toward the dissociation
//! limit. A well with *v*<sub>max</sub> < 0 supports no bound states.
//!
//! The classical turning points at energy 0 ≤ *E* < *D*<sub>ₑ</sub> are
//! ```text
//! r± = rₑ - ln(1 ∓ √(E/Dₑ)) / a
//! ```
//! with the outer point always farther from *r*<sub>ₑ</sub> than the inner.
//!
//! [^1]: P. M. Morse, "Diatomic molecules according to the wave mechanics. II.
//! Vibrational levels." Physical Review **34** 57 (1929).
