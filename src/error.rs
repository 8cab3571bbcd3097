//! Error type for the one explicit failure mode this crate raises.
//!
//! A small `Result<_, CoreError>`-style error type covering the one variant this crate's entry
//! points actually raise: Zohar called on an empty system.

use std::error::Error;
use std::fmt;

/// Failure modes raised explicitly by this crate's entry points.
///
/// Numerical degeneracy (singular Toeplitz systems, zero innovation variance, unit-magnitude
/// reflection coefficients) is *not* represented here: those propagate as infinities/NaNs in the
/// output rather than as an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// `zohar::solve` (or a variant) was called with `n < 1`, i.e. an empty `a`/`r` vector.
    EmptySystem,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptySystem => {
                write!(f, "Zohar-Trench solve requires a nonempty Toeplitz system (n >= 1)")
            }
        }
    }
}

impl Error for CoreError {}
