//! Autoregressive (AR) model estimation on stationary, scalar time series.
//!
//! This crate exposes three independent, pure-computation entry points:
//!
//! * [`burg`] — the Burg lattice recursion, estimating AR coefficients, innovation variance,
//!   prediction gain, and the autocorrelation sequence from raw data.
//! * [`zohar`] — the Zohar-Trench O(n^2) direct solver for general (non-symmetric) Toeplitz
//!   linear systems, used internally by prediction and spectral routines that need to solve a
//!   Yule-Walker-shaped system without depending on BLAS/LAPACK.
//! * [`variance`] — closed-form empirical-variance formulae for four estimation methods, meant
//!   as a building block for model-order selection criteria (which this crate does not itself
//!   implement).
//!
//! None of the three share state, perform I/O, or require concurrency; every entry point is a
//! synchronous function of its inputs. See [`numeric::Scalar`] for the numeric-field bound all
//! three are generic over.

pub mod burg;
pub mod error;
pub mod mean;
pub mod numeric;
pub mod variance;
pub mod zohar;

pub use error::CoreError;
pub use numeric::Scalar;
