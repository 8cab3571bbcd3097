//! The numeric-field capability every routine in this crate is generic over.
//!
//! `Float + From<u32> + From<f64> + Copy + Add + AddAssign + Div` was repeated on almost every
//! function that needed it. This module names that bound once so the Burg, Zohar, and
//! empirical-variance routines can share it, and relaxes `Float` down to `num_traits::Num` since
//! none of the recursions in this crate ever need a square root or other transcendental
//! operation: the same code serves `f32`, `f64`, and `num::rational::Ratio` alike. `From<u32>` is
//! the only conversion any call site needs (small integer literals for lengths, orders, and the
//! LSFB/LSF formula's `2`/`3` coefficients); dropping `From<f64>` is what actually lets `f32`
//! satisfy this bound, since `f32` has no `From<f64>` impl in `std`.

use num_traits::Num;
use std::ops::{AddAssign, SubAssign};

/// A field-like scalar: the four arithmetic operations, additive/multiplicative identities, and
/// conversion from small integers (needed by the empirical-variance formulae, see
/// `variance::empirical_variance`).
pub trait Scalar: Num + Copy + AddAssign + SubAssign + From<u32> {}

impl<T> Scalar for T where T: Num + Copy + AddAssign + SubAssign + From<u32> {}
