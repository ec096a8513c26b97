//! Numeric capability traits.
//!
//! Each operation asks for exactly the capability it uses:
//!
//! - [`Scalar`]: subtraction, ordering, absolute value and `Display`.
//!   Enough for the Manhattan and Chebyshev metrics on any signed numeric
//!   type, and for rendering values into error messages.
//! - [`FloatScalar`]: adds roots, powers and trigonometry for the Euclidean
//!   and Minkowski metrics and the continuous line helpers.
//! - [`LatticeScalar`]: signed primitive integers, used by the lattice
//!   enumerators.
//!
//! All three are blanket-implemented, so `i32`, `i64`, `f32`, `f64` and
//! friends satisfy them without any glue.

use num_traits::{Float, PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Signed numeric type with ordering, absolute value and `Display`.
pub trait Scalar: Copy + PartialOrd + Signed + Debug + Display {}

impl<T: Copy + PartialOrd + Signed + Debug + Display> Scalar for T {}

/// Floating-point [`Scalar`] with root, power and trigonometric support.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Signed primitive integer usable as a lattice coordinate.
pub trait LatticeScalar: Scalar + PrimInt + Hash {}

impl<T: Scalar + PrimInt + Hash> LatticeScalar for T {}

/// Larger of two partially ordered values. Returns `a` when unordered.
#[inline]
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Smaller of two partially ordered values. Returns `a` when unordered.
#[inline]
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
