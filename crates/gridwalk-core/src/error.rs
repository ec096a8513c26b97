//! Error types for validating entry points.
//!
//! The enumeration engine itself never fails: degenerate input collapses to
//! an empty or singleton sequence. These errors are only produced by the
//! opt-in `try_*` constructors and `validate` methods for callers that want
//! strict input checking.

use crate::point::Axis;
use std::error::Error;
use std::fmt;

/// Errors arising from strict validation of geometric input.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A bounding box has its low corner above its high corner on an axis.
    InvertedBounds {
        /// The offending axis.
        axis: Axis,
        /// Low limit on that axis, formatted.
        low: String,
        /// High limit on that axis, formatted.
        high: String,
    },
    /// A Minkowski order that is zero, negative, or NaN.
    NonPositiveOrder {
        /// The rejected order.
        order: f64,
    },
    /// A negative enumeration distance.
    NegativeDistance {
        /// The rejected distance, formatted.
        distance: String,
    },
    /// Line coefficients `a` and `b` are both zero.
    DegenerateLine,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { axis, low, high } => {
                write!(f, "inverted bounds on {axis} axis: low {low} > high {high}")
            }
            Self::NonPositiveOrder { order } => {
                write!(f, "minkowski order must be positive, got {order}")
            }
            Self::NegativeDistance { distance } => {
                write!(f, "distance must be non-negative, got {distance}")
            }
            Self::DegenerateLine => write!(f, "line coefficients a and b are both zero"),
        }
    }
}

impl Error for GeomError {}
