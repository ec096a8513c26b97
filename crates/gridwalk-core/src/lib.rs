//! Core types and traits for the gridwalk lattice geometry library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! numeric capability traits every other crate is generic over, the 2D
//! [`Point`] value type, the continuous line/segment helpers, and the
//! [`GeomError`] type returned by validating entry points.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod line;
pub mod point;
pub mod scalar;

pub use error::GeomError;
pub use line::{Line, Segment};
pub use point::{Axis, LatticePoint, Point};
pub use scalar::{partial_max, partial_min, FloatScalar, LatticeScalar, Scalar};
