//! Lattice metrics and neighbourhood enumeration for gridwalk.
//!
//! This crate holds the scalar metric evaluators and the enumeration
//! engine: lazy iterators over the integer points at (or within) a given
//! Manhattan or Chebyshev distance of a center, optionally clipped to an
//! inclusive [`Bounds`] box.
//!
//! # Enumerators
//!
//! - [`manhattan_ring`] / [`manhattan_ring_clipped`]: diamond perimeter, `4·d` points
//! - [`manhattan_disk`] / [`manhattan_disk_clipped`]: filled diamond
//! - [`chebyshev_ring`] / [`chebyshev_ring_clipped`]: square perimeter, `max(1, 8·d)` points
//! - [`chebyshev_disk`] / [`chebyshev_disk_clipped`]: filled square
//!
//! Degenerate input never fails: a Manhattan ring or disk with `d < 1` is
//! empty, a Chebyshev ring with `d == 0` is the center alone, and an
//! inverted or disjoint box simply yields nothing.
//!
//! # Configuration
//!
//! Queries can also be described as [`NeighbourhoodSpec`] values and
//! compiled to a [`NeighbourhoodPlan`] for O(1) membership and rank lookups.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod chebyshev;
pub mod disk;
pub mod manhattan;
pub mod metric;
pub mod neighbourhood;
pub mod perimeter;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::Bounds;
pub use chebyshev::{
    chebyshev_disk, chebyshev_disk_clipped, chebyshev_ring, chebyshev_ring_clipped,
};
pub use disk::Disk;
pub use manhattan::{
    manhattan_disk, manhattan_disk_clipped, manhattan_ring, manhattan_ring_clipped,
};
pub use metric::{
    chebyshev_distance, chebyshev_norm, euclidean_distance, euclidean_norm, manhattan_distance,
    manhattan_norm, minkowski_distance, minkowski_norm, try_minkowski_distance, Chebyshev,
    LatticeMetric, Manhattan,
};
pub use neighbourhood::{Cells, NeighbourhoodPlan, NeighbourhoodSpec};
pub use perimeter::Perimeter;
