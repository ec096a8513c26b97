//! gridwalk: 2D lattice geometry for integer grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridwalk sub-crates. For most users, adding `gridwalk` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! // Every point at Manhattan distance 4 from (3, 3), in walk order.
//! let ring: Vec<_> = manhattan_ring(Point::new(3, 3), 4).collect();
//! assert_eq!(ring.len(), 16);
//! assert_eq!(ring[0], Point::new(3, -1));
//! assert_eq!(ring[15], Point::new(2, 0));
//!
//! // The same ring restricted to the box [0, 6]².
//! let clip = Bounds::new(Point::new(0, 0), Point::new(6, 6));
//! assert_eq!(manhattan_ring_clipped(Point::new(3, 3), 4, clip).count(), 12);
//!
//! // Scalar metrics.
//! assert_eq!(chebyshev_distance(Point::new(0, 0), Point::new(3, -7)), 7);
//! assert_eq!(euclidean_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
//!
//! // Compiled neighbourhoods answer membership and rank in O(1).
//! let plan = NeighbourhoodSpec::ChebyshevRing {
//!     center: Point::new(0, 0),
//!     distance: 1,
//!     clip: None,
//! }
//! .compile();
//! assert_eq!(plan.len(), 8);
//! assert_eq!(plan.rank_of(Point::new(-1, -1)), Some(0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | Scalars, points, lines, errors |
//! | [`space`] | `gridwalk-space` | Metrics, bounds, ring and disk enumerators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and numeric traits (`gridwalk-core`).
///
/// Contains [`types::Point`], [`types::Line`], [`types::Segment`] and
/// [`types::GeomError`], plus the [`types::Scalar`] trait family.
pub use gridwalk_core as types;

/// Metrics and neighbourhood enumeration (`gridwalk-space`).
///
/// Provides [`space::Bounds`], the metric evaluators, the lazy
/// [`space::Perimeter`] and [`space::Disk`] iterators, and
/// [`space::NeighbourhoodSpec`] compilation.
pub use gridwalk_space as space;

/// Common imports for typical gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwalk_core::{GeomError, LatticePoint, Point};

    // Metrics
    pub use gridwalk_space::{
        chebyshev_distance, euclidean_distance, manhattan_distance, minkowski_distance,
        Chebyshev, LatticeMetric, Manhattan,
    };

    // Enumeration
    pub use gridwalk_space::{
        chebyshev_disk, chebyshev_disk_clipped, chebyshev_ring, chebyshev_ring_clipped,
        manhattan_disk, manhattan_disk_clipped, manhattan_ring, manhattan_ring_clipped, Bounds,
    };

    // Configuration
    pub use gridwalk_space::{NeighbourhoodPlan, NeighbourhoodSpec};
}
