//! Neighbourhood specifications and compiled neighbourhood plans.

use crate::bounds::Bounds;
use crate::disk::Disk;
use crate::metric::{Chebyshev, LatticeMetric, Manhattan};
use crate::perimeter::Perimeter;
use gridwalk_core::{GeomError, LatticeScalar, Point};
use indexmap::IndexSet;
use std::iter::FusedIterator;

/// Describes a lattice neighbourhood to enumerate.
///
/// A spec is a plain value: [`iter`](Self::iter) walks it lazily, and
/// [`compile`](Self::compile) materializes it into a [`NeighbourhoodPlan`]
/// for repeated lookups.
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::{Bounds, NeighbourhoodSpec};
///
/// let spec = NeighbourhoodSpec::ChebyshevRing {
///     center: Point::new(1, 1),
///     distance: 2,
///     clip: Some(Bounds::new(Point::new(0, 0), Point::new(5, 5))),
/// };
/// let plan = spec.compile();
/// assert_eq!(plan.len(), 7);
/// assert_eq!(plan.rank_of(Point::new(3, 0)), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NeighbourhoodSpec<T> {
    /// Points at Manhattan distance exactly `distance`.
    ManhattanRing {
        /// Center point.
        center: Point<T>,
        /// Exact distance; below one is empty.
        distance: T,
        /// Optional clip box.
        clip: Option<Bounds<T>>,
    },
    /// Points at Manhattan distance at most `distance`.
    ManhattanDisk {
        /// Center point.
        center: Point<T>,
        /// Maximum distance (inclusive); below one is empty.
        distance: T,
        /// Optional clip box.
        clip: Option<Bounds<T>>,
    },
    /// Points at Chebyshev distance exactly `distance`.
    ChebyshevRing {
        /// Center point.
        center: Point<T>,
        /// Exact distance; zero is the center alone.
        distance: T,
        /// Optional clip box.
        clip: Option<Bounds<T>>,
    },
    /// Points at Chebyshev distance at most `distance`.
    ChebyshevDisk {
        /// Center point.
        center: Point<T>,
        /// Maximum distance (inclusive); below one is empty.
        distance: T,
        /// Optional clip box.
        clip: Option<Bounds<T>>,
    },
}

impl<T: LatticeScalar> NeighbourhoodSpec<T> {
    /// Center of the neighbourhood.
    pub fn center(&self) -> Point<T> {
        match self {
            Self::ManhattanRing { center, .. }
            | Self::ManhattanDisk { center, .. }
            | Self::ChebyshevRing { center, .. }
            | Self::ChebyshevDisk { center, .. } => *center,
        }
    }

    /// Distance parameter.
    pub fn distance(&self) -> T {
        match self {
            Self::ManhattanRing { distance, .. }
            | Self::ManhattanDisk { distance, .. }
            | Self::ChebyshevRing { distance, .. }
            | Self::ChebyshevDisk { distance, .. } => *distance,
        }
    }

    /// Clip box, if any.
    pub fn clip(&self) -> Option<Bounds<T>> {
        match self {
            Self::ManhattanRing { clip, .. }
            | Self::ManhattanDisk { clip, .. }
            | Self::ChebyshevRing { clip, .. }
            | Self::ChebyshevDisk { clip, .. } => *clip,
        }
    }

    /// The same neighbourhood clipped to `bounds`, replacing any previous box.
    pub fn with_clip(mut self, bounds: Bounds<T>) -> Self {
        match &mut self {
            Self::ManhattanRing { clip, .. }
            | Self::ManhattanDisk { clip, .. }
            | Self::ChebyshevRing { clip, .. }
            | Self::ChebyshevDisk { clip, .. } => *clip = Some(bounds),
        }
        self
    }

    /// Strict check for callers that treat degenerate input as a mistake.
    ///
    /// Rejects a negative distance and an inverted clip box. Enumeration
    /// does not require this: invalid specs simply walk nothing.
    pub fn validate(&self) -> Result<(), GeomError> {
        let distance = self.distance();
        if distance < T::zero() {
            return Err(GeomError::NegativeDistance {
                distance: distance.to_string(),
            });
        }
        if let Some(b) = self.clip() {
            Bounds::try_new(b.low, b.high)?;
        }
        Ok(())
    }

    /// Lazily walk the neighbourhood in its traversal order.
    pub fn iter(&self) -> Cells<T> {
        match *self {
            Self::ManhattanRing {
                center,
                distance,
                clip,
            } => Cells::Ring(ring(Manhattan, center, distance, clip)),
            Self::ChebyshevRing {
                center,
                distance,
                clip,
            } => Cells::Ring(ring(Chebyshev, center, distance, clip)),
            Self::ManhattanDisk {
                center,
                distance,
                clip,
            } => Cells::Disk(disk(Manhattan, center, distance, clip)),
            Self::ChebyshevDisk {
                center,
                distance,
                clip,
            } => Cells::Disk(disk(Chebyshev, center, distance, clip)),
        }
    }

    /// Materialize the neighbourhood into a plan.
    pub fn compile(&self) -> NeighbourhoodPlan<T> {
        let cells: IndexSet<Point<T>> = self.iter().collect();
        let bounds = Bounds::from_points(cells.iter().copied());
        NeighbourhoodPlan { cells, bounds }
    }
}

fn ring<M: LatticeMetric, T: LatticeScalar>(
    metric: M,
    center: Point<T>,
    distance: T,
    clip: Option<Bounds<T>>,
) -> Perimeter<T> {
    match clip {
        Some(bounds) => metric.ring_clipped(center, distance, bounds),
        None => metric.ring(center, distance),
    }
}

fn disk<M: LatticeMetric, T: LatticeScalar>(
    metric: M,
    center: Point<T>,
    distance: T,
    clip: Option<Bounds<T>>,
) -> Disk<T> {
    match clip {
        Some(bounds) => metric.disk_clipped(center, distance, bounds),
        None => metric.disk(center, distance),
    }
}

impl<'a, T: LatticeScalar> IntoIterator for &'a NeighbourhoodSpec<T> {
    type Item = Point<T>;
    type IntoIter = Cells<T>;

    fn into_iter(self) -> Cells<T> {
        self.iter()
    }
}

/// Lazy walk over a [`NeighbourhoodSpec`].
#[derive(Clone, Debug)]
pub enum Cells<T> {
    /// Ring perimeter walk.
    Ring(Perimeter<T>),
    /// Filled-ball column scan.
    Disk(Disk<T>),
}

impl<T: LatticeScalar> Iterator for Cells<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Point<T>> {
        match self {
            Self::Ring(walk) => walk.next(),
            Self::Disk(walk) => walk.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Ring(walk) => walk.size_hint(),
            Self::Disk(walk) => walk.size_hint(),
        }
    }
}

impl<T: LatticeScalar> FusedIterator for Cells<T> {}

/// A materialized neighbourhood.
///
/// Keeps the traversal order of the spec it was compiled from, with O(1)
/// membership and rank lookups.
#[derive(Clone, Debug)]
pub struct NeighbourhoodPlan<T> {
    cells: IndexSet<Point<T>>,
    bounds: Option<Bounds<T>>,
}

impl<T: LatticeScalar> NeighbourhoodPlan<T> {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the neighbourhood has no points.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` belongs to the neighbourhood.
    pub fn contains(&self, p: Point<T>) -> bool {
        self.cells.contains(&p)
    }

    /// Position of `p` in traversal order.
    pub fn rank_of(&self, p: Point<T>) -> Option<usize> {
        self.cells.get_index_of(&p)
    }

    /// Point at traversal position `index`.
    pub fn get(&self, index: usize) -> Option<Point<T>> {
        self.cells.get_index(index).copied()
    }

    /// Points in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.cells.iter().copied()
    }

    /// Tight box around the points, or `None` if empty.
    pub fn bounds(&self) -> Option<Bounds<T>> {
        self.bounds
    }

    /// Points in traversal order, as an owned vector.
    pub fn to_vec(&self) -> Vec<Point<T>> {
        self.iter().collect()
    }
}
