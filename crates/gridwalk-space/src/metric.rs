//! Scalar distance functions and the [`LatticeMetric`] seam.
//!
//! The free functions evaluate a single norm or pairwise distance. The
//! Manhattan and Chebyshev forms only need [`Scalar`] (subtract, compare,
//! absolute value); Euclidean and Minkowski need [`FloatScalar`].

use crate::bounds::Bounds;
use crate::disk::{Disk, Profile};
use crate::perimeter::Perimeter;
use crate::{chebyshev, manhattan};
use gridwalk_core::{partial_max, FloatScalar, GeomError, LatticeScalar, Point, Scalar};
use num_traits::{Float, Signed, ToPrimitive};
use std::fmt::Debug;

/// Euclidean length of `p`, via the hypotenuse primitive.
pub fn euclidean_norm<T: FloatScalar>(p: Point<T>) -> T {
    p.magnitude()
}

/// Euclidean (L2) distance between two points.
pub fn euclidean_distance<T: FloatScalar>(a: Point<T>, b: Point<T>) -> T {
    euclidean_norm(b - a)
}

/// Manhattan (L1) length: `|x| + |y|`.
pub fn manhattan_norm<T: Scalar>(p: Point<T>) -> T {
    Signed::abs(&p.x) + Signed::abs(&p.y)
}

/// Manhattan (L1) distance: sum of absolute coordinate differences.
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::manhattan_distance;
///
/// assert_eq!(manhattan_distance(Point::new(0, 0), Point::new(1, 1)), 2);
/// ```
pub fn manhattan_distance<T: Scalar>(a: Point<T>, b: Point<T>) -> T {
    manhattan_norm(b - a)
}

/// Chebyshev (L∞) length: `max(|x|, |y|)`.
pub fn chebyshev_norm<T: Scalar>(p: Point<T>) -> T {
    partial_max(Signed::abs(&p.x), Signed::abs(&p.y))
}

/// Chebyshev (L∞) distance: largest absolute coordinate difference.
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::chebyshev_distance;
///
/// assert_eq!(chebyshev_distance(Point::new(0, 0), Point::new(1, 1)), 1);
/// ```
pub fn chebyshev_distance<T: Scalar>(a: Point<T>, b: Point<T>) -> T {
    chebyshev_norm(b - a)
}

/// Minkowski length of order `r`: `(|x|^r + |y|^r)^(1/r)`.
///
/// `r` must be strictly positive. Other orders are not rejected; they
/// produce whatever infinity or NaN the float arithmetic yields.
pub fn minkowski_norm<T: FloatScalar>(p: Point<T>, r: T) -> T {
    let sum = Float::powf(Float::abs(p.x), r) + Float::powf(Float::abs(p.y), r);
    Float::powf(sum, T::one() / r)
}

/// Minkowski distance of order `r` between two points.
///
/// `r = 1` is Manhattan, `r = 2` is Euclidean. See [`minkowski_norm`] for
/// the handling of non-positive orders, or [`try_minkowski_distance`] for a
/// checked variant.
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::minkowski_distance;
///
/// let d = minkowski_distance(Point::new(1.0, 1.0), Point::new(-1.0, -1.0), 1.0);
/// assert_eq!(d, 4.0);
/// ```
pub fn minkowski_distance<T: FloatScalar>(a: Point<T>, b: Point<T>, r: T) -> T {
    minkowski_norm(b - a, r)
}

/// [`minkowski_distance`] that rejects orders that are not strictly positive.
pub fn try_minkowski_distance<T: FloatScalar>(
    a: Point<T>,
    b: Point<T>,
    r: T,
) -> Result<T, GeomError> {
    if !(r > T::zero()) {
        return Err(GeomError::NonPositiveOrder {
            order: ToPrimitive::to_f64(&r).unwrap_or(f64::NAN),
        });
    }
    Ok(minkowski_distance(a, b, r))
}

/// A metric whose balls on the integer lattice can be enumerated.
///
/// Implemented by [`Manhattan`] and [`Chebyshev`]. Generic code (the
/// neighbourhood planner, compliance checks) dispatches through this trait
/// instead of naming a metric.
pub trait LatticeMetric: Copy + Debug + Default + Send + Sync + 'static {
    /// Human-readable metric name.
    const NAME: &'static str;

    /// Manhattan length of the step between consecutive points of an
    /// unclipped ring: 2 for a diagonal step, 1 for an axis step.
    const RING_STEP: u32;

    /// Distance between two points under this metric.
    fn distance<T: Scalar>(&self, a: Point<T>, b: Point<T>) -> T;

    /// Points at exactly `distance` from `center`.
    fn ring<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Perimeter<T>;

    /// [`ring`](Self::ring) restricted to `bounds`, in the same order.
    fn ring_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Perimeter<T>;

    /// Points within `distance` of `center`.
    fn disk<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Disk<T>;

    /// [`disk`](Self::disk) restricted to `bounds`, in the same order.
    fn disk_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Disk<T>;

    /// Unclipped ring size for `distance`, saturating at `usize::MAX`.
    fn ring_len(&self, distance: usize) -> usize;
}

/// The L1 metric: diamond-shaped balls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Manhattan;

/// The L∞ metric: square balls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chebyshev;

impl LatticeMetric for Manhattan {
    const NAME: &'static str = "manhattan";
    const RING_STEP: u32 = 2;

    fn distance<T: Scalar>(&self, a: Point<T>, b: Point<T>) -> T {
        manhattan_distance(a, b)
    }

    fn ring<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Perimeter<T> {
        manhattan::manhattan_ring(center, distance)
    }

    fn ring_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Perimeter<T> {
        manhattan::manhattan_ring_clipped(center, distance, bounds)
    }

    fn disk<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Disk<T> {
        Disk::new(center, distance, Profile::Diamond, None)
    }

    fn disk_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Disk<T> {
        Disk::new(center, distance, Profile::Diamond, Some(bounds))
    }

    fn ring_len(&self, distance: usize) -> usize {
        distance.saturating_mul(4)
    }
}

impl LatticeMetric for Chebyshev {
    const NAME: &'static str = "chebyshev";
    const RING_STEP: u32 = 1;

    fn distance<T: Scalar>(&self, a: Point<T>, b: Point<T>) -> T {
        chebyshev_distance(a, b)
    }

    fn ring<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Perimeter<T> {
        chebyshev::chebyshev_ring(center, distance)
    }

    fn ring_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Perimeter<T> {
        chebyshev::chebyshev_ring_clipped(center, distance, bounds)
    }

    fn disk<T: LatticeScalar>(&self, center: Point<T>, distance: T) -> Disk<T> {
        Disk::new(center, distance, Profile::Square, None)
    }

    fn disk_clipped<T: LatticeScalar>(
        &self,
        center: Point<T>,
        distance: T,
        bounds: Bounds<T>,
    ) -> Disk<T> {
        Disk::new(center, distance, Profile::Square, Some(bounds))
    }

    fn ring_len(&self, distance: usize) -> usize {
        distance.saturating_mul(8).max(1)
    }
}
