//! Manhattan (L1) ring and disk enumerators.

use crate::bounds::Bounds;
use crate::disk::{Disk, Profile};
use crate::perimeter::{Edge, Perimeter};
use gridwalk_core::{LatticeScalar, Point};
use smallvec::smallvec;

/// Lattice points at Manhattan distance exactly `distance` from `center`.
///
/// Walks the diamond with vertices `(cx, cy-d)`, `(cx+d, cy)`, `(cx, cy+d)`,
/// `(cx-d, cy)` counter-clockwise, starting at the bottom vertex:
///
/// 1. bottom-right edge, `(cx, cy-d)` to `(cx+d, cy)` inclusive (`d + 1` points)
/// 2. top-right edge, both vertices excluded (`d - 1` points)
/// 3. top-left edge, `(cx, cy+d)` to `(cx-d, cy)` inclusive (`d + 1` points)
/// 4. bottom-left edge, both vertices excluded (`d - 1` points)
///
/// That is `4·d` distinct points, each consecutive pair diagonally adjacent.
/// A distance below one yields nothing: the center is not a ring.
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::manhattan_ring;
///
/// let ring: Vec<_> = manhattan_ring(Point::new(0, 0), 1).collect();
/// assert_eq!(
///     ring,
///     vec![Point::new(0, -1), Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0)]
/// );
/// assert_eq!(manhattan_ring(Point::new(0, 0), 0).count(), 0);
/// ```
pub fn manhattan_ring<T: LatticeScalar>(center: Point<T>, distance: T) -> Perimeter<T> {
    let zero = T::zero();
    let one = T::one();
    if distance < one {
        return Perimeter::empty();
    }
    let (cx, cy, d) = (center.x, center.y, distance);
    Perimeter::from_edges(smallvec![
        Edge::new(Point::new(cx, cy - d), Point::new(one, one), zero, d),
        Edge::new(Point::new(cx + d, cy), Point::new(-one, one), one, d - one),
        Edge::new(Point::new(cx, cy + d), Point::new(-one, -one), zero, d),
        Edge::new(Point::new(cx - d, cy), Point::new(one, -one), one, d - one),
    ])
}

/// [`manhattan_ring`] restricted to the points inside `bounds`.
///
/// Each edge is clipped on its own; the survivors come out in the unclipped
/// order. An inverted or disjoint box yields nothing.
pub fn manhattan_ring_clipped<T: LatticeScalar>(
    center: Point<T>,
    distance: T,
    bounds: Bounds<T>,
) -> Perimeter<T> {
    manhattan_ring(center, distance).clipped(&bounds)
}

/// Lattice points at Manhattan distance at most `distance` from `center`,
/// center included.
///
/// Emitted column by column (X ascending, then Y ascending). A distance
/// below one yields nothing. For the filled bounding square instead, see
/// [`chebyshev_disk`](crate::chebyshev_disk).
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::manhattan_disk;
///
/// assert_eq!(manhattan_disk(Point::new(0, 0), 2).count(), 13);
/// ```
pub fn manhattan_disk<T: LatticeScalar>(center: Point<T>, distance: T) -> Disk<T> {
    Disk::new(center, distance, Profile::Diamond, None)
}

/// [`manhattan_disk`] restricted to the points inside `bounds`.
///
/// Both the X range and every column's Y range are clamped to the box
/// (`low.y..=high.y` on the vertical axis).
pub fn manhattan_disk_clipped<T: LatticeScalar>(
    center: Point<T>,
    distance: T,
    bounds: Bounds<T>,
) -> Disk<T> {
    Disk::new(center, distance, Profile::Diamond, Some(bounds))
}
