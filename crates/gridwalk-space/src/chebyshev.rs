//! Chebyshev (L∞) ring and disk enumerators.

use crate::bounds::Bounds;
use crate::disk::{Disk, Profile};
use crate::perimeter::{Edge, Perimeter};
use gridwalk_core::{LatticeScalar, Point};
use smallvec::smallvec;

/// Lattice points at Chebyshev distance exactly `distance` from `center`:
/// the boundary of the `(2d+1) × (2d+1)` square around it.
///
/// Traversal order:
///
/// 1. bottom edge `y = cy-d`, left to right, both corners included
/// 2. right edge `x = cx+d`, bottom to top, corners excluded
/// 3. top edge `y = cy+d`, right to left, both corners included
/// 4. left edge `x = cx-d`, top to bottom, corners excluded
///
/// That is `8·d` points for `d >= 1`. Unlike [`manhattan_ring`], a zero
/// distance yields the center itself. A negative distance yields nothing.
///
/// [`manhattan_ring`]: crate::manhattan_ring
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::chebyshev_ring;
///
/// let ring: Vec<_> = chebyshev_ring(Point::new(1, 1), 2).collect();
/// assert_eq!(ring.len(), 16);
/// assert_eq!(ring[0], Point::new(-1, -1));
/// assert_eq!(ring[15], Point::new(-1, 0));
///
/// assert_eq!(chebyshev_ring(Point::new(4, 4), 0).collect::<Vec<_>>(), vec![Point::new(4, 4)]);
/// ```
pub fn chebyshev_ring<T: LatticeScalar>(center: Point<T>, distance: T) -> Perimeter<T> {
    let zero = T::zero();
    let one = T::one();
    if distance < zero {
        return Perimeter::empty();
    }
    if distance == zero {
        return Perimeter::from_edges(smallvec![Edge::new(
            center,
            Point::new(one, zero),
            zero,
            zero
        )]);
    }
    // Edges are anchored at their midpoints so no index exceeds `d` in magnitude.
    let (cx, cy, d) = (center.x, center.y, distance);
    Perimeter::from_edges(smallvec![
        Edge::new(Point::new(cx, cy - d), Point::new(one, zero), -d, d),
        Edge::new(Point::new(cx + d, cy), Point::new(zero, one), one - d, d - one),
        Edge::new(Point::new(cx, cy + d), Point::new(-one, zero), -d, d),
        Edge::new(Point::new(cx - d, cy), Point::new(zero, -one), one - d, d - one),
    ])
}

/// [`chebyshev_ring`] restricted to the points inside `bounds`.
///
/// Each edge is first gated on its fixed coordinate (bottom `y`, right `x`,
/// top `y`, left `x`) lying within the box; a gated-out edge emits nothing.
/// Otherwise its varying coordinate is clamped to the box. Survivors keep
/// the unclipped order.
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::{chebyshev_ring_clipped, Bounds};
///
/// let bounds = Bounds::new(Point::new(0, 0), Point::new(5, 5));
/// let ring: Vec<_> = chebyshev_ring_clipped(Point::new(1, 1), 2, bounds).collect();
/// assert_eq!(ring.len(), 7);
/// assert_eq!(ring[0], Point::new(3, 0));
/// assert_eq!(ring[6], Point::new(0, 3));
/// ```
pub fn chebyshev_ring_clipped<T: LatticeScalar>(
    center: Point<T>,
    distance: T,
    bounds: Bounds<T>,
) -> Perimeter<T> {
    chebyshev_ring(center, distance).clipped(&bounds)
}

/// Every lattice point in the square `[cx-d, cx+d] × [cy-d, cy+d]`, i.e. at
/// Chebyshev distance at most `distance`, for `distance >= 1`.
///
/// Emitted column by column (X ascending, then Y ascending) with no
/// Manhattan filtering. Like every disk enumerator, a distance below one
/// yields nothing: `chebyshev_disk(c, 0)` is empty, not `{c}`. Use
/// [`chebyshev_ring`] with distance zero for the center alone.
pub fn chebyshev_disk<T: LatticeScalar>(center: Point<T>, distance: T) -> Disk<T> {
    Disk::new(center, distance, Profile::Square, None)
}

/// [`chebyshev_disk`] with each axis range clamped to `bounds`.
pub fn chebyshev_disk_clipped<T: LatticeScalar>(
    center: Point<T>,
    distance: T,
    bounds: Bounds<T>,
) -> Disk<T> {
    Disk::new(center, distance, Profile::Square, Some(bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::metric::{chebyshev_distance, Chebyshev};
    use crate::{manhattan_ring, manhattan_ring_clipped};
    use indexmap::IndexSet;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    fn b(lx: i32, ly: i32, hx: i32, hy: i32) -> Bounds<i32> {
        Bounds::new(p(lx, ly), p(hx, hy))
    }

    // ── Ring ────────────────────────────────────────────────────

    #[test]
    fn ring_center_one_one_radius_two() {
        let ring: Vec<_> = chebyshev_ring(p(1, 1), 2).collect();
        assert_eq!(ring.len(), 16);
        assert_eq!(ring[0], p(-1, -1));
        assert_eq!(ring[1], p(0, -1));
        assert_eq!(ring[4], p(3, -1));
        assert_eq!(ring[15], p(-1, 0));
    }

    #[test]
    fn ring_radius_one_full_order() {
        let ring: Vec<_> = chebyshev_ring(p(0, 0), 1).collect();
        assert_eq!(
            ring,
            vec![
                p(-1, -1),
                p(0, -1),
                p(1, -1),
                p(1, 0),
                p(1, 1),
                p(0, 1),
                p(-1, 1),
                p(-1, 0),
            ]
        );
    }

    #[test]
    fn ring_zero_is_center_unlike_manhattan() {
        let c = p(7, -2);
        assert_eq!(chebyshev_ring(c, 0).collect::<Vec<_>>(), vec![c]);
        assert_eq!(manhattan_ring(c, 0).count(), 0);
    }

    #[test]
    fn ring_negative_is_empty() {
        assert_eq!(chebyshev_ring(p(0, 0), -1).count(), 0);
    }

    #[test]
    fn ring_size_hint_is_exact() {
        assert_eq!(chebyshev_ring(p(0, 0), 0).size_hint(), (1, Some(1)));
        assert_eq!(chebyshev_ring(p(0, 0), 3).size_hint(), (24, Some(24)));
    }

    #[test]
    fn ring_wider_than_half_the_type_range() {
        let c = Point::new(0i8, 0);
        for d in 64i8..=127 {
            let ring: Vec<_> = chebyshev_ring(c, d).collect();
            assert_eq!(ring.len(), 8 * d as usize, "d = {d}");
            assert_eq!(ring[0], Point::new(-d, -d));
            assert!(ring.iter().all(|&q| chebyshev_distance(c, q) == d));
            let unique: IndexSet<_> = ring.iter().collect();
            assert_eq!(unique.len(), ring.len());
        }
        let full = chebyshev_ring(c, i8::MAX);
        assert_eq!(full.size_hint(), (1016, Some(1016)));
    }

    #[test]
    fn clipped_ring_at_type_limit_distance() {
        let c = p(0, 0);
        assert_eq!(chebyshev_ring_clipped(c, i32::MAX / 2 + 1, b(0, 0, 2, 2)).count(), 0);
        let edge: Vec<_> =
            chebyshev_ring_clipped(c, i32::MAX, b(i32::MAX - 1, -1, i32::MAX, 1)).collect();
        assert_eq!(edge, vec![p(i32::MAX, -1), p(i32::MAX, 0), p(i32::MAX, 1)]);
    }

    // ── Clipped ring ────────────────────────────────────────────

    #[test]
    fn clipped_ring_gates_edges_on_fixed_coordinate() {
        let ring: Vec<_> = chebyshev_ring_clipped(p(1, 1), 2, b(0, 0, 5, 5)).collect();
        assert_eq!(
            ring,
            vec![p(3, 0), p(3, 1), p(3, 2), p(3, 3), p(2, 3), p(1, 3), p(0, 3)]
        );
    }

    #[test]
    fn clipped_ring_zero_distance() {
        assert_eq!(
            chebyshev_ring_clipped(p(2, 2), 0, b(0, 0, 5, 5)).collect::<Vec<_>>(),
            vec![p(2, 2)]
        );
        assert_eq!(chebyshev_ring_clipped(p(9, 2), 0, b(0, 0, 5, 5)).count(), 0);
        assert_eq!(manhattan_ring_clipped(p(2, 2), 0, b(0, 0, 5, 5)).count(), 0);
    }

    #[test]
    fn clipped_ring_box_strictly_inside_square_is_empty() {
        assert_eq!(chebyshev_ring_clipped(p(0, 0), 3, b(-2, -2, 2, 2)).count(), 0);
    }

    #[test]
    fn clipped_ring_center_outside_box() {
        // Only the right edge x = 5 crosses the box.
        let ring: Vec<_> = chebyshev_ring_clipped(p(0, 0), 5, b(5, -1, 9, 1)).collect();
        assert_eq!(ring, vec![p(5, -1), p(5, 0), p(5, 1)]);
    }

    #[test]
    fn clipped_ring_inverted_box_is_empty() {
        assert_eq!(chebyshev_ring_clipped(p(0, 0), 2, b(3, 3, -3, -3)).count(), 0);
    }

    #[test]
    fn clipped_ring_keeps_corners_once() {
        // Box reaching just the bottom-right corner.
        let ring: Vec<_> = chebyshev_ring_clipped(p(0, 0), 2, b(2, -2, 4, -2)).collect();
        assert_eq!(ring, vec![p(2, -2)]);
        // Box reaching just the top-right corner.
        let ring: Vec<_> = chebyshev_ring_clipped(p(0, 0), 2, b(2, 2, 2, 2)).collect();
        assert_eq!(ring, vec![p(2, 2)]);
    }

    // ── Disk ────────────────────────────────────────────────────

    #[test]
    fn disk_is_the_full_square_column_major() {
        let disk: Vec<_> = chebyshev_disk(p(1, 1), 2).collect();
        assert_eq!(disk.len(), 25);
        assert_eq!(disk[0], p(-1, -1));
        assert_eq!(disk[4], p(-1, 3));
        assert_eq!(disk[5], p(0, -1));
        assert_eq!(disk[24], p(3, 3));
    }

    #[test]
    fn disk_below_one_is_empty() {
        assert_eq!(chebyshev_disk(p(0, 0), 0).count(), 0);
        assert_eq!(chebyshev_disk(p(0, 0), -2).count(), 0);
        assert_eq!(chebyshev_disk_clipped(p(3, 3), 0, b(0, 0, 9, 9)).count(), 0);
        // The radius-zero ball itself comes from the ring.
        assert_eq!(chebyshev_ring(p(3, 3), 0).collect::<Vec<_>>(), vec![p(3, 3)]);
    }

    #[test]
    fn clipped_disk_uses_each_axis_own_limit() {
        // high.x = 5 but high.y = 1: the vertical range must stop at y = 1.
        let disk: Vec<_> = chebyshev_disk_clipped(p(1, 1), 2, b(0, 0, 5, 1)).collect();
        assert_eq!(disk.len(), 8);
        assert!(disk.iter().all(|q| q.y <= 1));
        assert_eq!(disk[0], p(0, 0));
        assert_eq!(disk[7], p(3, 1));
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_origin() {
        compliance::run_full_compliance(Chebyshev, p(0, 0), 6);
    }

    #[test]
    fn compliance_offset_center() {
        compliance::run_full_compliance(Chebyshev, p(31, -8), 4);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn ring_has_8d_distinct_points_at_distance_d(
            cx in -1000i32..1000, cy in -1000i32..1000, d in 0i32..40,
        ) {
            let c = p(cx, cy);
            let ring: Vec<_> = chebyshev_ring(c, d).collect();
            prop_assert_eq!(ring.len(), (8 * d as usize).max(1));
            let unique: IndexSet<_> = ring.iter().collect();
            prop_assert_eq!(unique.len(), ring.len());
            for q in &ring {
                prop_assert_eq!(chebyshev_distance(c, *q), d);
            }
        }

        #[test]
        fn clipped_ring_is_filtered_ring(
            cx in -20i32..20, cy in -20i32..20, d in 0i32..15,
            lx in -30i32..30, ly in -30i32..30, w in -3i32..25, h in -3i32..25,
        ) {
            let c = p(cx, cy);
            let bounds = b(lx, ly, lx + w, ly + h);
            let clipped: Vec<_> = chebyshev_ring_clipped(c, d, bounds).collect();
            let filtered: Vec<_> = chebyshev_ring(c, d).filter(|q| bounds.contains(*q)).collect();
            prop_assert_eq!(clipped, filtered);
        }

        #[test]
        fn rings_of_distinct_radii_are_disjoint(
            cx in -50i32..50, cy in -50i32..50, r1 in 0i32..12, r2 in 0i32..12,
        ) {
            prop_assume!(r1 != r2);
            let c = p(cx, cy);
            let a: IndexSet<_> = chebyshev_ring(c, r1).collect();
            prop_assert!(chebyshev_ring(c, r2).all(|q| !a.contains(&q)));
            let a: IndexSet<_> = manhattan_ring(c, r1).collect();
            prop_assert!(manhattan_ring(c, r2).all(|q| !a.contains(&q)));
        }
    }
}
