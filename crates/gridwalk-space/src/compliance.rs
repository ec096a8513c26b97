//! LatticeMetric compliance test helpers.
//!
//! These functions verify that a metric's ring and disk enumerators satisfy
//! the shared contract. Reused by the Manhattan and Chebyshev test modules.

use crate::bounds::Bounds;
use crate::metric::{chebyshev_distance, manhattan_distance, LatticeMetric};
use gridwalk_core::Point;
use indexmap::IndexSet;

/// Assert that the unclipped ring has the metric's expected size.
pub fn assert_ring_len<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    let n = metric.ring(center, d).count();
    let expected = metric.ring_len(d as usize);
    assert_eq!(
        n,
        expected,
        "{} ring({center:?}, {d}) has {n} points, expected {expected}",
        M::NAME
    );
}

/// Assert that every ring point is at exactly `d` from the center.
pub fn assert_ring_at_exact_distance<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    for q in metric.ring(center, d) {
        let got = metric.distance(center, q);
        assert_eq!(
            got,
            d,
            "{} ring({center:?}, {d}) emitted {q:?} at distance {got}",
            M::NAME
        );
    }
}

/// Assert that no ring point is emitted twice.
pub fn assert_ring_distinct<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    let ring: Vec<_> = metric.ring(center, d).collect();
    let unique: IndexSet<_> = ring.iter().collect();
    assert_eq!(
        unique.len(),
        ring.len(),
        "{} ring({center:?}, {d}) has duplicates",
        M::NAME
    );
}

/// Assert that two independent walks produce the same sequence.
pub fn assert_ring_deterministic<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    let a: Vec<_> = metric.ring(center, d).collect();
    let b: Vec<_> = metric.ring(center, d).collect();
    assert_eq!(a, b, "{} ring({center:?}, {d}) is non-deterministic", M::NAME);
}

/// Assert that consecutive ring points (wrapping around) are 8-adjacent and
/// one metric step apart: diagonal for Manhattan, axis-aligned for Chebyshev.
pub fn assert_ring_connected<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    let ring: Vec<_> = metric.ring(center, d).collect();
    if ring.len() < 2 {
        return;
    }
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        assert_eq!(
            chebyshev_distance(a, b),
            1,
            "{} ring({center:?}, {d}) jumps from {a:?} to {b:?}",
            M::NAME
        );
        assert_eq!(
            manhattan_distance(a, b) as u32,
            M::RING_STEP,
            "{} ring({center:?}, {d}) steps from {a:?} to {b:?} off the metric's direction",
            M::NAME
        );
    }
}

/// Assert that rings `0..=d` are pairwise disjoint and, with the center,
/// exactly cover the disk of radius `d`.
pub fn assert_shells_partition_disk<M: LatticeMetric>(metric: M, center: Point<i32>, d: i32) {
    let mut union: IndexSet<Point<i32>> = IndexSet::new();
    union.insert(center);
    for r in 0..=d {
        for q in metric.ring(center, r) {
            if r == 0 && q == center {
                continue;
            }
            assert!(
                union.insert(q),
                "{} ring({center:?}, {r}) repeats {q:?} from a smaller ring",
                M::NAME
            );
        }
    }
    if d < 1 {
        return;
    }
    let disk: IndexSet<_> = metric.disk(center, d).collect();
    assert_eq!(
        disk.len(),
        union.len(),
        "{} disk({center:?}, {d}) size differs from its shells",
        M::NAME
    );
    for q in &disk {
        assert!(
            union.contains(q),
            "{} disk({center:?}, {d}) contains {q:?} outside every shell",
            M::NAME
        );
    }
}

/// Assert that clipping equals filtering the unclipped walk, order included.
pub fn assert_clipped_matches_filtered<M: LatticeMetric>(
    metric: M,
    center: Point<i32>,
    d: i32,
    bounds: Bounds<i32>,
) {
    let clipped: Vec<_> = metric.ring_clipped(center, d, bounds).collect();
    let filtered: Vec<_> = metric
        .ring(center, d)
        .filter(|q| bounds.contains(*q))
        .collect();
    assert_eq!(
        clipped,
        filtered,
        "{} ring_clipped({center:?}, {d}, {bounds:?}) differs from filtered ring",
        M::NAME
    );

    let clipped: Vec<_> = metric.disk_clipped(center, d, bounds).collect();
    let filtered: Vec<_> = metric
        .disk(center, d)
        .filter(|q| bounds.contains(*q))
        .collect();
    assert_eq!(
        clipped,
        filtered,
        "{} disk_clipped({center:?}, {d}, {bounds:?}) differs from filtered disk",
        M::NAME
    );
}

/// A spread of boxes around `center`: covering, quadrant, strips, a single
/// cell, inverted, disjoint, and boxes that exclude the center.
pub fn probe_boxes(center: Point<i32>, d: i32) -> Vec<Bounds<i32>> {
    let (cx, cy) = (center.x, center.y);
    let b = |lx, ly, hx, hy| Bounds::new(Point::new(lx, ly), Point::new(hx, hy));
    vec![
        b(cx - d - 1, cy - d - 1, cx + d + 1, cy + d + 1),
        b(cx - d, cy - d, cx + d, cy + d),
        b(cx, cy, cx + d, cy + d),
        b(cx - d, cy - 1, cx + d, cy + 1),
        b(cx - 1, cy - d, cx + 1, cy + d),
        b(cx + d, cy, cx + d, cy),
        b(cx + 1, cy + 1, cx - 1, cy - 1),
        b(cx + d + 1, cy, cx + d + 5, cy + 5),
        b(cx + d / 2, cy - d, cx + 2 * d, cy + d / 2),
        b(cx - 2 * d, cy + 1, cx - 1, cy + 2 * d),
    ]
}

/// Run every compliance check for distances `0..=max_distance`.
pub fn run_full_compliance<M: LatticeMetric>(metric: M, center: Point<i32>, max_distance: i32) {
    for d in 0..=max_distance {
        assert_ring_len(metric, center, d);
        assert_ring_at_exact_distance(metric, center, d);
        assert_ring_distinct(metric, center, d);
        assert_ring_deterministic(metric, center, d);
        assert_ring_connected(metric, center, d);
        for bounds in probe_boxes(center, d) {
            assert_clipped_matches_filtered(metric, center, d, bounds);
        }
    }
    assert_shells_partition_disk(metric, center, max_distance);
}
