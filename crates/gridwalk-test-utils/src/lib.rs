//! Test utilities for gridwalk development.
//!
//! Provides brute-force reference enumerators that scan the whole bounding
//! square and filter by distance, plus [`fixtures`] with standard centers
//! and clip boxes. They are deliberately naive: correctness by inspection,
//! not speed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridwalk_core::Point;

/// Distance function on `i32` lattice points.
pub type MetricFn = fn(Point<i32>, Point<i32>) -> i32;

/// Inclusive clip box as `(low, high)` corners.
pub type ClipBox = (Point<i32>, Point<i32>);

pub fn manhattan(a: Point<i32>, b: Point<i32>) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

pub fn chebyshev(a: Point<i32>, b: Point<i32>) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

fn inside(p: Point<i32>, clip: Option<ClipBox>) -> bool {
    match clip {
        None => true,
        Some((lo, hi)) => lo.x <= p.x && p.x <= hi.x && lo.y <= p.y && p.y <= hi.y,
    }
}

/// Every point of the square `[c - d, c + d]²` accepted by `keep`, in
/// column-major order (X outer, Y inner).
fn scan(center: Point<i32>, d: i32, keep: impl Fn(Point<i32>) -> bool) -> Vec<Point<i32>> {
    let mut out = Vec::new();
    if d < 0 {
        return out;
    }
    for x in center.x - d..=center.x + d {
        for y in center.y - d..=center.y + d {
            let p = Point::new(x, y);
            if keep(p) {
                out.push(p);
            }
        }
    }
    out
}

/// Points at exactly `d` from `center` under `metric`, sorted.
pub fn reference_ring(
    center: Point<i32>,
    d: i32,
    metric: MetricFn,
    clip: Option<ClipBox>,
) -> Vec<Point<i32>> {
    scan(center, d, |p| metric(center, p) == d && inside(p, clip))
}

/// Points within `d` of `center` under `metric`, sorted.
pub fn reference_disk(
    center: Point<i32>,
    d: i32,
    metric: MetricFn,
    clip: Option<ClipBox>,
) -> Vec<Point<i32>> {
    scan(center, d, |p| metric(center, p) <= d && inside(p, clip))
}

/// Sort a sequence for set comparison against a reference.
pub fn sorted<I: IntoIterator<Item = Point<i32>>>(points: I) -> Vec<Point<i32>> {
    let mut v: Vec<_> = points.into_iter().collect();
    v.sort();
    v
}
