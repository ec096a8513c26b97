//! Benchmark inputs for the gridwalk enumerators.
//!
//! - [`deterministic_centers`]: reproducible pseudo-random lattice centers
//! - [`reference_box`]: the clip box used by clipped-enumeration benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_core::Point;
use gridwalk_space::Bounds;

/// `count` lattice centers spread over `[-span, span)²`, identical on every run.
pub fn deterministic_centers(count: usize, span: i32) -> Vec<Point<i32>> {
    let width = (2 * span.max(1)) as u64;
    (0..count as u64)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) >> 16) % width;
            let y = (i.wrapping_mul(1442695040888963407) >> 16) % width;
            Point::new(x as i32 - span, y as i32 - span)
        })
        .collect()
}

/// A 256×256 box anchored at the origin.
pub fn reference_box() -> Bounds<i32> {
    Bounds::new(Point::new(0, 0), Point::new(255, 255))
}
