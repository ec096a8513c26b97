//! Standard centers and clip boxes for enumeration tests.

use crate::ClipBox;
use gridwalk_core::Point;

/// Centers at the origin, in each quadrant, and far from it.
pub fn sample_centers() -> Vec<Point<i32>> {
    vec![
        Point::new(0, 0),
        Point::new(1, 1),
        Point::new(-7, 3),
        Point::new(12, -9),
        Point::new(-1000, 1000),
    ]
}

/// Clip boxes around `center` exercising every degenerate case: covering,
/// exact fit, strips, a single cell, inverted, disjoint, and boxes that
/// leave the center outside.
pub fn sample_boxes(center: Point<i32>, d: i32) -> Vec<ClipBox> {
    let (cx, cy) = (center.x, center.y);
    let b = |lx: i32, ly: i32, hx: i32, hy: i32| (Point::new(lx, ly), Point::new(hx, hy));
    vec![
        b(cx - d - 3, cy - d - 3, cx + d + 3, cy + d + 3),
        b(cx - d, cy - d, cx + d, cy + d),
        b(cx - d + 1, cy - d + 1, cx + d - 1, cy + d - 1),
        b(cx, cy - d, cx + d, cy),
        b(cx - d, cy, cx + d, cy),
        b(cx, cy - d, cx, cy + d),
        b(cx - d, cy + d, cx - d, cy + d),
        b(cx + 2, cy + 2, cx - 2, cy - 2),
        b(cx + d + 1, cy - d, cx + d + 4, cy + d),
        b(cx + 1, cy + 1, cx + 3 * d, cy + 3 * d),
        b(cx - 3 * d, cy - 1, cx - d + 1, cy + 1),
    ]
}
