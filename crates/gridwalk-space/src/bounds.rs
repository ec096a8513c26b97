//! Inclusive axis-aligned bounding boxes used to clip enumerations.

use gridwalk_core::{partial_max, partial_min, Axis, GeomError, LatticeScalar, Point, Scalar};

/// An inclusive axis-aligned box `[low.x, high.x] × [low.y, high.y]`.
///
/// `low <= high` on both axes is expected but not enforced by
/// [`Bounds::new`]: an inverted box contains nothing, so every clipped
/// enumeration over it is empty. Use [`Bounds::try_new`] to reject inverted
/// boxes up front.
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::Bounds;
///
/// let b = Bounds::new(Point::new(0, 0), Point::new(5, 5));
/// assert!(b.contains(Point::new(5, 0)));
/// assert!(!b.contains(Point::new(6, 0)));
/// assert_eq!(b.width(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds<T> {
    /// Bottom-left corner (inclusive).
    pub low: Point<T>,
    /// Top-right corner (inclusive).
    pub high: Point<T>,
}

impl<T: Scalar> Bounds<T> {
    /// Create a box from its corners without validation.
    pub const fn new(low: Point<T>, high: Point<T>) -> Self {
        Self { low, high }
    }

    /// Create a box, rejecting corners that are inverted on either axis.
    pub fn try_new(low: Point<T>, high: Point<T>) -> Result<Self, GeomError> {
        for axis in [Axis::X, Axis::Y] {
            if low.get(axis) > high.get(axis) {
                return Err(GeomError::InvertedBounds {
                    axis,
                    low: low.get(axis).to_string(),
                    high: high.get(axis).to_string(),
                });
            }
        }
        Ok(Self { low, high })
    }

    /// Whether `p` lies inside the box (edges included).
    pub fn contains(&self, p: Point<T>) -> bool {
        self.low.x <= p.x && p.x <= self.high.x && self.low.y <= p.y && p.y <= self.high.y
    }

    /// `true` if the box contains no point (inverted on some axis).
    pub fn is_empty(&self) -> bool {
        !(self.low.x <= self.high.x && self.low.y <= self.high.y)
    }

    /// Overlap of two boxes. The result is empty if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            low: Point::new(
                partial_max(self.low.x, other.low.x),
                partial_max(self.low.y, other.low.y),
            ),
            high: Point::new(
                partial_min(self.high.x, other.high.x),
                partial_min(self.high.y, other.high.y),
            ),
        }
    }

    /// `[low, high]` limits on one axis.
    pub fn axis_range(&self, axis: Axis) -> (T, T) {
        (self.low.get(axis), self.high.get(axis))
    }
}

impl<T: LatticeScalar> Bounds<T> {
    /// The square `[c.x - d, c.x + d] × [c.y - d, c.y + d]`, which bounds the
    /// Manhattan and Chebyshev balls of radius `d`.
    pub fn around(center: Point<T>, distance: T) -> Self {
        Self {
            low: Point::new(center.x - distance, center.y - distance),
            high: Point::new(center.x + distance, center.y + distance),
        }
    }

    /// Tight box around a set of points, or `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Point<T>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first, first);
        for p in iter {
            bounds.low.x = bounds.low.x.min(p.x);
            bounds.low.y = bounds.low.y.min(p.y);
            bounds.high.x = bounds.high.x.max(p.x);
            bounds.high.y = bounds.high.y.max(p.y);
        }
        Some(bounds)
    }

    /// Number of columns covered, or zero if empty on X.
    pub fn width(&self) -> T {
        span(self.low.x, self.high.x)
    }

    /// Number of rows covered, or zero if empty on Y.
    pub fn height(&self) -> T {
        span(self.low.y, self.high.y)
    }
}

fn span<T: LatticeScalar>(low: T, high: T) -> T {
    if low > high {
        T::zero()
    } else {
        high - low + T::one()
    }
}
