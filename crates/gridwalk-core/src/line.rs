//! Continuous lines and segments.
//!
//! These are closed-form helpers over [`FloatScalar`] coordinates. A
//! [`Line`] is stored in general form `a·x + b·y + c = 0`, which represents
//! vertical lines without special cases.

use crate::error::GeomError;
use crate::point::Point;
use crate::scalar::FloatScalar;
use num_traits::Float;

/// An infinite line `a·x + b·y + c = 0` with `(a, b) != (0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T> {
    a: T,
    b: T,
    c: T,
}

impl<T: FloatScalar> Line<T> {
    /// Build a line from its general-form coefficients.
    ///
    /// Returns `Err(GeomError::DegenerateLine)` when `a` and `b` are both zero.
    pub fn new(a: T, b: T, c: T) -> Result<Self, GeomError> {
        if a == T::zero() && b == T::zero() {
            return Err(GeomError::DegenerateLine);
        }
        Ok(Self { a, b, c })
    }

    /// The line through two distinct points, or `None` if they coincide.
    pub fn through(p: Point<T>, q: Point<T>) -> Option<Self> {
        let a = q.y - p.y;
        let b = p.x - q.x;
        let c = -(a * p.x + b * p.y);
        Self::new(a, b, c).ok()
    }

    /// The line `y = slope·x + intercept`.
    pub fn from_slope_intercept(slope: T, intercept: T) -> Self {
        Self {
            a: slope,
            b: -T::one(),
            c: intercept,
        }
    }

    /// General-form coefficients `(a, b, c)`.
    pub fn coefficients(&self) -> (T, T, T) {
        (self.a, self.b, self.c)
    }

    /// Slope `dy/dx`, or `None` for a vertical line.
    pub fn slope(&self) -> Option<T> {
        if self.b == T::zero() {
            return None;
        }
        Some(-self.a / self.b)
    }

    /// Y coordinate where the line crosses `x = 0`, or `None` if vertical.
    pub fn y_intercept(&self) -> Option<T> {
        if self.b == T::zero() {
            return None;
        }
        Some(-self.c / self.b)
    }

    /// X coordinate where the line crosses `y = 0`, or `None` if horizontal.
    pub fn x_intercept(&self) -> Option<T> {
        if self.a == T::zero() {
            return None;
        }
        Some(-self.c / self.a)
    }

    /// Normal vector `(a, b)` (not normalized).
    pub fn normal(&self) -> Point<T> {
        Point::new(self.a, self.b)
    }

    /// Direction vector along the line, the clockwise perpendicular of
    /// [`normal`](Self::normal).
    pub fn direction(&self) -> Point<T> {
        -self.normal().normal()
    }

    /// The line perpendicular to `self` passing through `p`.
    pub fn perpendicular_through(&self, p: Point<T>) -> Self {
        let a = -self.b;
        let b = self.a;
        Self {
            a,
            b,
            c: -(a * p.x + b * p.y),
        }
    }

    /// Signed residual `a·x + b·y + c`; zero on the line.
    pub fn evaluate(&self, p: Point<T>) -> T {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unsigned perpendicular distance from `p` to the line.
    pub fn distance_to(&self, p: Point<T>) -> T {
        Float::abs(self.evaluate(p)) / self.normal().magnitude()
    }

    /// Whether `p` lies within `eps` of the line.
    pub fn contains(&self, p: Point<T>, eps: T) -> bool {
        self.distance_to(p) <= eps
    }

    /// Intersection point, or `None` for parallel (or identical) lines.
    pub fn intersection(&self, other: &Self) -> Option<Point<T>> {
        let det = self.a * other.b - other.a * self.b;
        if det == T::zero() {
            return None;
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Some(Point::new(x, y))
    }
}

/// A directed line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    /// First endpoint.
    pub start: Point<T>,
    /// Second endpoint.
    pub end: Point<T>,
}

impl<T: FloatScalar> Segment<T> {
    /// Create a segment between two points.
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    pub fn length(&self) -> T {
        (self.end - self.start).magnitude()
    }

    /// Point at parameter `t`: `0` is `start`, `1` is `end`. Values outside
    /// `[0, 1]` extrapolate along the supporting line.
    pub fn point_at(&self, t: T) -> Point<T> {
        self.start.lerp(self.end, t)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point<T> {
        let half = T::one() / (T::one() + T::one());
        self.point_at(half)
    }

    /// Unit direction from `start` to `end`, or `None` for a zero-length segment.
    pub fn direction(&self) -> Option<Point<T>> {
        (self.end - self.start).direction()
    }

    /// Supporting line, or `None` for a zero-length segment.
    pub fn line(&self) -> Option<Line<T>> {
        Line::through(self.start, self.end)
    }
}
