//! The 2D [`Point`] value type and its vector algebra.

use crate::scalar::{FloatScalar, Scalar};
use num_traits::{Float, NumCast, Signed};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point (or free vector) in the plane.
///
/// Ordering is lexicographic on `(x, y)`, which matches the column-major
/// scan used by the disk enumerators (X outer, Y inner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

/// A point with integer coordinates.
pub type LatticePoint<T = i32> = Point<T>;

/// One of the two coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

impl<T> Point<T> {
    /// Create a point from its coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Point<T> {
    /// Coordinate along `axis`.
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Convert each coordinate to another numeric type.
    ///
    /// Returns `None` if either coordinate does not fit in `U`.
    pub fn cast<U: NumCast>(self) -> Option<Point<U>>
    where
        T: NumCast,
    {
        let x: U = NumCast::from(self.x)?;
        let y: U = NumCast::from(self.y)?;
        Some(Point { x, y })
    }
}

impl<T: Scalar> Point<T> {
    /// The origin `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(Signed::abs(&self.x), Signed::abs(&self.y))
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perp-dot (2D cross) product: positive when `other` is
    /// counter-clockwise from `self`.
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: FloatScalar> Point<T> {
    /// Euclidean length, computed with `hypot` to avoid intermediate overflow.
    pub fn magnitude(self) -> T {
        self.x.hypot(self.y)
    }

    /// Angle from the positive X axis in radians, in `(-π, π]`.
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }

    /// Vector with the given length and angle (radians).
    pub fn from_polar(magnitude: T, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn direction(self) -> Option<Self> {
        let len = self.magnitude();
        if len == T::zero() || Float::is_nan(len) {
            return None;
        }
        Some(Self::new(self.x / len, self.y / len))
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: AddAssign> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
