//! Column-scan walker for the filled-ball ("up to distance") enumerators.

use crate::bounds::Bounds;
use gridwalk_core::{LatticeScalar, Point};
use num_traits::{CheckedSub, Signed, ToPrimitive};
use std::iter::FusedIterator;

/// Shape of the column extents around the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Profile {
    /// Column at offset `dx` spans `±(radius - |dx|)`: the Manhattan ball.
    Diamond,
    /// Every column spans `±radius`: the Chebyshev ball.
    Square,
}

/// Lazy scan over a filled Manhattan or Chebyshev ball.
///
/// Points are emitted column by column: X ascending in the outer loop, Y
/// ascending within each column. A radius below one yields nothing. When
/// clipped, both the X range and each column's Y range are clamped to the
/// box, so empty columns are skipped without emitting anything.
///
/// Returned by [`manhattan_disk`](crate::manhattan_disk),
/// [`chebyshev_disk`](crate::chebyshev_disk) and their clipped variants.
#[derive(Clone, Debug)]
pub struct Disk<T> {
    center: Point<T>,
    radius: T,
    profile: Profile,
    clip: Option<Bounds<T>>,
    x: T,
    x_last: T,
    y: T,
    y_last: T,
    done: bool,
}

impl<T: LatticeScalar> Disk<T> {
    pub(crate) fn new(
        center: Point<T>,
        radius: T,
        profile: Profile,
        clip: Option<Bounds<T>>,
    ) -> Self {
        let mut disk = Self {
            center,
            radius,
            profile,
            clip,
            x: center.x,
            x_last: center.x,
            y: center.y,
            y_last: center.y,
            done: true,
        };
        if radius < T::one() {
            return disk;
        }
        let mut x_first = center.x - radius;
        let mut x_last = center.x + radius;
        if let Some(b) = &clip {
            x_first = x_first.max(b.low.x);
            x_last = x_last.min(b.high.x);
            if center.y - radius > b.high.y || center.y + radius < b.low.y {
                return disk;
            }
        }
        if x_first > x_last {
            return disk;
        }
        disk.x = x_first;
        disk.x_last = x_last;
        disk.done = false;
        disk.seek_column();
        disk
    }

    /// Inclusive Y extent of column `x`, after clipping.
    fn column(&self, x: T) -> (T, T) {
        let half = match self.profile {
            Profile::Diamond => self.radius - Signed::abs(&(x - self.center.x)),
            Profile::Square => self.radius,
        };
        let mut first = self.center.y - half;
        let mut last = self.center.y + half;
        if let Some(b) = &self.clip {
            first = first.max(b.low.y);
            last = last.min(b.high.y);
        }
        (first, last)
    }

    /// Advance `x` to the first column (from the current one) with points.
    fn seek_column(&mut self) {
        loop {
            let (first, last) = self.column(self.x);
            if first <= last {
                self.y = first;
                self.y_last = last;
                return;
            }
            if self.x == self.x_last {
                self.done = true;
                return;
            }
            self.x = self.x + T::one();
        }
    }
}

impl<T: LatticeScalar> Iterator for Disk<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Point<T>> {
        if self.done {
            return None;
        }
        let point = Point::new(self.x, self.y);
        if self.y == self.y_last {
            if self.x == self.x_last {
                self.done = true;
            } else {
                self.x = self.x + T::one();
                self.seek_column();
            }
        } else {
            self.y = self.y + T::one();
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Only the current column is known without rescanning the rest.
        let in_column = CheckedSub::checked_sub(&self.y_last, &self.y)
            .and_then(|span| ToPrimitive::to_usize(&span))
            .and_then(|n| n.checked_add(1))
            .unwrap_or(usize::MAX);
        let upper = if self.x == self.x_last {
            Some(in_column)
        } else {
            None
        };
        (in_column, upper)
    }
}

impl<T: LatticeScalar> FusedIterator for Disk<T> {}
