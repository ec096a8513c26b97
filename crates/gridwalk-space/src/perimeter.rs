//! Shared perimeter walker for the ring enumerators.
//!
//! A ring is emitted as up to four straight edges. Each edge walks
//! `origin + step · i` for `i` in an inclusive index window, with every step
//! component in `{-1, 0, 1}`. Clipping narrows each edge's window
//! independently, so an edge that leaves the box contributes nothing while
//! the surviving edges keep their relative order.

use crate::bounds::Bounds;
use gridwalk_core::{LatticeScalar, Point};
use num_traits::{Bounded, CheckedSub, ToPrimitive};
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// One straight run of lattice points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge<T> {
    origin: Point<T>,
    step: Point<T>,
    next: T,
    last: T,
}

impl<T: LatticeScalar> Edge<T> {
    /// Edge visiting `origin + step · i` for `i` in `first..=last`.
    pub(crate) fn new(origin: Point<T>, step: Point<T>, first: T, last: T) -> Self {
        Self {
            origin,
            step,
            next: first,
            last,
        }
    }

    /// Narrow the index window to the points inside `bounds`.
    fn clip(&mut self, bounds: &Bounds<T>) {
        let (lo_x, hi_x) = axis_window(self.origin.x, self.step.x, bounds.low.x, bounds.high.x);
        let (lo_y, hi_y) = axis_window(self.origin.y, self.step.y, bounds.low.y, bounds.high.y);
        self.next = self.next.max(lo_x).max(lo_y);
        self.last = self.last.min(hi_x).min(hi_y);
    }

    fn at(&self, i: T) -> Point<T> {
        self.origin + self.step * i
    }

    fn is_exhausted(&self) -> bool {
        self.next > self.last
    }

    /// Points left on this edge, or `None` if the count does not fit `usize`.
    fn remaining(&self) -> Option<usize> {
        let zero = T::zero();
        if self.is_exhausted() {
            return Some(0);
        }
        if self.next >= zero || self.last < zero {
            let span = self.last - self.next;
            return ToPrimitive::to_usize(&span)?.checked_add(1);
        }
        // Window straddles zero: count each side separately.
        let below = ToPrimitive::to_usize(&-(self.next + T::one()))?;
        let above = ToPrimitive::to_usize(&self.last)?;
        below.checked_add(above)?.checked_add(2)
    }
}

/// Index window `[lo, hi]` for which `origin + step · i` lies in `[low, high]`.
///
/// A zero step gates the whole edge on `origin` itself. The returned window
/// is empty (`lo > hi`) when no index qualifies.
fn axis_window<T: LatticeScalar>(origin: T, step: T, low: T, high: T) -> (T, T) {
    let zero = T::zero();
    if step > zero {
        (saturating_sub(low, origin), saturating_sub(high, origin))
    } else if step < zero {
        (saturating_sub(origin, high), saturating_sub(origin, low))
    } else if low <= origin && origin <= high {
        (<T as Bounded>::min_value(), <T as Bounded>::max_value())
    } else {
        (T::one(), zero)
    }
}

fn saturating_sub<T: LatticeScalar>(a: T, b: T) -> T {
    match CheckedSub::checked_sub(&a, &b) {
        Some(v) => v,
        None if b > T::zero() => <T as Bounded>::min_value(),
        None => <T as Bounded>::max_value(),
    }
}

/// Lazy walk over the edges of a ring, in a fixed traversal order.
///
/// Returned by [`manhattan_ring`](crate::manhattan_ring),
/// [`chebyshev_ring`](crate::chebyshev_ring) and their clipped variants.
/// Cloning a partially consumed walk resumes from the same position.
#[derive(Clone, Debug)]
pub struct Perimeter<T> {
    edges: SmallVec<[Edge<T>; 4]>,
    current: usize,
}

impl<T: LatticeScalar> Perimeter<T> {
    /// A walk that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            edges: SmallVec::new(),
            current: 0,
        }
    }

    pub(crate) fn from_edges(edges: SmallVec<[Edge<T>; 4]>) -> Self {
        Self { edges, current: 0 }
    }

    /// Restrict every edge to `bounds`, keeping the traversal order.
    pub(crate) fn clipped(mut self, bounds: &Bounds<T>) -> Self {
        for edge in self.edges.iter_mut() {
            edge.clip(bounds);
        }
        self
    }
}

impl<T: LatticeScalar> Iterator for Perimeter<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Point<T>> {
        while let Some(edge) = self.edges.get_mut(self.current) {
            if edge.is_exhausted() {
                self.current += 1;
                continue;
            }
            let i = edge.next;
            let point = edge.at(i);
            if i == edge.last {
                self.current += 1;
            } else {
                edge.next = i + T::one();
            }
            return Some(point);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut total = 0usize;
        for edge in self.edges.iter().skip(self.current) {
            match edge.remaining().and_then(|n| total.checked_add(n)) {
                Some(t) => total = t,
                None => return (usize::MAX, None),
            }
        }
        (total, Some(total))
    }
}

impl<T: LatticeScalar> FusedIterator for Perimeter<T> {}
