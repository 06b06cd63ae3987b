// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Frontier points, their arena and path reconstruction.

use alloc::vec;
use alloc::vec::Vec;

use crate::macros::{optionally_unsafe, invariant};



/// The index of a [`DiagonalPoint`] inside a [`PointArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointId(usize);


/// The furthest point a search reached on one diagonal of the edit graph.
///
/// The meaning of [`k()`](Self::k()) and [`reach()`](Self::reach())
/// depends on the engine:
///
/// | Engine         | Diagonal `k` | Reach            |
/// | -------------- | ------------ | ---------------- |
/// | [`nd`](crate::nd) | `x - y`   | `x` (old index)  |
/// | [`np`](crate::np) | `y - x`   | `y` (index of the longer operand) |
///
/// Points are immutable.  Each one (except roots) links to the point of an
/// earlier search generation it was expanded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalPoint {
    /// The diagonal index.
    k: isize,
    /// The furthest coordinate attained on the diagonal.
    reach: isize,
    /// The point this one was expanded from (`None` on a root).
    prev: Option<PointId>,
}

impl DiagonalPoint {
    /// Creates a point.
    #[inline(always)]
    pub(crate) const fn new(k: isize, reach: isize, prev: Option<PointId>) -> Self {
        DiagonalPoint { k, reach, prev }
    }

    /// The diagonal index.
    #[inline(always)]
    pub fn k(&self) -> isize { self.k }

    /// The furthest coordinate attained on the diagonal.
    #[inline(always)]
    pub fn reach(&self) -> isize { self.reach }

    /// Returns whether this is a root (sentinel) point.
    #[inline(always)]
    pub fn is_root(&self) -> bool { self.prev.is_none() }

    /// The point this one was expanded from.
    #[inline(always)]
    pub(crate) fn prev(&self) -> Option<PointId> { self.prev }
}


/// Flat storage of all points created by one search.
///
/// Predecessor links are indices into this arena, so a path is walked
/// by index and dropping the arena is a single deallocation.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointArena {
    /// Points in creation order.
    points: Vec<DiagonalPoint>,
}

impl PointArena {
    /// Creates an empty arena.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        PointArena { points: Vec::with_capacity(capacity) }
    }

    /// Stores a point and returns its index.
    #[inline(always)]
    pub(crate) fn push(&mut self, point: DiagonalPoint) -> PointId {
        optionally_unsafe! {
            invariant!(point.prev.map_or(true, |prev| prev.0 < self.points.len()));
        }
        self.points.push(point);
        PointId(self.points.len() - 1)
    }

    /// Returns the point at `id`.
    #[inline(always)]
    pub(crate) fn get(&self, id: PointId) -> &DiagonalPoint {
        optionally_unsafe! {
            invariant!(id.0 < self.points.len());
        }
        &self.points[id.0] // grcov-excl-br-line:ARRAY
    }

    /// Returns the number of stored points.
    #[cfg(any(test, feature = "tracing"))]
    #[inline]
    pub(crate) fn len(&self) -> usize { self.points.len() }

    /// Follows predecessor links from `terminal` back to its root and
    /// returns the points in forward (root to terminal) order.
    ///
    /// The root itself is not included.
    pub(crate) fn chain(&self, terminal: PointId) -> Vec<DiagonalPoint> {
        let mut path = Vec::new();
        let mut point = self.get(terminal);
        while let Some(prev) = point.prev() {
            path.push(*point);
            point = self.get(prev);
        }
        path.reverse();
        path
    }
}


/// The current furthest point on each diagonal of a fixed range.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    /// Added to a diagonal index to get its slot.
    offset: isize,
    /// One point per diagonal, lowest diagonal first.
    slots: Vec<PointId>,
}

impl Frontier {
    /// Creates a frontier over diagonals `lower..=upper`,
    /// every diagonal starting at `root`.
    pub(crate) fn new(lower: isize, upper: isize, root: PointId) -> Self {
        debug_assert!(lower <= upper);
        Frontier {
            offset: -lower,
            slots: vec![root; (upper - lower) as usize + 1],
        }
    }

    /// Returns the slot of diagonal `k`.
    #[inline(always)]
    fn slot(&self, k: isize) -> usize {
        let slot = k + self.offset;
        optionally_unsafe! {
            invariant!(slot >= 0 && (slot as usize) < self.slots.len());
        }
        slot as usize
    }

    /// Returns the current point on diagonal `k`.
    #[inline(always)]
    pub(crate) fn get(&self, k: isize) -> PointId {
        self.slots[self.slot(k)] // grcov-excl-br-line:ARRAY
    }

    /// Replaces the current point on diagonal `k`.
    #[inline(always)]
    pub(crate) fn set(&mut self, k: isize, id: PointId) {
        let slot = self.slot(k);
        self.slots[slot] = id; // grcov-excl-br-line:ARRAY
    }
}


/// The terminal state of a frontier search.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
    /// Every point the search created.
    pub(crate) arena: PointArena,
    /// The point that reached the far corner of the edit graph.
    pub(crate) terminal: PointId,
    /// The edit distance the terminal point was found at.
    pub(crate) distance: usize,
}

impl SearchOutcome {
    /// Reconstructs the forward path to the terminal point.
    pub(crate) fn path(&self) -> Vec<DiagonalPoint> {
        self.arena.chain(self.terminal)
    }
}
