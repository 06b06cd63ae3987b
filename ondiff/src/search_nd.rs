// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Increasing-distance frontier search.
//!
//! This is the greedy algorithm from
//! [[Myers, 1986] (doi:10.1007/BF01840446)](https://doi.org/10.1007/BF01840446),
//! recording every expanded point so that the shortest edit script can be
//! recovered afterwards.

use alloc::vec::Vec;

use crate::builder;
use crate::error::{check_lengths, DiffError};
use crate::macros::{optionally_unsafe, invariant};
use crate::point::{DiagonalPoint, Frontier, PointArena, SearchOutcome};
use crate::script::DiffResult;
use crate::sequence::{Equivalence, Sequence, Side};
use crate::tracing_macros::{debug, trace};



/// Runs the search on diagonals `k = x - y` where `x` indexes `old` and
/// `y` indexes `new`.
///
/// For `D = 0, 1, 2, ...`, every diagonal `k` in `-D, -D+2, ..., D` is
/// extended from its better neighbor of distance `D - 1`: from `k + 1`
/// by a vertical step (insertion) when `k == -D` or when `k - 1` reaches
/// strictly less far than `k + 1`, otherwise from `k - 1` by a horizontal
/// step (deletion).  The search stops at the first point reaching both
/// ends, so `D` is the edit distance.
///
/// Both lengths must not exceed [`MAX_LEN`](crate::MAX_LEN).
pub(crate) fn search<A, B, T, E>(old: &A, new: &B, eq: &E) -> SearchOutcome
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    E: Equivalence<T>,
{
    let n = old.len() as isize;
    let m = new.len() as isize;
    let max = n + m;
    debug!(old = n, new = m, "nd search started");
    let mut arena = PointArena::with_capacity(max as usize + 2);
    let root = arena.push(DiagonalPoint::new(1, 0, None));
    let mut frontier = Frontier::new(-(max + 1), max + 1, root);
    let mut d: isize = 0;
    loop {
        optionally_unsafe! {
            invariant!(d <= max);
        }
        trace!(distance = d, "nd frontier expanded");
        let mut k = -d;
        while k <= d {
            let down = frontier.get(k + 1);
            let (prev, mut x) = if k == -d
                || (k < d && arena.get(frontier.get(k - 1)).reach() < arena.get(down).reach())
            {
                (down, arena.get(down).reach())
            } else {
                let right = frontier.get(k - 1);
                (right, arena.get(right).reach() + 1)
            };
            let mut y = x - k;
            optionally_unsafe! {
                invariant!(x >= 0 && y >= 0);
            }
            while x < n && y < m && eq.equiv(old.item(x as usize), new.item(y as usize)) {
                x += 1;
                y += 1;
            }
            let id = arena.push(DiagonalPoint::new(k, x, Some(prev)));
            frontier.set(k, id);
            if x >= n && y >= m {
                debug!(distance = d, points = arena.len(), "nd search finished");
                return SearchOutcome { arena, terminal: id, distance: d as usize };
            }
            k += 2;
        }
        d += 1;
    }
}

/// Computes the diff of `old` and `new` by the ND search, without
/// checking lengths.
pub(crate) fn diff_internal<A, B, T, E>(old: &A, new: &B, eq: &E) -> DiffResult<T>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
    E: Equivalence<T>,
{
    let outcome = search(old, new, eq);
    let path = outcome.path();
    let (script, lcs) = builder::build(&path, old, new, Side::Old);
    DiffResult::new(outcome.distance, script, lcs)
}

/// Computes the edit distance, a shortest edit script and a longest
/// common subsequence of `old` and `new` by the increasing-distance
/// frontier search (Myers' O(ND) algorithm).
///
/// Runs in O((N+M)D) time and space where `D` is the edit distance.
///
/// # Errors
///
/// Fails with [`DiffErrorKind::ExceedsIndexRange`](crate::DiffErrorKind::ExceedsIndexRange)
/// if either operand is longer than [`MAX_LEN`](crate::MAX_LEN).
///
/// # Examples
///
/// ```
/// use ondiff::{NaturalEq, Operation, nd};
///
/// let result = nd::diff(&[0, 1, 2, 3, 4], &[5, 6, 7, 8, 9], NaturalEq).unwrap();
/// assert_eq!(result.distance(), 10);
/// assert!(result.lcs().is_empty());
/// assert_eq!(result.script().as_slice()[0], Operation::delete(0));
/// assert_eq!(result.script().as_slice()[5], Operation::insert(5));
/// ```
pub fn diff<A, B, T, E>(old: &A, new: &B, eq: E) -> Result<DiffResult<T>, DiffError>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
    E: Equivalence<T>,
{
    check_lengths(old.len(), new.len(), None)?;
    Ok(diff_internal(old, new, &eq))
}

/// Returns the edit graph path the ND search finds from `old` to `new`.
///
/// Each point is the furthest reach on its diagonal `k = x - y` (`x`
/// indexing `old`), in forward order; the sentinel root is not included.
///
/// # Errors
///
/// Same as [`diff()`].
///
/// # Examples
///
/// ```
/// use ondiff::{NaturalEq, nd};
///
/// let path = nd::path(&[1, 2, 3], &[1, 3], NaturalEq).unwrap();
/// let last = path.last().unwrap();
/// assert_eq!((last.k(), last.reach()), (1, 3));
/// ```
pub fn path<A, B, T, E>(old: &A, new: &B, eq: E) -> Result<Vec<DiagonalPoint>, DiffError>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    E: Equivalence<T>,
{
    check_lengths(old.len(), new.len(), None)?;
    Ok(search(old, new, &eq).path())
}
