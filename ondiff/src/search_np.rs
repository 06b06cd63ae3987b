// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Increasing-one-sided-edits frontier search.
//!
//! This is the algorithm from
//! [[Wu et al., 1990] (doi:10.1016/0020-0190(90)90035-V)](https://doi.org/10.1016/0020-0190(90)90035-V).
//! It always runs with the shorter operand on the `x` axis and counts
//! rounds `p` of deletions from that shorter operand; the edit distance is
//! `delta + 2p` where `delta` is the length difference.

use alloc::vec::Vec;

use crate::builder;
use crate::error::{check_lengths, DiffError};
use crate::macros::{optionally_unsafe, invariant};
use crate::point::{DiagonalPoint, Frontier, PointArena, PointId, SearchOutcome};
use crate::script::DiffResult;
use crate::sequence::{Equivalence, Sequence, Side};
use crate::tracing_macros::{debug, trace};



/// How the caller's operands were laid onto the search axes.
///
/// The `x` axis always walks the shorter operand (`a`) and
/// the `y` axis the longer one (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    /// `a` is the old sequence and `b` is the new one.
    Forward,
    /// `a` is the new sequence and `b` is the old one.
    Swapped,
}

impl Orientation {
    /// Lays out operands of the given lengths (old is preferred as `a`).
    #[inline]
    pub(crate) fn of_lengths(len_old: usize, len_new: usize) -> Self {
        if len_old <= len_new { Orientation::Forward } else { Orientation::Swapped }
    }

    /// The caller's operand walked along the `y` axis (`b`).
    #[inline]
    pub(crate) fn longer_side(self) -> Side {
        match self {
            Orientation::Forward => Side::New,
            Orientation::Swapped => Side::Old,
        }
    }

    /// Decides between two neighbors converging on the same point.
    ///
    /// The step into the point consumes `b` when taken from `k - 1`
    /// and `a` when taken from `k + 1`.  Making the last step consume the
    /// new sequence puts the deletion before the insertion.
    #[inline]
    fn prefers_lower_on_tie(self) -> bool {
        self.longer_side() == Side::New
    }

    /// Applies `eq` to an element of `a` and one of `b`,
    /// passing them in the caller's (old, new) order.
    #[inline(always)]
    fn equiv<T, E: Equivalence<T>>(self, eq: &E, a: &T, b: &T) -> bool {
        match self {
            Orientation::Forward => eq.equiv(a, b),
            Orientation::Swapped => eq.equiv(b, a),
        }
    }
}


/// Creates the point of diagonal `k` from its neighbors `lower` (`k - 1`)
/// and `upper` (`k + 1`): takes the further of the two ("max") and then
/// follows matching elements ("snake").
///
/// Returns the new point; the arena is only read.
#[allow(clippy::too_many_arguments)]
fn max_and_snake<SA, SB, T, E>(
    arena: &PointArena,
    k: isize,
    lower: PointId,
    upper: PointId,
    a: &SA,
    b: &SB,
    eq: &E,
    orientation: Orientation,
) -> DiagonalPoint
where
    SA: Sequence<Item = T> + ?Sized,
    SB: Sequence<Item = T> + ?Sized,
    E: Equivalence<T>,
{
    let m = a.len() as isize;
    let n = b.len() as isize;
    let from_lower = arena.get(lower).reach() + 1;
    let from_upper = arena.get(upper).reach();
    let (mut y, prev) = if from_lower == from_upper {
        if orientation.prefers_lower_on_tie() { (from_lower, lower) } else { (from_upper, upper) }
    } else if from_lower > from_upper {
        (from_lower, lower)
    } else {
        (from_upper, upper)
    };
    let mut x = y - k;
    optionally_unsafe! {
        invariant!(x >= 0 && y >= 0);
    }
    while x < m && y < n && orientation.equiv(eq, a.item(x as usize), b.item(y as usize)) {
        x += 1;
        y += 1;
    }
    DiagonalPoint::new(k, y, Some(prev))
}

/// Runs the search on diagonals `k = y - x` where `x` indexes `a` and
/// `y` indexes `b` (`a.len() <= b.len()`).
///
/// Each round `p` updates diagonals `-p..delta` upwards, then
/// `delta+p..delta` downwards, then `delta` itself.  The search stops
/// when diagonal `delta` reaches the end of `b`.
pub(crate) fn search<SA, SB, T, E>(a: &SA, b: &SB, eq: &E, orientation: Orientation) -> SearchOutcome
where
    SA: Sequence<Item = T> + ?Sized,
    SB: Sequence<Item = T> + ?Sized,
    E: Equivalence<T>,
{
    let m = a.len() as isize;
    let n = b.len() as isize;
    debug_assert!(m <= n);
    let delta = n - m;
    debug!(short = m, long = n, ?orientation, "np search started");
    let mut arena = PointArena::with_capacity((m + n) as usize + 3);
    let root = arena.push(DiagonalPoint::new(0, -1, None));
    let mut frontier = Frontier::new(-(m + 1), n + 1, root);
    let expand = |arena: &mut PointArena, frontier: &mut Frontier, k: isize| {
        let point = max_and_snake(
            arena, k, frontier.get(k - 1), frontier.get(k + 1),
            a, b, eq, orientation,
        );
        let id = arena.push(point);
        frontier.set(k, id);
        id
    };
    let mut p: isize = 0;
    loop {
        optionally_unsafe! {
            invariant!(p <= m);
        }
        trace!(round = p, "np frontier expanded");
        for k in -p..delta {
            expand(&mut arena, &mut frontier, k);
        }
        for k in ((delta + 1)..=(delta + p)).rev() {
            expand(&mut arena, &mut frontier, k);
        }
        let terminal = expand(&mut arena, &mut frontier, delta);
        if arena.get(terminal).reach() >= n {
            let distance = (delta + 2 * p) as usize;
            debug!(distance, points = arena.len(), "np search finished");
            return SearchOutcome { arena, terminal, distance };
        }
        p += 1;
    }
}

/// Computes the diff with operands already laid out by `orientation`.
fn diff_oriented<SA, SB, T, E>(a: &SA, b: &SB, eq: &E, orientation: Orientation) -> DiffResult<T>
where
    SA: Sequence<Item = T> + ?Sized,
    SB: Sequence<Item = T> + ?Sized,
    T: Clone,
    E: Equivalence<T>,
{
    let outcome = search(a, b, eq, orientation);
    let path = outcome.path();
    let (script, lcs) = builder::build(&path, b, a, orientation.longer_side());
    DiffResult::new(outcome.distance, script, lcs)
}

/// Computes the diff of `old` and `new` by the NP search, without
/// checking lengths.
pub(crate) fn diff_internal<A, B, T, E>(old: &A, new: &B, eq: &E) -> DiffResult<T>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
    E: Equivalence<T>,
{
    match Orientation::of_lengths(old.len(), new.len()) {
        Orientation::Forward => diff_oriented(old, new, eq, Orientation::Forward),
        Orientation::Swapped => diff_oriented(new, old, eq, Orientation::Swapped),
    }
}

/// Computes the edit distance, a shortest edit script and a longest
/// common subsequence of `old` and `new` by the increasing-one-sided-edits
/// frontier search (Wu's O(NP) algorithm).
///
/// Runs in O((N+M)P) time where `P` is the number of deletions from the
/// shorter operand.  Every point created by the search is kept until the
/// path is built, so memory is also O((N+M)P) rather than O(N+M).
/// This is usually faster than [`nd::diff()`](crate::nd::diff())
/// when the lengths differ a lot.  The result is of the same form;
/// on ties, the chosen common subsequence and the order of edits may differ
/// from the ND search.
///
/// # Errors
///
/// Fails with [`DiffErrorKind::ExceedsIndexRange`](crate::DiffErrorKind::ExceedsIndexRange)
/// if either operand is longer than [`MAX_LEN`](crate::MAX_LEN).
///
/// # Examples
///
/// ```
/// use ondiff::{NaturalEq, OperationKind, np};
///
/// let result = np::diff(&[0, 1, 2, 3, 4, 5, 6], &[-1, 0, 1, 2, 3, 4, 5, 6], NaturalEq).unwrap();
/// assert_eq!(result.distance(), 1);
/// assert_eq!(result.lcs(), &[0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(result.script().as_slice()[0].kind(), OperationKind::Insert);
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

/// Returns the edit graph path the NP search finds between `old` and `new`.
///
/// The path is in search coordinates: the shorter operand (`old` on a tie)
/// is on the `x` axis, diagonals are `k = y - x` and each point's reach is
/// a `y` index of the longer operand.  The sentinel root is not included.
///
/// # Errors
///
/// Same as [`diff()`].
///
/// # Examples
///
/// ```
/// use ondiff::{NaturalEq, np};
///
/// let path = np::path(&[1, 2, 3], &[1, 3], NaturalEq).unwrap();
/// // `new` is shorter, so the path ends on diagonal `3 - 2`.
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
    let outcome = match Orientation::of_lengths(old.len(), new.len()) {
        Orientation::Forward => search(old, new, &eq, Orientation::Forward),
        Orientation::Swapped => search(new, old, &eq, Orientation::Swapped),
    };
    Ok(outcome.path())
}
