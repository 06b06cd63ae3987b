// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by The ondiff Authors in 2025
// grcov-excl-br-start

#![cfg(any(test, doc))]

use alloc::string::String;
use alloc::vec::Vec;

use crate::script::{DiffResult, EditScript, OperationKind};
use crate::sequence::Equivalence;




/// Testing function for [`Clone`] (for coverage).
///
/// This function is suitable if we have no comparison function for these.
pub(crate) fn cover_auto_clone<T: Clone>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    cloned.clone_from(orig_value);
}


/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Test recommended [`Default`] implementation.
#[doc(alias = "test_recommended_default")]
macro_rules! test_recommended_default_impl {
    ($ty: ty) => {{
        let value1 = <$ty>::new();
        let value2 = <$ty>::default();
        assert_eq!(value1, value2);
    }};
}

/// Test auto-generated [`Debug`](core::fmt::Debug) output of
/// unit variants of an enum.
#[doc(alias = "test_auto_debug_for_enum")]
macro_rules! test_auto_debug_for_enum_impl {
    ($ty: ident, []) => {};
    ($ty: ident, [$($variant: ident),+ $(,)?]) => {
        $(
            assert_eq!(format!("{:?}", $ty::$variant), stringify!($variant));
        )+
    };
}

pub(crate) use test_recommended_default_impl as test_recommended_default;
pub(crate) use test_auto_debug_for_enum_impl as test_auto_debug_for_enum;


/// Computes the LCS distance between two given slices.
///
/// This is the classic quadratic dynamic programming, allowing element
/// insertion and deletion as two primitive operations (in cost 1).
/// The engines must agree with it on every input.
pub(crate) fn lcs_distance<T, E: Equivalence<T>>(old: &[T], new: &[T], eq: &E) -> usize {
    let mut row = Vec::from_iter(0usize..=new.len());
    for (i1, ch1) in old.iter().enumerate() {
        let mut prev_l = row[0];
        row[0] = i1 + 1;
        for (i2, ch2) in new.iter().enumerate() {
            let curr_l = row[i2];
            let prev_c = row[i2 + 1];
            let cost_a = curr_l + 1;
            let cost_d = prev_c + 1;
            // Replacement is either free (a match) or not allowed.
            let cost_r = if eq.equiv(ch1, ch2) { prev_l } else { usize::MAX };
            prev_l = prev_c;
            row[i2 + 1] = cost_a.min(cost_d.min(cost_r));
        }
    }
    row[new.len()]
}


/// Renders the kinds of a script, one character per operation:
/// `=` (keep), `+` (insert) and `-` (delete).
pub(crate) fn script_kinds<T>(script: &EditScript<T>) -> String {
    script.iter().map(|op| match op.kind() {
        OperationKind::Keep   => '=',
        OperationKind::Insert => '+',
        OperationKind::Delete => '-',
    }).collect()
}


/// Checks every property a diff result must satisfy against its operands.
///
/// The distance is cross-checked with [`lcs_distance()`].
pub(crate) fn check_result<T, E>(old: &[T], new: &[T], eq: &E, result: &DiffResult<T>)
where
    T: Clone + PartialEq + core::fmt::Debug,
    E: Equivalence<T>,
{
    let script = result.script();
    let lcs = result.lcs();
    // Shortest.
    assert_eq!(result.distance(), lcs_distance(old, new, eq), "{:?} {:?}", old, new);
    // Length relations.
    assert_eq!(result.distance() + 2 * lcs.len(), old.len() + new.len());
    assert_eq!(script.len(), result.distance() + lcs.len());
    assert_eq!(script.edits(), result.distance());
    assert_eq!(script.deletions() + lcs.len(), old.len());
    assert_eq!(script.insertions() + lcs.len(), new.len());
    // Kept elements spell the common subsequence.
    let kept: Vec<&T> = script.iter()
        .filter(|op| op.kind() == OperationKind::Keep)
        .map(|op| op.element())
        .collect();
    assert_eq!(kept, lcs.iter().collect::<Vec<_>>());
    // The script spells the new sequence exactly...
    assert_eq!(script.new_elements().cloned().collect::<Vec<_>>(), new);
    // ...and a sequence equivalent to the old one.
    let read: Vec<&T> = script.old_elements().collect();
    assert_eq!(read.len(), old.len());
    for (o, e) in old.iter().zip(read) {
        assert!(eq.equiv(o, e));
    }
    // Replaying.
    let replayed = script.apply(old, |o: &T, e: &T| eq.equiv(o, e));
    assert_eq!(replayed.unwrap(), new);
}

/// Same as [`check_result()`] with [`PartialEq`].
pub(crate) fn check_result_natural<T>(old: &[T], new: &[T], result: &DiffResult<T>)
where
    T: Clone + PartialEq + core::fmt::Debug,
{
    check_result(old, new, &crate::sequence::NaturalEq, result)
}


/// A diff with a known outcome (valid for both engines).
pub(crate) struct FixedCase {
    /// The description.
    pub name: &'static str,
    /// The old sequence.
    pub old: &'static [i32],
    /// The new sequence.
    pub new: &'static [i32],
    /// The edit distance.
    pub distance: usize,
    /// The kinds of the script (see [`script_kinds()`]).
    pub kinds: &'static str,
    /// The common subsequence.
    pub lcs: &'static [i32],
}

/// The base sequence most fixed cases are modified from.
const BASE: &[i32] = &[0, 1, 2, 3, 4, 5, 6];

/// Fixed cases: identity, then insertion, deletion and change of
/// 1 and 3 elements at the head, middle and tail.
pub(crate) const FIXED_CASES: &[FixedCase] = &[
    FixedCase { name: "identity", old: BASE, new: BASE, distance: 0, kinds: "=======", lcs: BASE },
    FixedCase { name: "empty", old: &[], new: &[], distance: 0, kinds: "", lcs: &[] },
    FixedCase { name: "from empty", old: &[], new: &[1, 2], distance: 2, kinds: "++", lcs: &[] },
    FixedCase { name: "to empty", old: &[1, 2], new: &[], distance: 2, kinds: "--", lcs: &[] },
    FixedCase {
        name: "insert at head, 1 element",
        old: BASE, new: &[-1, 0, 1, 2, 3, 4, 5, 6],
        distance: 1, kinds: "+=======", lcs: BASE,
    },
    FixedCase {
        name: "insert at head, 3 elements",
        old: BASE, new: &[-3, -2, -1, 0, 1, 2, 3, 4, 5, 6],
        distance: 3, kinds: "+++=======", lcs: BASE,
    },
    FixedCase {
        name: "insert at middle, 1 element",
        old: BASE, new: &[0, 1, 2, 7, 3, 4, 5, 6],
        distance: 1, kinds: "===+====", lcs: BASE,
    },
    FixedCase {
        name: "insert at middle, 3 elements",
        old: BASE, new: &[0, 1, 2, 7, 8, 9, 3, 4, 5, 6],
        distance: 3, kinds: "===+++====", lcs: BASE,
    },
    FixedCase {
        name: "insert at tail, 1 element",
        old: BASE, new: &[0, 1, 2, 3, 4, 5, 6, 7],
        distance: 1, kinds: "=======+", lcs: BASE,
    },
    FixedCase {
        name: "insert at tail, 3 elements",
        old: BASE, new: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        distance: 3, kinds: "=======+++", lcs: BASE,
    },
    FixedCase {
        name: "delete at head, 1 element",
        old: BASE, new: &[1, 2, 3, 4, 5, 6, 9],
        distance: 2, kinds: "-======+", lcs: &[1, 2, 3, 4, 5, 6],
    },
    FixedCase {
        name: "delete at head, 3 elements",
        old: BASE, new: &[3, 4, 5, 6, 9, 9, 9],
        distance: 6, kinds: "---====+++", lcs: &[3, 4, 5, 6],
    },
    FixedCase {
        name: "delete at middle, 1 element",
        old: BASE, new: &[0, 1, 2, 4, 5, 6, 9],
        distance: 2, kinds: "===-===+", lcs: &[0, 1, 2, 4, 5, 6],
    },
    FixedCase {
        name: "delete at middle, 3 elements",
        old: BASE, new: &[0, 1, 5, 6, 9, 9, 9],
        distance: 6, kinds: "==---==+++", lcs: &[0, 1, 5, 6],
    },
    FixedCase {
        name: "delete at tail, 1 element",
        old: BASE, new: &[9, 0, 1, 2, 3, 4, 5],
        distance: 2, kinds: "+======-", lcs: &[0, 1, 2, 3, 4, 5],
    },
    FixedCase {
        name: "delete at tail, 3 elements",
        old: BASE, new: &[9, 9, 9, 0, 1, 2, 3],
        distance: 6, kinds: "+++====---", lcs: &[0, 1, 2, 3],
    },
    FixedCase {
        name: "change at head, 1 element",
        old: BASE, new: &[7, 1, 2, 3, 4, 5, 6],
        distance: 2, kinds: "-+======", lcs: &[1, 2, 3, 4, 5, 6],
    },
    FixedCase {
        name: "change at head, 3 elements",
        old: BASE, new: &[7, 8, 9, 3, 4, 5, 6],
        distance: 6, kinds: "---+++====", lcs: &[3, 4, 5, 6],
    },
    FixedCase {
        name: "change at middle, 1 element",
        old: BASE, new: &[0, 1, 2, 7, 4, 5, 6],
        distance: 2, kinds: "===-+===", lcs: &[0, 1, 2, 4, 5, 6],
    },
    FixedCase {
        name: "change at middle, 3 elements",
        old: BASE, new: &[0, 1, 7, 8, 9, 5, 6],
        distance: 6, kinds: "==---+++==", lcs: &[0, 1, 5, 6],
    },
    FixedCase {
        name: "change at tail, 1 element",
        old: BASE, new: &[0, 1, 2, 3, 4, 5, 7],
        distance: 2, kinds: "======-+", lcs: &[0, 1, 2, 3, 4, 5],
    },
    FixedCase {
        name: "change at tail, 3 elements",
        old: BASE, new: &[0, 1, 2, 3, 7, 8, 9],
        distance: 6, kinds: "====---+++", lcs: &[0, 1, 2, 3],
    },
    FixedCase {
        name: "total mismatch",
        old: &[0, 1, 2, 3, 4], new: &[5, 6, 7, 8, 9],
        distance: 10, kinds: "-----+++++", lcs: &[],
    },
    FixedCase {
        name: "interleaved",
        old: BASE, new: &[0, 3, 7, 4, 8, 6],
        distance: 5, kinds: "=--=+=-+=", lcs: &[0, 3, 4, 6],
    },
];


/// Enumerates every sequence over `0..alphabet` with a length up to
/// `max_len` (shortest first).
#[cfg(test)]
pub(crate) fn all_sequences(alphabet: u8, max_len: usize) -> Vec<Vec<u8>> {
    use itertools::Itertools;
    let mut all = Vec::new();
    for len in 0..=max_len {
        if len == 0 {
            all.push(Vec::new());
            continue;
        }
        all.extend((0..len).map(|_| 0..alphabet).multi_cartesian_product());
    }
    all
}
