// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Edit script assembly from a reconstructed edit graph path.

use alloc::vec::Vec;

use crate::point::DiagonalPoint;
use crate::script::{EditScript, Operation, OperationKind};
use crate::sequence::{Sequence, Side};
use crate::tracing_macros::debug;



/// Walks a forward path and emits the edit script and the common
/// subsequence.
///
/// Both engines are described here in the same terms: the *primary*
/// sequence is the one indexed by [`DiagonalPoint::reach()`] and the
/// diagonal of a cursor is `primary_index - secondary_index`.
///
/// | Engine      | primary      | secondary    | `primary_side`       |
/// | ----------- | ------------ | ------------ | -------------------- |
/// | ND          | old (`x`)    | new (`y`)    | [`Side::Old`]        |
/// | NP, forward | new (`y`)    | old (`x`)    | [`Side::New`]        |
/// | NP, swapped | old (`y`)    | new (`x`)    | [`Side::Old`]        |
///
/// For each point, the cursor first moves onto the point's diagonal by
/// consuming primary elements (cursor left of `k`) or secondary elements
/// (cursor right of `k`), then follows the diagonal up to the point's
/// reach, keeping elements.  Kept elements are taken from the new
/// sequence.
pub(crate) fn build<P, S, T>(
    path: &[DiagonalPoint],
    primary: &P,
    secondary: &S,
    primary_side: Side,
) -> (EditScript<T>, Vec<T>)
where
    P: Sequence<Item = T> + ?Sized,
    S: Sequence<Item = T> + ?Sized,
    T: Clone,
{
    let primary_edit = OperationKind::edit_of(primary_side);
    let secondary_edit = OperationKind::edit_of(primary_side.opposite());
    let mut script = EditScript::with_capacity(primary.len() + secondary.len());
    let mut lcs = Vec::new();
    let mut p = 0usize;
    let mut s = 0usize;
    for point in path {
        let k = point.k();
        while diagonal(p, s) < k {
            script.push(Operation::new(primary_edit, primary.item(p).clone()));
            p += 1;
        }
        while diagonal(p, s) > k {
            script.push(Operation::new(secondary_edit, secondary.item(s).clone()));
            s += 1;
        }
        while (p as isize) < point.reach() {
            let element = match primary_side {
                Side::New => primary.item(p),
                Side::Old => secondary.item(s),
            };
            lcs.push(element.clone());
            script.push(Operation::keep(element.clone()));
            p += 1;
            s += 1;
        }
    }
    debug_assert_eq!(p, primary.len());
    debug_assert_eq!(s, secondary.len());
    debug!(
        operations = script.len(),
        common = lcs.len(),
        path = path.len(),
        "edit script assembled"
    );
    (script, lcs)
}

/// The diagonal of the cursor `(p, s)`.
#[inline(always)]
fn diagonal(p: usize, s: usize) -> isize {
    p as isize - s as isize
}
