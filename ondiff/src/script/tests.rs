// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors
// grcov-excl-br-start

#![cfg(test)]

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ApplyError, ApplyErrorKind};
use crate::script::{DiffResult, EditScript, Operation, OperationKind};
use crate::sequence::{NaturalEq, Side};
use crate::test_utils::{
    cover_auto_debug, script_kinds, test_auto_clone, test_auto_debug_for_enum,
    test_recommended_default,
};


/// The script turning `[0, 1, 2, 3, 4, 5, 6]` into `[0, 3, 7, 4, 8, 6]`.
fn interleaved() -> EditScript<i32> {
    EditScript::from(vec![
        Operation::keep(0),
        Operation::delete(1),
        Operation::delete(2),
        Operation::keep(3),
        Operation::insert(7),
        Operation::keep(4),
        Operation::delete(5),
        Operation::insert(8),
        Operation::keep(6),
    ])
}

const OLD: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];
const NEW: [i32; 6] = [0, 3, 7, 4, 8, 6];


#[test]
fn operation_kind_impls() {
    test_auto_clone::<OperationKind>(&OperationKind::Keep);
    test_auto_debug_for_enum!(OperationKind, [Keep, Insert, Delete]);
    assert_eq!(format!("{}", OperationKind::Keep), "keep");
    assert_eq!(format!("{}", OperationKind::Insert), "insert");
    assert_eq!(format!("{}", OperationKind::Delete), "delete");
}

#[test]
fn operation_kind_properties() {
    assert_eq!(OperationKind::edit_of(Side::Old), OperationKind::Delete);
    assert_eq!(OperationKind::edit_of(Side::New), OperationKind::Insert);
    assert_eq!(OperationKind::Keep.inverted(), OperationKind::Keep);
    assert_eq!(OperationKind::Insert.inverted(), OperationKind::Delete);
    assert_eq!(OperationKind::Delete.inverted(), OperationKind::Insert);
    assert!(!OperationKind::Keep.is_edit());
    assert!(OperationKind::Insert.is_edit());
    assert!(OperationKind::Delete.is_edit());
}

#[test]
fn operation_basic() {
    let op = Operation::new(OperationKind::Insert, 'x');
    test_auto_clone(&op);
    assert_eq!(op, Operation::insert('x'));
    assert_eq!(op.kind(), OperationKind::Insert);
    assert_eq!(*op.element(), 'x');
    assert_eq!(op.clone().inverted(), Operation::delete('x'));
    assert_eq!(op.into_element(), 'x');
    assert_eq!(Operation::keep(1).kind(), OperationKind::Keep);
    assert_eq!(Operation::delete(1).kind(), OperationKind::Delete);
    assert_eq!(format!("{:?}", Operation::keep(1)), "Operation { kind: Keep, element: 1 }");
}


#[test]
fn script_new_and_default() {
    test_recommended_default!(EditScript<u8>);
    let script = EditScript::<u8>::new();
    assert!(script.is_empty());
    assert_eq!(script.len(), 0);
    assert_eq!(script.edits(), 0);
    assert_eq!(script.apply(&[], NaturalEq), Ok(vec![]));
}

#[test]
fn script_counts() {
    let script = interleaved();
    test_auto_clone(&script);
    cover_auto_debug(&script);
    assert_eq!(script.len(), 9);
    assert_eq!(script.count(OperationKind::Keep), 4);
    assert_eq!(script.insertions(), 2);
    assert_eq!(script.deletions(), 3);
    assert_eq!(script.edits(), 5);
    assert_eq!(script_kinds(&script), "=--=+=-+=");
}

#[test]
fn script_sides() {
    let script = interleaved();
    assert_eq!(script.old_elements().copied().collect::<Vec<_>>(), OLD);
    assert_eq!(script.new_elements().copied().collect::<Vec<_>>(), NEW);
}

#[test]
fn script_conversions() {
    let script = interleaved();
    assert_eq!(script.as_slice(), AsRef::<[Operation<i32>]>::as_ref(&script));
    assert_eq!(script.iter().count(), 9);
    assert_eq!((&script).into_iter().count(), 9);
    let collected: EditScript<i32> = script.clone().into_iter().collect();
    assert_eq!(collected, script);
    let ops = script.clone().into_vec();
    assert_eq!(ops.len(), 9);
    assert_eq!(EditScript::from(ops), script);
    let mut pushed = EditScript::with_capacity(1);
    pushed.push(Operation::keep(0));
    assert_eq!(pushed.as_slice(), &[Operation::keep(0)]);
}

#[test]
fn script_invert() {
    let inverted = interleaved().invert();
    assert_eq!(script_kinds(&inverted), "=++=-=+-=");
    assert_eq!(inverted.old_elements().copied().collect::<Vec<_>>(), NEW);
    assert_eq!(inverted.new_elements().copied().collect::<Vec<_>>(), OLD);
    assert_eq!(inverted.apply(&NEW, NaturalEq).unwrap(), OLD);
    assert_eq!(inverted.invert(), interleaved());
}

#[test]
fn script_apply_valid() {
    assert_eq!(interleaved().apply(&OLD, NaturalEq).unwrap(), NEW);
    assert_eq!(interleaved().apply(&OLD.to_vec(), NaturalEq).unwrap(), NEW);
}

#[test]
fn script_apply_uses_equivalence() {
    // Kept elements are emitted from the script (elements of `new`).
    let script = EditScript::from(vec![Operation::keep("A"), Operation::insert("b")]);
    let result = script.apply(&["a"], |o: &&str, e: &&str| o.eq_ignore_ascii_case(e));
    assert_eq!(result, Ok(vec!["A", "b"]));
    // Natural equality rejects it.
    assert_eq!(
        script.apply(&["a"], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldMismatch, 0))
    );
}

#[test]
fn script_apply_errors() {
    let script = interleaved();
    // Too short.
    assert_eq!(
        script.apply(&OLD[..5], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldExhausted, 5))
    );
    // Mismatch on a deletion.
    assert_eq!(
        script.apply(&[0, 9, 2, 3, 4, 5, 6], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldMismatch, 1))
    );
    // Mismatch on a keep.
    assert_eq!(
        script.apply(&[0, 1, 2, 3, 4, 5, 9], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldMismatch, 6))
    );
    // Too long.
    assert_eq!(
        script.apply(&[0, 1, 2, 3, 4, 5, 6, 7], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldRemaining, 7))
    );
    // Insertions only never consume.
    let script = EditScript::from(vec![Operation::insert(1)]);
    assert_eq!(script.apply(&[], NaturalEq), Ok(vec![1]));
    assert_eq!(
        script.apply(&[1], NaturalEq),
        Err(ApplyError(ApplyErrorKind::OldRemaining, 0))
    );
}


#[test]
fn diff_result_basic() {
    let result = DiffResult::new(5, interleaved(), vec![0, 3, 4, 6]);
    test_auto_clone(&result);
    cover_auto_debug(&result);
    assert_eq!(result.distance(), 5);
    assert_eq!(result.script(), &interleaved());
    assert_eq!(result.lcs(), &[0, 3, 4, 6]);
    assert!(!result.is_identical());
    let (distance, script, lcs) = result.into_parts();
    assert_eq!(distance, 5);
    assert_eq!(script, interleaved());
    assert_eq!(lcs, [0, 3, 4, 6]);
}

#[test]
fn diff_result_identical() {
    let script: EditScript<u8> = [Operation::keep(1), Operation::keep(2)].into_iter().collect();
    let result = DiffResult::new(0, script, vec![1, 2]);
    assert!(result.is_identical());
    let result = DiffResult::new(0, EditScript::<u8>::new(), vec![]);
    assert!(result.is_identical());
}

#[cfg(not(ondiff_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn diff_result_inconsistent() {
    // The distance does not match the script.
    let _ = DiffResult::new(4, interleaved(), vec![0, 3, 4, 6]);
}
