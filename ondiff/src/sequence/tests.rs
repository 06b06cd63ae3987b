// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors
// grcov-excl-br-start

#![cfg(test)]

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::sequence::{ByOrdering, Equivalence, NaturalEq, Sequence, Side};
use crate::test_utils::{cover_auto_clone, cover_auto_debug, test_auto_clone, test_auto_debug_for_enum};


/// Collects a sequence through the [`Sequence`] trait only.
fn collect_items<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Item>
where
    S::Item: Clone,
{
    (0..seq.len()).map(|i| seq.item(i).clone()).collect()
}

#[test]
fn sequence_impls() {
    const EXPECTED: [u8; 4] = [1, 2, 3, 4];
    // Slice
    let slice: &[u8] = &EXPECTED;
    assert_eq!(Sequence::len(slice), 4);
    assert!(!Sequence::is_empty(slice));
    assert_eq!(collect_items(slice), EXPECTED);
    // Array
    assert_eq!(Sequence::len(&EXPECTED), 4);
    assert_eq!(collect_items(&EXPECTED), EXPECTED);
    // Vec
    let vec = EXPECTED.to_vec();
    assert_eq!(Sequence::len(&vec), 4);
    assert_eq!(collect_items(&vec), EXPECTED);
    // VecDeque (with a wrapped ring buffer)
    let mut deque: VecDeque<u8> = VecDeque::with_capacity(4);
    deque.push_back(2);
    deque.push_back(3);
    deque.push_back(4);
    deque.push_front(1);
    assert_eq!(Sequence::len(&deque), 4);
    assert_eq!(collect_items(&deque), EXPECTED);
    // Reference to a sequence
    let by_ref = &vec;
    assert_eq!(Sequence::len(&by_ref), 4);
    assert_eq!(*by_ref.item(3), 4);
    assert_eq!(collect_items(&by_ref), EXPECTED);
}

#[test]
fn sequence_empty() {
    let empty: [u8; 0] = [];
    assert!(Sequence::is_empty(&empty));
    assert!(Sequence::is_empty(&Vec::<u8>::new()));
    assert!(Sequence::is_empty(&VecDeque::<u8>::new()));
    assert!(Sequence::is_empty(&&empty[..]));
}

#[test]
fn side_impls() {
    test_auto_clone::<Side>(&Side::Old);
    test_auto_debug_for_enum!(Side, [Old, New]);
    assert_eq!(Side::Old.opposite(), Side::New);
    assert_eq!(Side::New.opposite(), Side::Old);
    assert_eq!(format!("{}", Side::Old), "old");
    assert_eq!(format!("{}", Side::New), "new");
}

#[test]
fn natural_eq() {
    test_auto_clone::<NaturalEq>(&NaturalEq);
    cover_auto_debug(&NaturalEq);
    assert!(NaturalEq.equiv(&1, &1));
    assert!(!NaturalEq.equiv(&1, &2));
    // Unsized elements
    assert!(Equivalence::<str>::equiv(&NaturalEq, "abc", "abc"));
    assert!(!Equivalence::<str>::equiv(&NaturalEq, "abc", "abd"));
}

#[test]
fn closure_equivalence_argument_order() {
    // Asymmetric: `new` must be the successor of `old`.
    let succ = |old: &i32, new: &i32| *old + 1 == *new;
    assert!(succ.equiv(&1, &2));
    assert!(!succ.equiv(&2, &1));
}

#[test]
fn by_ordering() {
    let by_abs = ByOrdering(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    cover_auto_clone(&by_abs);
    cover_auto_debug(&ByOrdering(()));
    assert!(by_abs.equiv(&-3, &3));
    assert!(!by_abs.equiv(&-3, &4));
    // Only `Equal` makes two elements equivalent.
    let always = |ordering: Ordering| ByOrdering(move |_: &u8, _: &u8| ordering);
    assert!(always(Ordering::Equal).equiv(&0, &1));
    assert!(!always(Ordering::Less).equiv(&0, &0));
    assert!(!always(Ordering::Greater).equiv(&0, &0));
}
