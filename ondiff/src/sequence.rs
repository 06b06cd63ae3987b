// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Sequence views and element equivalence.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(test)]
mod tests;


/// A read-only, 0-indexed and finite view over caller elements.
///
/// Both operands of a diff are accessed only through this trait, so any
/// random-access container can be compared without copying it first.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use ondiff::{NaturalEq, Sequence, np};
///
/// let old: VecDeque<u8> = [1, 2, 3].into_iter().collect();
/// assert_eq!(Sequence::len(&old), 3);
/// assert_eq!(*old.item(1), 2);
///
/// let result = np::diff(&old, &[1, 3], NaturalEq).unwrap();
/// assert_eq!(result.distance(), 1);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// The diff engines only call this with `index < self.len()`.
    fn item(&self, index: usize) -> &Self::Item;

    /// Returns whether the sequence has no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<T> Sequence for [T] {
    type Item = T;
    #[inline(always)]
    fn len(&self) -> usize { <[T]>::len(self) }
    #[inline(always)]
    fn item(&self, index: usize) -> &T { &self[index] }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    #[inline(always)]
    fn len(&self) -> usize { N }
    #[inline(always)]
    fn item(&self, index: usize) -> &T { &self[index] }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    #[inline(always)]
    fn len(&self) -> usize { Vec::len(self) }
    #[inline(always)]
    fn item(&self, index: usize) -> &T { &self[index] }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    #[inline(always)]
    fn len(&self) -> usize { VecDeque::len(self) }
    #[inline(always)]
    fn item(&self, index: usize) -> &T { &self[index] }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    #[inline(always)]
    fn len(&self) -> usize { (**self).len() }
    #[inline(always)]
    fn item(&self, index: usize) -> &S::Item { (**self).item(index) }
}


/// One of the two operands of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The sequence before the change (A).
    Old,
    /// The sequence after the change (B).
    New,
}

impl Side {
    /// Returns the other operand.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Old => Side::New,
            Side::New => Side::Old,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            Side::Old => "old",
            Side::New => "new",
        })
    }
}


/// The caller-supplied predicate deciding whether two elements are
/// "the same" while following a snake.
///
/// It does not have to be [`PartialEq`] but it must be a consistent
/// equivalence over the compared elements.  The engines always call it as
/// `equiv(element_of_old, element_of_new)`, even when the operands are
/// internally swapped.
///
/// Any `Fn(&T, &T) -> bool` closure is an equivalence:
///
/// ```
/// use ondiff::nd;
///
/// let old = ["Apple", "banana"];
/// let new = ["apple", "Cherry"];
/// let result = nd::diff(&old, &new, |a: &&str, b: &&str| a.eq_ignore_ascii_case(b)).unwrap();
/// // Kept elements are taken from the new sequence.
/// assert_eq!(result.lcs(), &["apple"]);
/// ```
pub trait Equivalence<T: ?Sized> {
    /// Returns whether `old` (from the old sequence) and `new`
    /// (from the new sequence) are equivalent.
    fn equiv(&self, old: &T, new: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn equiv(&self, old: &T, new: &T) -> bool {
        self(old, new)
    }
}

/// The natural equivalence: [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEq;

impl<T: PartialEq + ?Sized> Equivalence<T> for NaturalEq {
    #[inline(always)]
    fn equiv(&self, old: &T, new: &T) -> bool {
        old == new
    }
}

/// The equivalence defined by a comparator.
///
/// Two elements are equivalent when the comparator returns
/// [`Ordering::Equal`].
///
/// ```
/// use ondiff::{ByOrdering, np};
///
/// let by_abs = ByOrdering(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
/// let result = np::diff(&[-1, 2, -3], &[1, -2, 4], by_abs).unwrap();
/// assert_eq!(result.lcs(), &[1, -2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByOrdering<F>(pub F);

impl<T: ?Sized, F> Equivalence<T> for ByOrdering<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn equiv(&self, old: &T, new: &T) -> bool {
        (self.0)(old, new) == Ordering::Equal
    }
}
