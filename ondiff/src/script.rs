// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Edit operations, edit scripts and diff results.

use alloc::vec::Vec;

use crate::error::{ApplyError, ApplyErrorKind};
use crate::sequence::{Equivalence, Sequence, Side};

#[cfg(test)]
mod tests;


/// The kind of an edit [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// The element is common to both sequences.
    Keep,
    /// The element only exists in the new sequence.
    Insert,
    /// The element only exists in the old sequence.
    Delete,
}

impl OperationKind {
    /// The edit consuming one element of the given operand.
    #[inline]
    pub(crate) const fn edit_of(side: Side) -> Self {
        match side {
            Side::Old => OperationKind::Delete,
            Side::New => OperationKind::Insert,
        }
    }

    /// Returns the kind with [`Insert`](Self::Insert) and
    /// [`Delete`](Self::Delete) swapped.
    ///
    /// This is the kind of the same edit seen from `new` to `old`.
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            OperationKind::Keep   => OperationKind::Keep,
            OperationKind::Insert => OperationKind::Delete,
            OperationKind::Delete => OperationKind::Insert,
        }
    }

    /// Returns whether this kind costs one edit.
    #[inline]
    pub const fn is_edit(self) -> bool {
        !matches!(self, OperationKind::Keep)
    }
}

impl core::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            OperationKind::Keep   => "keep",
            OperationKind::Insert => "insert",
            OperationKind::Delete => "delete",
        })
    }
}


/// One step of an [`EditScript`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation<T> {
    /// What this step does.
    kind: OperationKind,
    /// The element this step keeps, inserts or deletes.
    element: T,
}

impl<T> Operation<T> {
    /// Creates an operation.
    #[inline]
    pub const fn new(kind: OperationKind, element: T) -> Self {
        Operation { kind, element }
    }

    /// Creates a [`Keep`](OperationKind::Keep) operation.
    #[inline]
    pub const fn keep(element: T) -> Self { Self::new(OperationKind::Keep, element) }
    /// Creates an [`Insert`](OperationKind::Insert) operation.
    #[inline]
    pub const fn insert(element: T) -> Self { Self::new(OperationKind::Insert, element) }
    /// Creates a [`Delete`](OperationKind::Delete) operation.
    #[inline]
    pub const fn delete(element: T) -> Self { Self::new(OperationKind::Delete, element) }

    /// The kind of this operation.
    #[inline(always)]
    pub fn kind(&self) -> OperationKind { self.kind }

    /// The element of this operation.
    #[inline(always)]
    pub fn element(&self) -> &T { &self.element }

    /// Consumes the operation and returns the element.
    #[inline]
    pub fn into_element(self) -> T { self.element }

    /// Returns the same operation seen from `new` to `old`.
    #[inline]
    pub fn inverted(self) -> Self {
        Operation { kind: self.kind.inverted(), element: self.element }
    }
}


/// An ordered list of [`Operation`]s turning the old sequence into
/// the new one.
///
/// # Examples
///
/// ```
/// use ondiff::{NaturalEq, OperationKind, nd};
///
/// let old = [0, 1, 2, 3, 4, 5, 6];
/// let new = [0, 3, 7, 4, 8, 6];
/// let result = nd::diff(&old, &new, NaturalEq).unwrap();
/// let script = result.script();
/// assert_eq!(script.deletions(), 3);
/// assert_eq!(script.insertions(), 2);
/// assert_eq!(script.apply(&old, NaturalEq).unwrap(), new);
/// assert_eq!(script.iter().next().unwrap().kind(), OperationKind::Keep);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditScript<T>(Vec<Operation<T>>);

impl<T> EditScript<T> {
    /// Creates an empty script.
    #[inline]
    pub const fn new() -> Self { EditScript(Vec::new()) }

    /// Creates an empty script with room for `capacity` operations.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        EditScript(Vec::with_capacity(capacity))
    }

    /// Appends an operation.
    #[inline(always)]
    pub(crate) fn push(&mut self, op: Operation<T>) {
        self.0.push(op);
    }

    /// Returns the number of operations.
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the script has no operations.
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns the operations as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Operation<T>] { &self.0 }

    /// Returns an iterator over the operations.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Operation<T>> { self.0.iter() }

    /// Consumes the script and returns the operations.
    #[inline]
    pub fn into_vec(self) -> Vec<Operation<T>> { self.0 }

    /// Counts the operations of the given kind.
    pub fn count(&self, kind: OperationKind) -> usize {
        self.0.iter().filter(|op| op.kind == kind).count()
    }

    /// Counts [`Insert`](OperationKind::Insert) operations.
    #[inline]
    pub fn insertions(&self) -> usize { self.count(OperationKind::Insert) }

    /// Counts [`Delete`](OperationKind::Delete) operations.
    #[inline]
    pub fn deletions(&self) -> usize { self.count(OperationKind::Delete) }

    /// Counts edits (insertions and deletions).
    pub fn edits(&self) -> usize {
        self.0.iter().filter(|op| op.kind.is_edit()).count()
    }

    /// Returns the elements this script reads from the old sequence
    /// (kept and deleted ones), in order.
    pub fn old_elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
            .filter(|op| op.kind != OperationKind::Insert)
            .map(|op| &op.element)
    }

    /// Returns the elements this script writes to the new sequence
    /// (kept and inserted ones), in order.
    pub fn new_elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
            .filter(|op| op.kind != OperationKind::Delete)
            .map(|op| &op.element)
    }

    /// Returns the script turning `new` back into `old`.
    ///
    /// Every insertion becomes a deletion and vice versa; the order of
    /// operations is preserved.
    pub fn invert(self) -> Self {
        EditScript(self.0.into_iter().map(Operation::inverted).collect())
    }

    /// Replays this script against `old` and returns the new sequence.
    ///
    /// [`Keep`](OperationKind::Keep) and [`Delete`](OperationKind::Delete)
    /// consume elements of `old` in order (each must be equivalent to the
    /// element recorded in the script) and
    /// [`Insert`](OperationKind::Insert) emits its own element.
    /// Kept elements are emitted from the script, so the result is exactly
    /// the new sequence the script was computed against.
    ///
    /// A deleted element is compared with itself, so `eq` must be reflexive.
    pub fn apply<S, E>(&self, old: &S, eq: E) -> Result<Vec<T>, ApplyError>
    where
        S: Sequence<Item = T> + ?Sized,
        E: Equivalence<T>,
        T: Clone,
    {
        let mut emitted = Vec::with_capacity(self.0.len());
        let mut offset = 0usize;
        for op in &self.0 {
            if op.kind != OperationKind::Insert {
                if offset >= old.len() {
                    return Err(ApplyError(ApplyErrorKind::OldExhausted, offset));
                }
                if !eq.equiv(old.item(offset), &op.element) {
                    return Err(ApplyError(ApplyErrorKind::OldMismatch, offset));
                }
                offset += 1;
            }
            if op.kind != OperationKind::Delete {
                emitted.push(op.element.clone());
            }
        }
        if offset != old.len() {
            return Err(ApplyError(ApplyErrorKind::OldRemaining, offset));
        }
        Ok(emitted)
    }
}

impl<T> Default for EditScript<T> {
    fn default() -> Self { Self::new() }
}

impl<T> From<Vec<Operation<T>>> for EditScript<T> {
    fn from(value: Vec<Operation<T>>) -> Self { EditScript(value) }
}

impl<T> FromIterator<Operation<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = Operation<T>>>(iter: I) -> Self {
        EditScript(iter.into_iter().collect())
    }
}

impl<T> AsRef<[Operation<T>]> for EditScript<T> {
    fn as_ref(&self) -> &[Operation<T>] { &self.0 }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = Operation<T>;
    type IntoIter = alloc::vec::IntoIter<Operation<T>>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a Operation<T>;
    type IntoIter = core::slice::Iter<'a, Operation<T>>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}


/// The outcome of a diff: edit distance, shortest edit script and
/// longest common subsequence.
///
/// The three parts always satisfy:
///
/// *   `distance == old.len() + new.len() - 2 * lcs.len()`
/// *   `script.len() == distance + lcs.len()`
/// *   replaying `script` against `old` reproduces `new`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffResult<T> {
    /// The number of insertions and deletions.
    distance: usize,
    /// The shortest edit script.
    script: EditScript<T>,
    /// The common subsequence spelled by the kept elements.
    lcs: Vec<T>,
}

impl<T> DiffResult<T> {
    /// Creates a result from the parts an engine produced.
    pub(crate) fn new(distance: usize, script: EditScript<T>, lcs: Vec<T>) -> Self {
        debug_assert_eq!(script.len(), distance + lcs.len());
        debug_assert_eq!(script.edits(), distance);
        DiffResult { distance, script, lcs }
    }

    /// The edit distance (insertions plus deletions).
    #[inline(always)]
    pub fn distance(&self) -> usize { self.distance }

    /// The shortest edit script.
    #[inline(always)]
    pub fn script(&self) -> &EditScript<T> { &self.script }

    /// The longest common subsequence (elements taken from the new sequence).
    ///
    /// This holds for both engines and regardless of which operand is
    /// shorter.  With an equivalence other than equality, the elements may
    /// differ from their counterparts in the old sequence.
    #[inline(always)]
    pub fn lcs(&self) -> &[T] { &self.lcs }

    /// Returns whether both sequences were equivalent.
    #[inline]
    pub fn is_identical(&self) -> bool { self.distance == 0 }

    /// Consumes the result and returns `(distance, script, lcs)`.
    #[inline]
    pub fn into_parts(self) -> (usize, EditScript<T>, Vec<T>) {
        (self.distance, self.script, self.lcs)
    }
}
