// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Error types of the diff engines and of edit script replay.

use crate::macros::impl_error;
use crate::sequence::Side;



/// The maximum length of each operand.
///
/// Diagonal indices and reaches of the edit graph are [`isize`] values
/// spanning `-(N+M+1)..=(N+M+1)`, so both lengths together must leave
/// room for that range.
pub const MAX_LEN: usize = (isize::MAX as usize - 2) / 2;


/// An enumeration representing a cause of a [`DiffError`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffErrorKind {
    /// The sequence is longer than the limit set by
    /// [`DiffOptions::max_len()`](crate::DiffOptions::max_len()).
    ExceedsLimit,
    /// The sequence is longer than [`MAX_LEN`].
    ExceedsIndexRange,
}

impl core::fmt::Display for DiffErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            DiffErrorKind::ExceedsLimit      => "exceeds the configured length limit",
            DiffErrorKind::ExceedsIndexRange => "is too long to index the edit graph",
        })
    }
}


// grcov-excl-br-start:STRUCT_MEMBER

/// The error type for diff operations.
///
/// It is raised before any search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffError(
    pub(crate) DiffErrorKind,
    pub(crate) Side,
    pub(crate) usize
);

// grcov-excl-br-end

impl DiffError {
    /// Returns the cause of the error.
    pub fn kind(&self) -> DiffErrorKind { self.0 }
    /// Returns the operand which caused the error.
    pub fn side(&self) -> Side { self.1 }
    /// Returns the length of the operand which caused the error.
    pub fn length(&self) -> usize { self.2 }
}

impl core::fmt::Display for DiffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{1} sequence with {2} elements {0}",
            self.kind(),
            self.side(),
            self.length()
        )
    }
}

impl_error!(DiffError {});

/// Checks operand lengths against [`MAX_LEN`] and an optional limit.
///
/// The old side is checked first.
pub(crate) fn check_lengths(
    len_old: usize,
    len_new: usize,
    limit: Option<usize>,
) -> Result<(), DiffError> {
    for (side, len) in [(Side::Old, len_old), (Side::New, len_new)] {
        if len > MAX_LEN {
            return Err(DiffError(DiffErrorKind::ExceedsIndexRange, side, len));
        }
        if let Some(limit) = limit {
            if len > limit {
                return Err(DiffError(DiffErrorKind::ExceedsLimit, side, len));
            }
        }
    }
    Ok(())
}


/// An enumeration representing a cause of an [`ApplyError`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyErrorKind {
    /// The old sequence ended while the script still consumes from it.
    OldExhausted,
    /// An element of the old sequence is not equivalent to
    /// the kept or deleted element of the script.
    OldMismatch,
    /// The old sequence has elements left after the script ended.
    OldRemaining,
}

impl core::fmt::Display for ApplyErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            ApplyErrorKind::OldExhausted => "old sequence ended before the script",
            ApplyErrorKind::OldMismatch  => "old sequence does not match the script",
            ApplyErrorKind::OldRemaining => "old sequence has elements after the script",
        })
    }
}


// grcov-excl-br-start:STRUCT_MEMBER

/// The error type for [`EditScript::apply()`](crate::EditScript::apply()).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyError(
    pub(crate) ApplyErrorKind,
    pub(crate) usize
);

// grcov-excl-br-end

impl ApplyError {
    /// Returns the cause of the error.
    pub fn kind(&self) -> ApplyErrorKind { self.0 }
    /// Returns the offset in the old sequence where the error occurred.
    pub fn offset(&self) -> usize { self.1 }
}

impl core::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "error occurred while applying an edit script (at old offset {1}): {0}",
            self.kind(),
            self.offset()
        )
    }
}

impl_error!(ApplyError {});
