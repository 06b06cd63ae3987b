// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Shortest edit scripts and longest common subsequences of two sequences.
//!
//! This crate compares two sequences (`old` and `new`) with a
//! caller-supplied element equivalence and computes:
//!
//! *   the edit distance (the number of insertions and deletions),
//! *   a shortest edit script turning `old` into `new` and
//! *   a longest common subsequence.
//!
//! Two engines are provided:
//!
//! *   [`nd`]: Myers' O(ND) increasing-distance frontier search,
//! *   [`np`]: Wu's O(NP) increasing-one-sided-edits frontier search
//!     (the default of [`Algorithm`] and the easy functions).
//!
//! # Examples
//!
//! ```
//! use ondiff::{NaturalEq, OperationKind, np};
//!
//! let old = [0, 1, 2, 3, 4, 5, 6];
//! let new = [0, 3, 7, 4, 8, 6];
//! let result = np::diff(&old, &new, NaturalEq).unwrap();
//! assert_eq!(result.distance(), 5);
//! assert_eq!(result.lcs(), &[0, 3, 4, 6]);
//!
//! let rendered: String = result.script().iter().map(|op| match op.kind() {
//!     OperationKind::Keep   => ' ',
//!     OperationKind::Insert => '+',
//!     OperationKind::Delete => '-',
//! }).collect();
//! assert_eq!(rendered, " -- + -+ ");
//! ```
//!
//! With the `easy-functions` feature (enabled by default):
//!
//! ```
//! # #[cfg(feature = "easy-functions")]
//! # {
//! let result = ondiff::diff_lines("a\nb\nc\n", "a\nB\nc\n").unwrap();
//! assert_eq!(result.distance(), 2);
//! # }
//! ```
//!
//! # Crate features
//!
//! *   `std` (default): implements [`std::error::Error`] on error types.
//!     Without it, this crate is `no_std` (but requires `alloc`).
//! *   `easy-functions` (default): [`diff_slices()`], [`diff_chars()`],
//!     [`diff_strs()`] and [`diff_lines()`].
//! *   `tracing`: emits search diagnostics through the
//!     [`tracing`](https://docs.rs/tracing) crate.
//! *   `unsafe`: turns internal invariants into optimizer hints.

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
// unsafe code is *only* allowed on enabling the "unsafe" feature or
// on the tests.
#![cfg_attr(not(any(feature = "unsafe", test)), forbid(unsafe_code))]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: allow unused unsafe blocks (invariant! does will not need unsafe
// on tests but others may need this macro).
#![cfg_attr(test, allow(unused_unsafe))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]

extern crate alloc;

mod algorithm;
mod builder;
mod diff_easy;
mod error;
mod macros;
mod options;
mod point;
mod script;
mod search_nd;
mod search_np;
mod sequence;
mod test_utils;
mod tracing_macros;

pub use algorithm::Algorithm;
#[cfg(feature = "easy-functions")]
pub use diff_easy::{diff_chars, diff_lines, diff_slices, diff_strs};
pub use error::{ApplyError, ApplyErrorKind, DiffError, DiffErrorKind, MAX_LEN};
pub use options::DiffOptions;
pub use point::DiagonalPoint;
pub use script::{DiffResult, EditScript, Operation, OperationKind};
pub use sequence::{ByOrdering, Equivalence, NaturalEq, Sequence, Side};

/// Myers' O(ND) increasing-distance frontier search.
pub mod nd {
    pub use super::search_nd::{diff, path};
}

/// Wu's O(NP) increasing-one-sided-edits frontier search.
pub mod np {
    pub use super::search_np::{diff, path};
}

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // We expect that usize is at least 16 bits in width.
    const_assert!(usize::BITS >= 16);

    // Diagonals of both operands together (plus sentinels) fit in isize.
    const_assert!(MAX_LEN <= (isize::MAX as usize - 2) / 2);
    const_assert!(MAX_LEN > 0);
}

mod tests;
