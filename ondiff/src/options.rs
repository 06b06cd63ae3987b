// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Runtime configuration of a diff.

use crate::algorithm::Algorithm;
use crate::error::{check_lengths, DiffError};
use crate::script::DiffResult;
use crate::sequence::{Equivalence, Sequence};
use crate::tracing_macros::debug;



/// Options of a diff: the engine and an optional length limit.
///
/// Both searches may allocate memory proportional to the operand lengths
/// times the edit distance.  When operands come from untrusted sources,
/// bound them with [`max_len()`](Self::max_len()) before searching.
///
/// # Examples
///
/// ```
/// use ondiff::{Algorithm, DiffErrorKind, DiffOptions, NaturalEq, Side};
///
/// let options = DiffOptions::new().algorithm(Algorithm::Nd).max_len(4);
/// let result = options.diff(&[1, 2, 3], &[1, 3], NaturalEq).unwrap();
/// assert_eq!(result.distance(), 1);
///
/// let err = options.diff(&[1, 2], &[1, 2, 3, 4, 5], NaturalEq).unwrap_err();
/// assert_eq!(err.kind(), DiffErrorKind::ExceedsLimit);
/// assert_eq!(err.side(), Side::New);
/// assert_eq!(err.length(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffOptions {
    /// The engine.
    algorithm: Algorithm,
    /// The maximum length of each operand (if any).
    max_len: Option<usize>,
}

impl DiffOptions {
    /// Creates the default options: [`Algorithm::Np`] and no length limit.
    pub const fn new() -> Self {
        DiffOptions { algorithm: Algorithm::Np, max_len: None }
    }

    /// Selects the engine.
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Limits the length of each operand.
    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Removes the length limit.
    ///
    /// Operands are still bounded by [`MAX_LEN`](crate::MAX_LEN).
    pub const fn unlimited(mut self) -> Self {
        self.max_len = None;
        self
    }

    /// Returns the selected engine.
    #[inline]
    pub const fn get_algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the length limit (if any).
    #[inline]
    pub const fn get_max_len(&self) -> Option<usize> { self.max_len }

    /// Computes the diff of `old` and `new` with these options.
    ///
    /// # Errors
    ///
    /// Fails before searching if either operand exceeds the length limit
    /// ([`DiffErrorKind::ExceedsLimit`](crate::DiffErrorKind::ExceedsLimit))
    /// or [`MAX_LEN`](crate::MAX_LEN)
    /// ([`DiffErrorKind::ExceedsIndexRange`](crate::DiffErrorKind::ExceedsIndexRange)).
    /// The old operand is checked first.
    pub fn diff<A, B, T, E>(&self, old: &A, new: &B, eq: E) -> Result<DiffResult<T>, DiffError>
    where
        A: Sequence<Item = T> + ?Sized,
        B: Sequence<Item = T> + ?Sized,
        T: Clone,
        E: Equivalence<T>,
    {
        if let Err(err) = check_lengths(old.len(), new.len(), self.max_len) {
            debug!(%err, "diff rejected");
            return Err(err);
        }
        Ok(self.algorithm.run(old, new, &eq))
    }
}

impl Default for DiffOptions {
    fn default() -> Self { Self::new() }
}
