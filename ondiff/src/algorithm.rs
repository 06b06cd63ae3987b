// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Selection of the diff engine.

use crate::error::{check_lengths, DiffError};
use crate::script::DiffResult;
use crate::sequence::{Equivalence, Sequence};
use crate::{search_nd, search_np};

#[cfg(test)]
mod tests;


/// The frontier search used to compute a diff.
///
/// Both engines compute a shortest edit script of the same length.
/// When several shortest scripts exist, they may choose different ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Myers' O(ND) search (see [`nd::diff()`](crate::nd::diff())).
    Nd,
    /// Wu's O(NP) search (see [`np::diff()`](crate::np::diff())).
    #[default]
    Np,
}

impl Algorithm {
    /// Computes the diff of `old` and `new` with this engine.
    ///
    /// # Errors
    ///
    /// Fails with [`DiffErrorKind::ExceedsIndexRange`](crate::DiffErrorKind::ExceedsIndexRange)
    /// if either operand is longer than [`MAX_LEN`](crate::MAX_LEN).
    ///
    /// # Examples
    ///
    /// ```
    /// use ondiff::{Algorithm, NaturalEq};
    ///
    /// let old = b"kitten";
    /// let new = b"sitting";
    /// for algorithm in [Algorithm::Nd, Algorithm::Np] {
    ///     let result = algorithm.diff(old, new, NaturalEq).unwrap();
    ///     assert_eq!(result.distance(), 5);
    ///     assert_eq!(result.lcs().len(), 4);
    /// }
    /// ```
    pub fn diff<A, B, T, E>(self, old: &A, new: &B, eq: E) -> Result<DiffResult<T>, DiffError>
    where
        A: Sequence<Item = T> + ?Sized,
        B: Sequence<Item = T> + ?Sized,
        T: Clone,
        E: Equivalence<T>,
    {
        check_lengths(old.len(), new.len(), None)?;
        Ok(self.run(old, new, &eq))
    }

    /// Runs the engine on operands with already checked lengths.
    pub(crate) fn run<A, B, T, E>(self, old: &A, new: &B, eq: &E) -> DiffResult<T>
    where
        A: Sequence<Item = T> + ?Sized,
        B: Sequence<Item = T> + ?Sized,
        T: Clone,
        E: Equivalence<T>,
    {
        match self { // grcov-excl-br-line:MATCH_ENUM
            Algorithm::Nd => search_nd::diff_internal(old, new, eq),
            Algorithm::Np => search_np::diff_internal(old, new, eq),
        }
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            Algorithm::Nd => "nd",
            Algorithm::Np => "np",
        })
    }
}
