// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

#![cfg(feature = "easy-functions")]

use alloc::vec::Vec;

use crate::algorithm::Algorithm;
use crate::error::DiffError;
use crate::script::DiffResult;
use crate::sequence::NaturalEq;



/// Compares two slices with [`PartialEq`] and the default engine.
///
/// # Example
///
/// ```
/// let result = ondiff::diff_slices(&[1, 2, 3, 4], &[0, 1, 2, 4]).unwrap();
/// assert_eq!(result.distance(), 2);
/// assert_eq!(result.lcs(), &[1, 2, 4]);
/// ```
pub fn diff_slices<T: Clone + PartialEq>(old: &[T], new: &[T]) -> Result<DiffResult<T>, DiffError> {
    Algorithm::default().diff(old, new, NaturalEq)
}

/// Compares two strings [`char`] by [`char`].
///
/// Strings are decomposed into Unicode scalar values, not bytes nor
/// grapheme clusters.
///
/// # Example
///
/// ```
/// let result = ondiff::diff_chars("abcabba", "cbabac").unwrap();
/// assert_eq!(result.distance(), 5);
/// assert_eq!(result.lcs().len(), 4);
/// ```
pub fn diff_chars(old: &str, new: &str) -> Result<DiffResult<char>, DiffError> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    Algorithm::default().diff(&old, &new, NaturalEq)
}

/// Compares two lists of strings with string equality.
///
/// The elements of the result borrow from `new`
/// (or from `old` for deleted elements).
///
/// # Example
///
/// ```
/// let old = ["fn", "main", "(", ")"];
/// let new = vec![String::from("fn"), String::from("run"), String::from("("), String::from(")")];
/// let result = ondiff::diff_strs(&old, &new).unwrap();
/// assert_eq!(result.distance(), 2);
/// assert_eq!(result.lcs(), &["fn", "(", ")"]);
/// ```
pub fn diff_strs<'a, S1, S2>(old: &'a [S1], new: &'a [S2]) -> Result<DiffResult<&'a str>, DiffError>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let old: Vec<&'a str> = old.iter().map(|s| s.as_ref()).collect();
    let new: Vec<&'a str> = new.iter().map(|s| s.as_ref()).collect();
    Algorithm::default().diff(&old, &new, NaturalEq)
}

/// Compares two texts line by line.
///
/// Each line keeps its terminator (`"\n"` or `"\r\n"`), so a final line
/// without a terminator differs from the same line with one.
///
/// # Example
///
/// ```
/// let result = ondiff::diff_lines("a\nb\nc\n", "a\nc\nd\n").unwrap();
/// assert_eq!(result.distance(), 2);
/// assert_eq!(result.lcs(), &["a\n", "c\n"]);
/// ```
pub fn diff_lines<'a>(old: &'a str, new: &'a str) -> Result<DiffResult<&'a str>, DiffError> {
    let old: Vec<&'a str> = old.split_inclusive('\n').collect();
    let new: Vec<&'a str> = new.split_inclusive('\n').collect();
    Algorithm::default().diff(&old, &new, NaturalEq)
}
