// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Tests: [`crate`].

#![cfg(test)]

#[cfg(not(ondiff_tests_without_debug_assertions))]
#[test]
fn test_prerequisites() {
    assert!(cfg!(debug_assertions), "\
        The tests in this crate require debug assertions to be enabled (by default).  \
        To test this crate without debug assertions, add rustc flags \"--cfg ondiff_tests_without_debug_assertions\".\
    ");
}

#[test]
fn engine_modules_agree_with_algorithm() {
    use crate::{nd, np, Algorithm, NaturalEq};
    let old = [3, 1, 4, 1, 5, 9, 2, 6];
    let new = [2, 7, 1, 8, 2, 8, 1, 8];
    assert_eq!(
        nd::diff(&old, &new, NaturalEq),
        Algorithm::Nd.diff(&old, &new, NaturalEq)
    );
    assert_eq!(
        np::diff(&old, &new, NaturalEq),
        Algorithm::Np.diff(&old, &new, NaturalEq)
    );
}
