// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors
// grcov-excl-br-start

#![cfg(test)]

use crate::algorithm::Algorithm;
use crate::error::{DiffError, DiffErrorKind, MAX_LEN};
use crate::sequence::{ByOrdering, NaturalEq, Sequence, Side};
use crate::test_utils::{
    all_sequences, check_result, check_result_natural, lcs_distance, test_auto_clone,
    test_auto_debug_for_enum, FIXED_CASES,
};


/// Both engines.
const ALGORITHMS: [Algorithm; 2] = [Algorithm::Nd, Algorithm::Np];


#[test]
fn algorithm_impls() {
    test_auto_clone::<Algorithm>(&Algorithm::Nd);
    test_auto_debug_for_enum!(Algorithm, [Nd, Np]);
    assert_eq!(Algorithm::default(), Algorithm::Np);
    assert_eq!(format!("{}", Algorithm::Nd), "nd");
    assert_eq!(format!("{}", Algorithm::Np), "np");
}

#[test]
fn fixed_cases() {
    for algorithm in ALGORITHMS {
        for case in FIXED_CASES {
            let result = algorithm.diff(case.old, case.new, NaturalEq).unwrap();
            assert_eq!(result.distance(), case.distance, "{} ({})", case.name, algorithm);
            assert_eq!(result.lcs(), case.lcs, "{} ({})", case.name, algorithm);
        }
    }
}

#[test]
fn exhaustive_small_sequences() {
    #[cfg(not(feature = "tests-slow"))]
    const MAX_LEN_TESTED: usize = 4;
    #[cfg(feature = "tests-slow")]
    const MAX_LEN_TESTED: usize = 6;
    let all = all_sequences(3, MAX_LEN_TESTED);
    for old in &all {
        for new in &all {
            let mut lcs_len = None;
            for algorithm in ALGORITHMS {
                let result = algorithm.diff(old, new, NaturalEq).unwrap();
                check_result_natural(old, new, &result);
                // Both engines find common subsequences of the same length.
                assert_eq!(*lcs_len.get_or_insert(result.lcs().len()), result.lcs().len());
                // The inverted script turns `new` back into `old`.
                let backward = result.script().clone().invert();
                assert_eq!(backward.apply(new, NaturalEq).unwrap(), *old);
            }
        }
    }
}

#[test]
fn exhaustive_custom_equivalence() {
    // Equivalence classes: {0, 2} and {1, 3}.
    let parity = |old: &u8, new: &u8| old % 2 == new % 2;
    let all = all_sequences(4, 3);
    for old in &all {
        for new in &all {
            for algorithm in ALGORITHMS {
                let result = algorithm.diff(old, new, parity).unwrap();
                check_result(old, new, &parity, &result);
            }
        }
    }
}

#[test]
fn comparator_equivalence() {
    let words_old = ["Alpha", "beta", "Gamma", "delta"];
    let words_new = ["alpha", "Gamma", "DELTA", "epsilon"];
    let by_lowercase = ByOrdering(|a: &&str, b: &&str| {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    });
    for algorithm in ALGORITHMS {
        let result = algorithm.diff(&words_old, &words_new, by_lowercase).unwrap();
        assert_eq!(result.distance(), 2);
        assert_eq!(result.lcs(), &["alpha", "Gamma", "DELTA"]);
        assert_eq!(
            result.distance(),
            lcs_distance(&words_old, &words_new, &|a: &&str, b: &&str| a.eq_ignore_ascii_case(b))
        );
    }
}

#[test]
fn long_sequences() {
    // Inserting every tenth element and deleting every seventh one.
    let old: alloc::vec::Vec<u32> = (0..2000).filter(|x| x % 7 != 0).collect();
    let new: alloc::vec::Vec<u32> = (0..2000).map(|x| if x % 10 == 0 { x + 5000 } else { x }).collect();
    let mut distances = alloc::vec::Vec::new();
    for algorithm in ALGORITHMS {
        let result = algorithm.diff(&old, &new, NaturalEq).unwrap();
        let script = result.script();
        assert_eq!(script.apply(&old, NaturalEq).unwrap(), new);
        assert_eq!(result.distance() + 2 * result.lcs().len(), old.len() + new.len());
        distances.push(result.distance());
    }
    assert_eq!(distances[0], distances[1]);
}


/// A sequence too long to diff (never indexed).
struct Huge;

impl Sequence for Huge {
    type Item = u8;
    fn len(&self) -> usize { MAX_LEN + 1 }
    fn item(&self, _index: usize) -> &u8 { unreachable!() }
}

#[test]
fn too_long() {
    for algorithm in ALGORITHMS {
        assert_eq!(
            algorithm.diff(&[0u8], &Huge, NaturalEq),
            Err(DiffError(DiffErrorKind::ExceedsIndexRange, Side::New, MAX_LEN + 1))
        );
    }
}
