// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Internal macros (mainly to share safe/unsafe code).

/// "Optionally" unsafe block.
///
/// When this crate is built with the `unsafe` feature, this macro is
/// expanded to an `unsafe` block.
///
/// Inside this block, you may place [`invariant!()`] so that bounds of
/// edit graph coordinates become optimizer hints on the `unsafe` build.
///
/// ```ignore
/// # // Internal macro: doctests are external to this crate.
/// // let x: isize = ... (but proven to be inside the shorter sequence).
/// optionally_unsafe! {
///     invariant!(x >= 0 && (x as usize) < short.len());
/// }
/// // Bound checking may be optimized out.
/// let item = short.item(x as usize);
/// ```
#[doc(alias = "optionally_unsafe")]
macro_rules! optionally_unsafe_impl {
    {$($tokens: tt)*} => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "unsafe")] {
                unsafe { $($tokens)* }
            }
            else {
                { $($tokens)* }
            }
        }
    };
}
pub(crate) use optionally_unsafe_impl as optionally_unsafe;

/// Declare an invariant of the frontier search.
///
/// Without the `unsafe` feature, this is a [`debug_assert!()`].
/// With `unsafe`, it turns into [`core::hint::assert_unchecked()`]
/// (Rust 1.81 or later) or a branch to
/// [`core::hint::unreachable_unchecked()`] (older Rust).
///
/// Optimization behaviors are disabled on tests.
///
/// Use this macro inside [`optionally_unsafe!{}`].
#[doc(alias = "invariant")]
macro_rules! invariant_impl {
    ($expr: expr) => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", ondiff_assume = "stable", not(test)))] {
                #[allow(clippy::incompatible_msrv)] {
                    core::hint::assert_unchecked($expr);
                }
            }
            else if #[cfg(all(feature = "unsafe", not(test)))] {
                if !($expr) {
                    core::hint::unreachable_unchecked();
                }
            }
            else {
                debug_assert!($expr);
            }
        }
    };
}
pub(crate) use invariant_impl as invariant;

/// Implements [`Error`](std::error::Error) trait either in `std` or `core`.
///
/// `core::error::Error` is only used when `std` is disabled and the
/// compiler is new enough to provide it.
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        #[cfg(feature = "std")]
        impl std::error::Error for $type {
            $($tokens)*
        }
        #[cfg(all(not(feature = "std"), ondiff_error_in_core = "stable"))]
        #[allow(clippy::incompatible_msrv)]
        impl core::error::Error for $type {
            $($tokens)*
        }
    }
}
pub(crate) use impl_error_impl as impl_error;
