// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");

    // Declare custom cfgs (only understood by Cargo 1.80 or later).
    if rustc::is_min_version("1.80.0").unwrap_or(false) {
        println!("cargo:rustc-check-cfg=cfg(ondiff_assume, values(\"stable\", \"fallback\"))");
        println!("cargo:rustc-check-cfg=cfg(ondiff_error_in_core, values(\"stable\", \"fallback\"))");
        println!("cargo:rustc-check-cfg=cfg(ondiff_tests_without_debug_assertions)");
    }

    // Function: core::hint::assert_unchecked
    // unreachable_unchecked fallback: 1.27-1.80
    //             assert_unchecked: 1.81-     (stable)
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=ondiff_assume=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=ondiff_assume=\"fallback\"");
    }

    // Trait: core::error::Error
    // (std::error::Error only): 1.0-1.80
    //          core::error::Error: 1.81-     (stable)
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=ondiff_error_in_core=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=ondiff_error_in_core=\"fallback\"");
    }
}
