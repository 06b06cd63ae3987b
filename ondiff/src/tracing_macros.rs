// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 The ondiff Authors

//! Diagnostic macros that compile to nothing unless
//! the `tracing` feature is enabled.

/// Emit a trace-level event (one per search round).
#[cfg(feature = "tracing")]
macro_rules! trace_impl {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

/// Emit a trace-level event (no-op version).
#[cfg(not(feature = "tracing"))]
macro_rules! trace_impl {
    ($($arg:tt)*) => {};
}

/// Emit a debug-level event (search and assembly summaries).
#[cfg(feature = "tracing")]
macro_rules! debug_impl {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Emit a debug-level event (no-op version).
#[cfg(not(feature = "tracing"))]
macro_rules! debug_impl {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_impl as debug;
pub(crate) use trace_impl as trace;
