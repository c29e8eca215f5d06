// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision where `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f64 comparisons of values that should be "exactly
/// equal" but may carry rounding error.
pub const F64_EPSILON: f64 = 1e-10;
