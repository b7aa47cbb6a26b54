//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use binoculars_confidence::{binomial_confidence, IntervalMethod};

/// Absolute tolerance for values pinned against the high-precision reference
pub const GOLDEN_EPSILON: f64 = 1e-9;

/// Sample sizes every method is exercised on
pub const SIZES: [f64; 5] = [5.0, 1e2, 1e3, 1e5, 1e8];

/// Proportions near both edges and at the center
pub const PROPORTIONS: [f64; 3] = [0.01, 0.5, 0.99];

/// `(lower, upper)` through the string-keyed entry point
pub fn pair(p: f64, n: f64, z: f64, method: IntervalMethod) -> (f64, f64) {
    binomial_confidence(p, n, None, z, method.as_str())
        .unwrap()
        .into_pair()
        .unwrap()
}

/// Single bound through the string-keyed entry point
pub fn single(p: f64, n: f64, z: f64, tail: &str, method: IntervalMethod) -> f64 {
    binomial_confidence(p, n, Some(tail), z, method.as_str())
        .unwrap()
        .bound()
        .unwrap()
}
