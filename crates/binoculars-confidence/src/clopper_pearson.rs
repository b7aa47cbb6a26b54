//! Clopper-Pearson ("exact") interval
//!
//! The success count is reconstructed as `k = p n`; non-integer counts are
//! passed straight through to the beta shapes.

use crate::method::beta_tail_probability;
use crate::Tail;
use binoculars_core::{beta_quantile, Result};
use tracing::trace;

/// One bound of the Clopper-Pearson interval
///
/// With no successes the lower bound is exactly `0.0`, and with no failures
/// the upper bound is exactly `1.0` (zero beta shape, see
/// [`beta_quantile`]).
pub fn bound(p: f64, n: f64, tail: Tail, z: f64) -> Result<f64> {
    let k = p * n;
    let (shape_a, shape_b) = match tail {
        Tail::Lower => (k, n - k + 1.0),
        Tail::Upper => (k + 1.0, n - k),
    };
    let q = beta_tail_probability(tail, z)?;
    trace!(%tail, q, shape_a, shape_b, "clopper-pearson shapes");
    beta_quantile(q, shape_a, shape_b)
}
