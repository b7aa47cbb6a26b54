//! Jeffreys interval
//!
//! Equal-tailed Bayesian interval from the Beta(1/2, 1/2) prior. With `k = n p`
//! successes the posterior is Beta(k + 1/2, n - k + 1/2).

use crate::method::beta_tail_probability;
use crate::Tail;
use binoculars_core::{beta_quantile, Result};
use tracing::trace;

/// Shape parameters of the Jeffreys prior
pub const JEFFREYS_PRIOR: f64 = 0.5;

/// One bound of the Jeffreys interval
pub fn bound(p: f64, n: f64, tail: Tail, z: f64) -> Result<f64> {
    let shape_a = n * p + JEFFREYS_PRIOR;
    let shape_b = n - n * p + JEFFREYS_PRIOR;
    let q = beta_tail_probability(tail, z)?;
    trace!(%tail, q, shape_a, shape_b, "jeffreys posterior");
    beta_quantile(q, shape_a, shape_b)
}
