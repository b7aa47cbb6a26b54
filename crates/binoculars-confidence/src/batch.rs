//! Slice-at-a-time interval computation
//!
//! Each element is independent; with the `parallel` feature the elements are
//! spread across the rayon thread pool.

use crate::{BinomialConfidence, BinomialInterval, Tail};
use binoculars_core::{Error, Result};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl BinomialConfidence {
    /// Intervals for each `(proportions[i], sizes[i])` pair
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the slices differ in length, otherwise the
    /// first error produced by any element.
    pub fn intervals(&self, proportions: &[f64], sizes: &[f64]) -> Result<Vec<BinomialInterval>> {
        check_lengths(proportions, sizes)?;
        debug!(
            method = %self.method(),
            len = proportions.len(),
            "computing batch of intervals"
        );

        map_pairs(proportions, sizes, |p, n| self.interval(p, n))
    }

    /// One bound for each `(proportions[i], sizes[i])` pair
    pub fn bounds(&self, proportions: &[f64], sizes: &[f64], tail: Tail) -> Result<Vec<f64>> {
        check_lengths(proportions, sizes)?;

        map_pairs(proportions, sizes, |p, n| self.bound(p, n, tail))
    }
}

#[cfg(feature = "parallel")]
fn map_pairs<T, F>(proportions: &[f64], sizes: &[f64], f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(f64, f64) -> Result<T> + Sync + Send,
{
    proportions
        .par_iter()
        .zip(sizes.par_iter())
        .map(|(&p, &n)| f(p, n))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn map_pairs<T, F>(proportions: &[f64], sizes: &[f64], f: F) -> Result<Vec<T>>
where
    F: Fn(f64, f64) -> Result<T>,
{
    proportions
        .iter()
        .zip(sizes)
        .map(|(&p, &n)| f(p, n))
        .collect()
}

fn check_lengths(proportions: &[f64], sizes: &[f64]) -> Result<()> {
    if proportions.len() != sizes.len() {
        return Err(Error::size_mismatch(
            proportions.len(),
            sizes.len(),
            "sample sizes",
        ));
    }
    Ok(())
}
