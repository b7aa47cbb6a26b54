//! Confidence intervals for binomial proportions
//!
//! Given an observed proportion `p` of successes over `n` trials and a
//! critical value `z`, this crate computes a two-sided interval or a single
//! bound with one of four methods:
//!
//! - **Jeffreys** (`"jeffrey"`): equal-tailed Bayesian interval, Beta(1/2, 1/2) prior
//! - **Wilson** (`"wilson"`): score interval, always inside `[0, 1]`
//! - **Normal** (`"normal"`): Wald interval, may leave `[0, 1]` near the edges
//! - **Clopper-Pearson** (`"clopper-pearson"`): exact interval from beta quantiles
//!
//! The beta-based methods read their bounds at `alpha / 2` and
//! `1 - alpha / 2` with `alpha = 2 P(Z > z)`, so `z = 1.96` gives the usual
//! two-sided 95% interval for every method.
//!
//! # Examples
//!
//! ```rust
//! use binoculars_confidence::{BinomialConfidence, ConfidenceLevel, IntervalMethod};
//!
//! let settings = BinomialConfidence::new(IntervalMethod::ClopperPearson)
//!     .with_confidence_level(ConfidenceLevel::NINETY_NINE)
//!     .unwrap();
//!
//! let ci = settings.interval(0.2, 50.0).unwrap();
//! assert!(ci.contains(0.2));
//! println!("{}", ci);
//! ```

pub mod api;
mod batch;
pub mod clopper_pearson;
pub mod jeffreys;
mod method;
pub mod normal;
mod types;
pub mod wilson;

// Re-exports
pub use api::{binomial_confidence, BinomialConfidence, DEFAULT_Z};
pub use binoculars_core::{Error, Result};
pub use method::IntervalMethod;
pub use types::{BinomialInterval, Confidence, ConfidenceLevel, Tail};
