//! Confidence intervals for binomial proportions
//!
//! Facade over the binoculars crates:
//!
//! - [`binoculars_core`]: error type and the normal/beta distribution primitives
//! - [`binoculars_confidence`]: the Jeffreys, Wilson, Normal and Clopper-Pearson
//!   intervals and the dispatcher that selects between them
//!
//! # Example
//!
//! ```rust
//! use binoculars::prelude::*;
//!
//! let ci = BinomialConfidence::new(IntervalMethod::Jeffreys)
//!     .interval(0.5, 100.0)
//!     .unwrap();
//! assert!(ci.lower < 0.5 && 0.5 < ci.upper);
//!
//! let upper = binomial_confidence(0.5, 100.0, Some("upper"), DEFAULT_Z, "jeffrey")
//!     .unwrap()
//!     .bound()
//!     .unwrap();
//! assert_eq!(upper, ci.upper);
//! ```

pub use binoculars_confidence;
pub use binoculars_core;

pub use binoculars_confidence::{
    binomial_confidence, BinomialConfidence, BinomialInterval, Confidence, ConfidenceLevel,
    IntervalMethod, Tail, DEFAULT_Z,
};
pub use binoculars_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        binomial_confidence, BinomialConfidence, BinomialInterval, Confidence, ConfidenceLevel,
        Error, IntervalMethod, Result, Tail, DEFAULT_Z,
    };
}
