//! Core types for binomial confidence intervals
//!
//! This crate holds the pieces shared by every interval method:
//!
//! - [`Error`] and [`Result`], the unified error type
//! - [`distributions`], the standard normal and beta lookups the interval
//!   formulas are written in terms of
//!
//! # Example
//!
//! ```rust
//! use binoculars_core::distributions::{beta_quantile, normal_survival};
//!
//! let tail = normal_survival(1.96).unwrap();
//! assert!((tail - 0.025).abs() < 1e-4);
//!
//! // Median of a symmetric beta distribution
//! let median = beta_quantile(0.5, 3.0, 3.0).unwrap();
//! assert!((median - 0.5).abs() < 1e-12);
//! ```

pub mod distributions;
pub mod error;

// Re-export core types
pub use distributions::{beta_cdf, beta_quantile, normal_quantile, normal_survival};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
