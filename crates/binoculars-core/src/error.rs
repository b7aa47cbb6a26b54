//! Error types for binomial confidence intervals
//!
//! Provides a unified error type for all binoculars crates.

use thiserror::Error;

/// Core error type for interval computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested tail is neither `lower` nor `upper`
    #[error("Invalid tail '{0}'! Choose from: lower, upper")]
    InvalidTail(String),

    /// Requested method is not one of the known keys
    #[error("Invalid method '{0}'! Choose from: jeffrey, wilson, normal, clopper-pearson")]
    InvalidMethod(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A distribution could not be constructed from the derived parameters
    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is one of the argument-validation failures of the dispatcher
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidTail(_) | Self::InvalidMethod(_))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
