//! Common types for binomial confidence intervals

use crate::IntervalMethod;
use binoculars_core::{normal_quantile, normal_survival, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which bound of an interval to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tail {
    Lower,
    Upper,
}

impl Tail {
    /// Both tails, lower first
    pub const BOTH: [Tail; 2] = [Tail::Lower, Tail::Upper];

    /// The key used by the string-keyed API
    pub fn as_str(&self) -> &'static str {
        match self {
            Tail::Lower => "lower",
            Tail::Upper => "upper",
        }
    }
}

impl FromStr for Tail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower" => Ok(Tail::Lower),
            "upper" => Ok(Tail::Upper),
            other => Err(Error::InvalidTail(other.to_string())),
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A two-sided confidence interval for a binomial proportion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Observed proportion the interval was built around
    pub proportion: f64,
    /// Number of trials
    pub n: f64,
    /// Critical value used
    pub z: f64,
    /// Method that produced the bounds
    pub method: IntervalMethod,
}

impl BinomialInterval {
    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &BinomialInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Two-sided confidence level implied by `z`, i.e. `1 - 2 * P(Z > z)`
    pub fn confidence_level(&self) -> Result<f64> {
        Ok(1.0 - 2.0 * normal_survival(self.z)?)
    }
}

impl From<BinomialInterval> for (f64, f64) {
    fn from(interval: BinomialInterval) -> Self {
        (interval.lower, interval.upper)
    }
}

impl fmt::Display for BinomialInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI (z = {}): [{:.4}, {:.4}], p = {}, n = {}",
            self.method, self.z, self.lower, self.upper, self.proportion, self.n
        )
    }
}

/// Result of a dispatch: one bound when a tail was requested, both otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    Bound(f64),
    Interval(BinomialInterval),
}

impl Confidence {
    /// The single bound, if one tail was requested
    pub fn bound(&self) -> Option<f64> {
        match self {
            Confidence::Bound(value) => Some(*value),
            Confidence::Interval(_) => None,
        }
    }

    /// The full interval, if no tail was requested
    pub fn interval(&self) -> Option<&BinomialInterval> {
        match self {
            Confidence::Bound(_) => None,
            Confidence::Interval(interval) => Some(interval),
        }
    }

    /// `(lower, upper)`, if no tail was requested
    pub fn into_pair(self) -> Option<(f64, f64)> {
        match self {
            Confidence::Bound(_) => None,
            Confidence::Interval(interval) => Some(interval.into()),
        }
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if level is not in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Two-sided critical value `z` such that `P(Z > z) = alpha / 2`
    pub fn critical_value(&self) -> Result<f64> {
        normal_quantile(1.0 - self.tail_probability())
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
