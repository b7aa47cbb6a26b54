//! High-level API for binomial confidence intervals
//!
//! [`BinomialConfidence`] carries the two settings of a computation (critical
//! value and method) and [`binomial_confidence`] is the string-keyed entry
//! point that validates its arguments before dispatching.

use crate::{BinomialInterval, Confidence, ConfidenceLevel, IntervalMethod, Tail};
use binoculars_core::Result;
use tracing::debug;

/// Default critical value, two-sided 95%
pub const DEFAULT_Z: f64 = 1.96;

/// Settings for computing binomial confidence intervals
///
/// # Example
/// ```rust
/// use binoculars_confidence::{BinomialConfidence, IntervalMethod, Tail};
///
/// let wilson = BinomialConfidence::new(IntervalMethod::Wilson);
/// let ci = wilson.interval(0.5, 100.0).unwrap();
/// assert!(ci.lower > 0.35 && ci.lower < 0.5);
///
/// let upper = wilson.with_z(2.58).bound(0.5, 100.0, Tail::Upper).unwrap();
/// assert!(upper > ci.upper);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialConfidence {
    z: f64,
    method: IntervalMethod,
}

impl Default for BinomialConfidence {
    fn default() -> Self {
        Self {
            z: DEFAULT_Z,
            method: IntervalMethod::default(),
        }
    }
}

impl BinomialConfidence {
    /// Use `method` with the default critical value
    pub fn new(method: IntervalMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Set the critical value
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Set the method
    pub fn with_method(mut self, method: IntervalMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the critical value from a two-sided confidence level
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Result<Self> {
        self.z = level.critical_value()?;
        Ok(self)
    }

    /// Critical value in use
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Method in use
    pub fn method(&self) -> IntervalMethod {
        self.method
    }

    /// A single bound for proportion `p` over `n` trials
    pub fn bound(&self, p: f64, n: f64, tail: Tail) -> Result<f64> {
        self.method.bound(p, n, tail, self.z)
    }

    /// Both bounds for proportion `p` over `n` trials
    pub fn interval(&self, p: f64, n: f64) -> Result<BinomialInterval> {
        Ok(BinomialInterval {
            lower: self.bound(p, n, Tail::Lower)?,
            upper: self.bound(p, n, Tail::Upper)?,
            proportion: p,
            n,
            z: self.z,
            method: self.method,
        })
    }

    /// A single bound when `tail` is given, the whole interval otherwise
    pub fn compute(&self, p: f64, n: f64, tail: Option<Tail>) -> Result<Confidence> {
        debug!(
            method = %self.method,
            tail = tail.map(|t| t.as_str()).unwrap_or("both"),
            z = self.z,
            p,
            n,
            "computing binomial confidence"
        );
        match tail {
            Some(tail) => self.bound(p, n, tail).map(Confidence::Bound),
            None => self.interval(p, n).map(Confidence::Interval),
        }
    }
}

/// Return a confidence interval, or one bound of it, for a binomial proportion
///
/// # Arguments
/// * `p` - Observed proportion of successes
/// * `n` - Number of trials
/// * `tail` - `"lower"` or `"upper"` for a single bound, `None` for both
/// * `z` - Critical value, [`DEFAULT_Z`] for a two-sided 95% interval
/// * `method` - One of `"jeffrey"`, `"wilson"`, `"normal"`, `"clopper-pearson"`
///
/// # Errors
/// [`Error::InvalidTail`](binoculars_core::Error::InvalidTail) for an unknown
/// tail, checked first, then
/// [`Error::InvalidMethod`](binoculars_core::Error::InvalidMethod) for an
/// unknown method.
///
/// # Example
/// ```rust
/// use binoculars_confidence::{binomial_confidence, DEFAULT_Z};
///
/// let (lower, upper) = binomial_confidence(0.5, 100.0, None, DEFAULT_Z, "wilson")
///     .unwrap()
///     .into_pair()
///     .unwrap();
/// assert!(lower < 0.5 && 0.5 < upper);
///
/// let lower_only = binomial_confidence(0.5, 100.0, Some("lower"), DEFAULT_Z, "wilson")
///     .unwrap()
///     .bound()
///     .unwrap();
/// assert_eq!(lower_only, lower);
/// ```
pub fn binomial_confidence(
    p: f64,
    n: f64,
    tail: Option<&str>,
    z: f64,
    method: &str,
) -> Result<Confidence> {
    let tail = tail.map(str::parse::<Tail>).transpose()?;
    let method = method.parse::<IntervalMethod>()?;
    BinomialConfidence::new(method).with_z(z).compute(p, n, tail)
}
