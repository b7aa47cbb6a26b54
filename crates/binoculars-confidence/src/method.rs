//! The closed set of interval methods and the dispatch between them

use crate::{clopper_pearson, jeffreys, normal, wilson, Tail};
use binoculars_core::{normal_survival, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Approximation family used to build an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalMethod {
    /// Bayesian interval under the Beta(1/2, 1/2) prior
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "jeffrey"))]
    Jeffreys,
    /// Score interval
    #[cfg_attr(feature = "serde", serde(rename = "wilson"))]
    Wilson,
    /// Wald interval; may leave `[0, 1]`
    #[cfg_attr(feature = "serde", serde(rename = "normal"))]
    Normal,
    /// Exact interval from beta quantiles
    #[cfg_attr(feature = "serde", serde(rename = "clopper-pearson"))]
    ClopperPearson,
}

impl IntervalMethod {
    /// Every method, in key order
    pub const ALL: [IntervalMethod; 4] = [
        IntervalMethod::Jeffreys,
        IntervalMethod::Wilson,
        IntervalMethod::Normal,
        IntervalMethod::ClopperPearson,
    ];

    /// The key used by the string-keyed API
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalMethod::Jeffreys => "jeffrey",
            IntervalMethod::Wilson => "wilson",
            IntervalMethod::Normal => "normal",
            IntervalMethod::ClopperPearson => "clopper-pearson",
        }
    }

    /// Whether the bounds come from beta quantiles
    pub fn uses_beta_quantile(&self) -> bool {
        matches!(
            self,
            IntervalMethod::Jeffreys | IntervalMethod::ClopperPearson
        )
    }

    /// Compute one bound of the interval for proportion `p` over `n` trials
    ///
    /// Numeric edge cases are not intercepted: the Normal method can return
    /// values outside `[0, 1]`, and degenerate inputs propagate NaN.
    ///
    /// # Errors
    /// Only the beta-based methods can fail, when the derived shape
    /// parameters are rejected (e.g. `p > 1`).
    pub fn bound(&self, p: f64, n: f64, tail: Tail, z: f64) -> Result<f64> {
        match self {
            IntervalMethod::Jeffreys => jeffreys::bound(p, n, tail, z),
            IntervalMethod::Wilson => Ok(wilson::bound(p, n, tail, z)),
            IntervalMethod::Normal => Ok(normal::bound(p, n, tail, z)),
            IntervalMethod::ClopperPearson => clopper_pearson::bound(p, n, tail, z),
        }
    }
}

impl FromStr for IntervalMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IntervalMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| Error::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for IntervalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Beta CDF level at which a bound is read off
///
/// The two-sided tail mass is `alpha = 2 P(Z > z)`; the lower bound sits at
/// `alpha / 2` and the upper at `1 - alpha / 2`. Jeffreys and Clopper-Pearson
/// both go through here so they always split alpha the same way.
pub(crate) fn beta_tail_probability(tail: Tail, z: f64) -> Result<f64> {
    let alpha = 2.0 * normal_survival(z)?;
    Ok(match tail {
        Tail::Lower => alpha / 2.0,
        Tail::Upper => 1.0 - alpha / 2.0,
    })
}
