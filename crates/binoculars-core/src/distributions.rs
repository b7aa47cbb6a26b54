//! Distribution primitives used by the interval methods
//!
//! The normal lookups are thin wrappers over `statrs`. The beta quantile
//! bisects a local regularized incomplete beta whose prefactor stays
//! accurate when both shapes are in the tens of millions, where the
//! `ln_gamma` differences inside `statrs::distribution::Beta::cdf` cancel.

use crate::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;
use tracing::trace;

/// Width below which the beta quantile bracket is considered converged
pub const QUANTILE_TOLERANCE: f64 = 1e-15;

/// Upper bound on bisection steps for the beta quantile
pub const MAX_BISECTIONS: usize = 128;

const CF_EPSILON: f64 = 1e-16;
const CF_TINY: f64 = 1e-300;

/// ln(sqrt(2π))
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| {
        Error::Distribution(format!("Failed to create normal distribution: {}", e))
    })
}

/// Upper-tail probability `P(Z > z)` of the standard normal distribution
///
/// Defined for every real `z`; NaN propagates.
pub fn normal_survival(z: f64) -> Result<f64> {
    Ok(standard_normal()?.sf(z))
}

/// Inverse CDF of the standard normal distribution
///
/// # Errors
/// Returns [`Error::InvalidParameter`] unless `q` lies in `(0, 1)`.
pub fn normal_quantile(q: f64) -> Result<f64> {
    if !(q > 0.0 && q < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "Normal quantile probability {q} must be in (0, 1)"
        )));
    }
    Ok(standard_normal()?.inverse_cdf(q))
}

/// Quantile (inverse CDF) of the Beta(`shape_a`, `shape_b`) distribution
///
/// A shape parameter of exactly zero is treated as a point mass: `shape_a == 0`
/// yields `0.0` and `shape_b == 0` yields `1.0`. Probabilities at or beyond the
/// ends of `[0, 1]` map to the support endpoints.
///
/// The value is found by bisection on [`beta_cdf`], which is monotone on the
/// unit interval, so the bracket always contains the answer.
///
/// # Errors
/// Returns [`Error::Distribution`] for negative, infinite or NaN shapes
/// (e.g. from a proportion above one).
pub fn beta_quantile(q: f64, shape_a: f64, shape_b: f64) -> Result<f64> {
    if shape_a == 0.0 {
        return Ok(0.0);
    }
    if shape_b == 0.0 {
        return Ok(1.0);
    }

    check_shapes(shape_a, shape_b)?;

    if q.is_nan() {
        return Ok(f64::NAN);
    }
    if q <= 0.0 {
        return Ok(0.0);
    }
    if q >= 1.0 {
        return Ok(1.0);
    }

    let mut low = 0.0_f64;
    let mut high = 1.0_f64;
    let mut steps = 0;
    while high - low > QUANTILE_TOLERANCE && steps < MAX_BISECTIONS {
        let mid = 0.5 * (low + high);
        if regularized_incomplete_beta(mid, shape_a, shape_b) >= q {
            high = mid;
        } else {
            low = mid;
        }
        steps += 1;
    }

    trace!(q, shape_a, shape_b, steps, "beta quantile converged");
    Ok(0.5 * (low + high))
}

/// CDF of the Beta(`shape_a`, `shape_b`) distribution at `x`
///
/// Values of `x` outside the unit interval are clamped to the support.
///
/// # Errors
/// Returns [`Error::Distribution`] unless both shapes are positive and finite.
pub fn beta_cdf(x: f64, shape_a: f64, shape_b: f64) -> Result<f64> {
    check_shapes(shape_a, shape_b)?;
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    Ok(regularized_incomplete_beta(x, shape_a, shape_b))
}

fn check_shapes(shape_a: f64, shape_b: f64) -> Result<()> {
    let valid = |s: f64| s > 0.0 && s.is_finite();
    if !(valid(shape_a) && valid(shape_b)) {
        return Err(Error::Distribution(format!(
            "Invalid Beta({shape_a}, {shape_b}) shape parameters: both must be positive and finite"
        )));
    }
    Ok(())
}

/// `I_x(a, b)` for positive finite shapes
fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // The continued fraction converges fast on the side below the mean
    if x < (a + 1.0) / (a + b + 2.0) {
        power_prefactor(x, a, b) * beta_continued_fraction(x, a, b) / a
    } else {
        1.0 - power_prefactor(1.0 - x, b, a) * beta_continued_fraction(1.0 - x, b, a) / b
    }
}

/// `x^a (1 - x)^b / B(a, b)`
///
/// Written relative to the mean `a / (a + b)` with Stirling corrections, so
/// no term grows with the shapes and nothing cancels when they are large.
fn power_prefactor(x: f64, a: f64, b: f64) -> f64 {
    let total = a + b;
    let mean = a / total;
    let rest = 1.0 - mean;
    let delta = x - mean;

    let log_a = if delta.abs() < 0.5 * mean {
        a * (delta / mean).ln_1p()
    } else {
        a * (x / mean).ln()
    };
    let log_b = if delta.abs() < 0.5 * rest {
        b * (-delta / rest).ln_1p()
    } else {
        b * ((1.0 - x) / rest).ln()
    };
    let correction = stirling_error(total) - stirling_error(a) - stirling_error(b);

    (a * b / (2.0 * PI * total)).sqrt() * (log_a + log_b + correction).exp()
}

/// `ln Γ(x) - [(x - ½) ln x - x + ln √(2π)]`
fn stirling_error(x: f64) -> f64 {
    if x >= 10.0 {
        let inv = 1.0 / x;
        let inv2 = inv * inv;
        inv * (1.0 / 12.0 - inv2 * (1.0 / 360.0 - inv2 * (1.0 / 1260.0 - inv2 / 1680.0)))
    } else {
        ln_gamma(x) - ((x - 0.5) * x.ln() - x + LN_SQRT_2PI)
    }
}

/// Continued fraction for the incomplete beta, modified Lentz evaluation
fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    // Terms needed grow like sqrt(max(a, b)) near the mean
    let max_iterations = 200 + (10.0 * a.max(b).sqrt()) as usize;
    let clamp = |v: f64| if v.abs() < CF_TINY { CF_TINY } else { v };

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 / clamp(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=max_iterations {
        let m = m as f64;
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        h *= d * c;

        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        let step = d * c;
        h *= step;

        if (step - 1.0).abs() < CF_EPSILON {
            return h;
        }
    }

    trace!(
        x,
        a,
        b,
        max_iterations,
        "beta continued fraction hit iteration limit"
    );
    h
}
