//! Normal (Wald) approximation interval
//!
//! `p ± z * sqrt(p (1 - p) / n)`. Bounds can fall outside `[0, 1]` near the
//! edges of the unit interval; they are returned as computed.

use crate::Tail;

/// One bound of the Wald interval
pub fn bound(p: f64, n: f64, tail: Tail, z: f64) -> f64 {
    let se = (p * (1.0 - p) / n).sqrt();
    match tail {
        Tail::Lower => p - z * se,
        Tail::Upper => p + z * se,
    }
}
