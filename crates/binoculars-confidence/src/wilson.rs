//! Wilson score interval

use crate::Tail;

/// One bound of the Wilson score interval
///
/// Stays within `[0, 1]` for proportions in `[0, 1]`, unlike the Wald interval.
pub fn bound(p: f64, n: f64, tail: Tail, z: f64) -> f64 {
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = p + z2 / (2.0 * n);
    let spread = z * ((p * (1.0 - p) + z2 / (4.0 * n)) / n).sqrt();
    match tail {
        Tail::Lower => (center - spread) / denom,
        Tail::Upper => (center + spread) / denom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        assert_relative_eq!(
            bound(0.5, 100.0, Tail::Lower, 1.96),
            0.403829828590147,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            bound(0.5, 100.0, Tail::Upper, 1.96),
            0.596170171409853,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            bound(0.1, 10.0, Tail::Lower, 1.96),
            0.0178757495157212,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            bound(0.1, 10.0, Tail::Upper, 1.96),
            0.404156385497572,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_pulled_toward_half() {
        // Center of the score interval is shrunk toward 0.5
        let lower = bound(0.1, 10.0, Tail::Lower, 1.96);
        let upper = bound(0.1, 10.0, Tail::Upper, 1.96);
        assert!((lower + upper) / 2.0 > 0.1);
    }

    #[test]
    fn test_edges_stay_in_unit_interval() {
        assert_relative_eq!(bound(0.0, 10.0, Tail::Lower, 1.96), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            bound(0.0, 10.0, Tail::Upper, 1.96),
            0.277540168766617,
            epsilon = 1e-12
        );
        assert_relative_eq!(bound(1.0, 10.0, Tail::Upper, 1.96), 1.0, epsilon = 1e-12);
    }
}
