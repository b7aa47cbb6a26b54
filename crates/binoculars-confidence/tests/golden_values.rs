//! Bounds pinned against a 40-digit reference evaluation of the same formulas

mod common;

use binoculars_confidence::{BinomialConfidence, IntervalMethod, Tail};
use common::*;

struct Case {
    method: IntervalMethod,
    p: f64,
    n: f64,
    z: f64,
    lower: f64,
    upper: f64,
}

const fn case(method: IntervalMethod, p: f64, n: f64, z: f64, lower: f64, upper: f64) -> Case {
    Case {
        method,
        p,
        n,
        z,
        lower,
        upper,
    }
}

use IntervalMethod::*;

#[rustfmt::skip]
const CASES: &[Case] = &[
    case(Jeffreys, 0.5, 100.0, 1.96, 0.403172205477609, 0.596827794522391),
    case(Jeffreys, 0.2, 50.0, 2.58, 0.0850476974469293, 0.369231364117627),
    case(Jeffreys, 1.0, 10.0, 1.96, 0.78279817202456, 0.99995211763313),
    case(Jeffreys, 0.1, 10.0, 1.96, 0.01101103171148, 0.381320652695706),
    case(Wilson, 0.5, 100.0, 1.96, 0.403829828590147, 0.596170171409853),
    case(Wilson, 0.2, 50.0, 2.58, 0.0936826027496124, 0.376809698208444),
    case(Wilson, 1.0, 10.0, 1.96, 0.722459831233383, 1.0),
    case(Normal, 0.5, 100.0, 1.96, 0.402, 0.598),
    case(Normal, 0.2, 50.0, 2.58, 0.0540531603630966, 0.345946839636903),
    case(Normal, 0.1, 10.0, 1.96, -0.0859419264179007, 0.285941926417901),
    case(ClopperPearson, 0.5, 100.0, 1.96, 0.398319388735763, 0.601680611264237),
    case(ClopperPearson, 0.2, 50.0, 2.58, 0.0785096884253141, 0.380777658801367),
    case(ClopperPearson, 0.0, 10.0, 1.96, 0.0, 0.308502930083727),
    case(ClopperPearson, 1.0, 10.0, 1.96, 0.691497069916273, 1.0),
];

#[test]
fn test_golden_intervals() {
    for c in CASES {
        let ci = BinomialConfidence::new(c.method)
            .with_z(c.z)
            .interval(c.p, c.n)
            .unwrap();
        assert_relative_eq!(ci.lower, c.lower, epsilon = GOLDEN_EPSILON);
        assert_relative_eq!(ci.upper, c.upper, epsilon = GOLDEN_EPSILON);
    }
}

#[test]
fn test_golden_bounds_by_tail() {
    for c in CASES {
        let settings = BinomialConfidence::new(c.method).with_z(c.z);
        assert_relative_eq!(
            settings.bound(c.p, c.n, Tail::Lower).unwrap(),
            c.lower,
            epsilon = GOLDEN_EPSILON
        );
        assert_relative_eq!(
            settings.bound(c.p, c.n, Tail::Upper).unwrap(),
            c.upper,
            epsilon = GOLDEN_EPSILON
        );
    }
}

#[test]
fn test_normal_overshoot_value() {
    let upper = BinomialConfidence::new(Normal)
        .bound(0.99, 5.0, Tail::Upper)
        .unwrap();
    assert_relative_eq!(upper, 1.07721449420825, epsilon = GOLDEN_EPSILON);
}
