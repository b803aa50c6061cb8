// src/curves/spirograph.rs

use ndarray::Array1;
use std::f64::consts::TAU;
use std::num::NonZeroU64;

use crate::types::PointSeries;

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Parameter range after which the hypotrochoid retraces itself:
/// `2π * r / gcd(R, r)`.
pub fn spirograph_period(big_r: u64, r: NonZeroU64) -> f64 {
    let r = r.get();
    TAU * r as f64 / gcd(big_r, r) as f64
}

/// Samples the hypotrochoid traced by a pen at offset `d` from the centre of a
/// ring of radius `r` rolling inside a fixed ring of radius `big_r`.
///
/// `t` runs over `[0, spirograph_period(big_r, r)]` so the curve closes.
pub fn spirograph(big_r: u64, r: NonZeroU64, d: u64, samples: usize) -> PointSeries {
    let period = spirograph_period(big_r, r);
    let r = r.get() as f64;
    let diff = big_r as f64 - r;
    let d = d as f64;
    let ratio = diff / r;

    Array1::linspace(0.0, period, samples)
        .iter()
        .map(|&t| {
            (
                diff * t.cos() + d * (ratio * t).cos(),
                diff * t.sin() - d * (ratio * t).sin(),
            )
        })
        .collect()
}
