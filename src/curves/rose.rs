// src/curves/rose.rs

use ndarray::Array1;
use std::f64::consts::TAU;

use crate::types::{PointSeries, PolarSeries};

/// Samples the rose `r = sin(k * theta)` at `samples` evenly spaced angles
/// over `[0, 2π]`, endpoints included. Returns `(theta, r)` pairs.
pub fn rose_curve(k: u64, samples: usize) -> PolarSeries {
    let k = k as f64;
    Array1::linspace(0.0, TAU, samples)
        .iter()
        .map(|&theta| (theta, (k * theta).sin()))
        .collect()
}

/// Converts `(theta, r)` samples to Cartesian points. Negative radii land on
/// the opposite side of the pole.
pub fn polar_to_cartesian(polar: &[(f64, f64)]) -> PointSeries {
    polar
        .iter()
        .map(|&(theta, r)| (r * theta.cos(), r * theta.sin()))
        .collect()
}
