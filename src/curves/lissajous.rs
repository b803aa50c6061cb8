// src/curves/lissajous.rs

use ndarray::Array1;
use std::f64::consts::TAU;

use crate::types::PointSeries;

/// Samples `x = sin(a*t + delta)`, `y = sin(b*t)` for `t` evenly spaced over
/// `[0, 2π]`, endpoints included.
pub fn lissajous(a: u64, b: u64, delta: f64, samples: usize) -> PointSeries {
    let (a, b) = (a as f64, b as f64);
    Array1::linspace(0.0, TAU, samples)
        .iter()
        .map(|&t| ((a * t + delta).sin(), (b * t).sin()))
        .collect()
}
