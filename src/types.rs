// src/types.rs
// Shared data types passed from the curve generators to the plot functions.

use ndarray::Array2;
use std::fmt;

/// Ordered (x, y) samples of a curve.
pub type PointSeries = Vec<(f64, f64)>;

/// Ordered (theta, r) samples of a polar curve.
pub type PolarSeries = Vec<(f64, f64)>;

/// Primality flags laid out on the Ulam spiral, indexed `[row, column]`.
pub type PrimeGrid = Array2<bool>;

/// Whole seconds between a birthdate and the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElapsedSeconds(u64);

impl ElapsedSeconds {
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElapsedSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
