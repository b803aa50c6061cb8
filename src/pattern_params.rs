// src/pattern_params.rs

use std::num::NonZeroU64;

use crate::constants::{
    PHYLLOTAXIS_MIN_POINTS, PHYLLOTAXIS_POINTS_DIVISOR, ULAM_LIMIT_DIVISOR, ULAM_LIMIT_MAX,
};
use crate::types::ElapsedSeconds;

/// Frequencies of the two Lissajous oscillators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LissajousParams {
    pub a: u64,
    pub b: u64,
}

/// Fixed ring radius `big_r`, rolling ring radius `r` and pen offset `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpirographParams {
    pub big_r: u64,
    pub r: NonZeroU64,
    pub d: u64,
}

/// Curve parameters derived from the alive-seconds count.
/// Computed once per run and consumed by the plot functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternParams {
    pub phyllotaxis_points: u64,
    pub rose_k: u64,
    pub lissajous: LissajousParams,
    pub spirograph: SpirographParams,
    pub ulam_limit: u64,
}

impl PatternParams {
    pub fn from_elapsed(elapsed: ElapsedSeconds) -> Self {
        let s = elapsed.get();
        Self {
            phyllotaxis_points: (s / PHYLLOTAXIS_POINTS_DIVISOR).max(PHYLLOTAXIS_MIN_POINTS),
            rose_k: s % 10 + 2,
            lissajous: LissajousParams {
                a: s % 9 + 2,
                b: s % 7 + 3,
            },
            spirograph: SpirographParams {
                big_r: (s % 9 + 3) * 2,
                r: NonZeroU64::MIN.saturating_add(s % 5),
                d: s % 10 + 2,
            },
            ulam_limit: (s / ULAM_LIMIT_DIVISOR).min(ULAM_LIMIT_MAX),
        }
    }
}
