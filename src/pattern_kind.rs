//! Centralized pattern naming utilities
//!
//! Provides the fixed output filename, figure size and display name for each
//! of the five rendered patterns.

use crate::constants::{FIGURE_SIZE_DEFAULT_IN, FIGURE_SIZE_PHYLLOTAXIS_IN};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Phyllotaxis,
    Rose,
    Lissajous,
    Spirograph,
    Ulam,
}

/// Number of rendered patterns
pub const PATTERN_COUNT: usize = 5;

impl PatternKind {
    /// All patterns in rendering order.
    pub const ALL: [PatternKind; PATTERN_COUNT] = [
        PatternKind::Phyllotaxis,
        PatternKind::Rose,
        PatternKind::Lissajous,
        PatternKind::Spirograph,
        PatternKind::Ulam,
    ];

    /// Output filename, overwritten on every run.
    pub const fn filename(self) -> &'static str {
        match self {
            PatternKind::Phyllotaxis => "phyllotaxis.png",
            PatternKind::Rose => "rose_curve.png",
            PatternKind::Lissajous => "lissajous_curve.png",
            PatternKind::Spirograph => "spirograph.png",
            PatternKind::Ulam => "ulam_spiral.png",
        }
    }

    /// Figure size in inches (width, height).
    pub const fn figure_size(self) -> (f64, f64) {
        match self {
            PatternKind::Phyllotaxis => FIGURE_SIZE_PHYLLOTAXIS_IN,
            _ => FIGURE_SIZE_DEFAULT_IN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::Phyllotaxis => "Phyllotaxis",
            PatternKind::Rose => "Rose Curve",
            PatternKind::Lissajous => "Lissajous Curve",
            PatternKind::Spirograph => "Spirograph",
            PatternKind::Ulam => "Ulam Spiral",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
