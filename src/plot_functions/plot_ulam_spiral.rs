// src/plot_functions/plot_ulam_spiral.rs

use log::debug;
use std::path::{Path, PathBuf};

use crate::curves::ulam::ulam_spiral;
use crate::error::SaveError;
use crate::pattern_kind::PatternKind;
use crate::plot_framework::{draw_boolean_grid, save_plot};

/// Generates the Ulam prime spiral as a binary image (primes black)
pub fn plot_ulam_spiral(limit: u64, output_dir: &Path) -> Result<PathBuf, SaveError> {
    let kind = PatternKind::Ulam;
    let grid = ulam_spiral(limit);
    debug!(
        "event=curve_generated pattern=ulam limit={} side={} primes={}",
        limit,
        grid.nrows(),
        grid.iter().filter(|&&cell| cell).count()
    );

    save_plot(output_dir, kind.filename(), kind.figure_size(), move |area| {
        draw_boolean_grid(area, "Ulam Spiral", &grid)
    })
}

// src/plot_functions/plot_ulam_spiral.rs
