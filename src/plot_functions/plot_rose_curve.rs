// src/plot_functions/plot_rose_curve.rs

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_ROSE, LINE_WIDTH_PLOT, ROSE_SAMPLES};
use crate::curves::rose::{polar_to_cartesian, rose_curve};
use crate::error::SaveError;
use crate::pattern_kind::PatternKind;
use crate::plot_framework::{draw_curve_chart, save_plot, CurvePlotConfig, PlotSeries, SeriesMarker};

/// Generates the rose curve on a polar grid (magenta)
pub fn plot_rose_curve(k: u64, output_dir: &Path) -> Result<PathBuf, SaveError> {
    let kind = PatternKind::Rose;
    let polar = rose_curve(k, ROSE_SAMPLES);
    debug!("event=curve_generated pattern=rose k={} samples={}", k, polar.len());

    let config = CurvePlotConfig {
        title: format!("Rose Curve (k={k})"),
        series: vec![PlotSeries {
            data: polar_to_cartesian(&polar),
            color: *COLOR_ROSE,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Line,
        }],
        polar_grid: Some(1.0),
    };

    save_plot(output_dir, kind.filename(), kind.figure_size(), move |area| {
        draw_curve_chart(area, &config)
    })
}

// src/plot_functions/plot_rose_curve.rs
