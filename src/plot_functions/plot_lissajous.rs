// src/plot_functions/plot_lissajous.rs

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_LISSAJOUS, LINE_WIDTH_PLOT, LISSAJOUS_DEFAULT_DELTA, LISSAJOUS_SAMPLES};
use crate::curves::lissajous::lissajous;
use crate::error::SaveError;
use crate::pattern_kind::PatternKind;
use crate::pattern_params::LissajousParams;
use crate::plot_framework::{draw_curve_chart, save_plot, CurvePlotConfig, PlotSeries, SeriesMarker};

/// Generates the Lissajous figure (blue)
pub fn plot_lissajous(params: LissajousParams, output_dir: &Path) -> Result<PathBuf, SaveError> {
    let kind = PatternKind::Lissajous;
    let LissajousParams { a, b } = params;
    let points = lissajous(a, b, LISSAJOUS_DEFAULT_DELTA, LISSAJOUS_SAMPLES);
    debug!("event=curve_generated pattern=lissajous a={a} b={b}");

    let config = CurvePlotConfig {
        title: format!("Lissajous Curve (a={a}, b={b})"),
        series: vec![PlotSeries {
            data: points,
            color: *COLOR_LISSAJOUS,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Line,
        }],
        polar_grid: None,
    };

    save_plot(output_dir, kind.filename(), kind.figure_size(), move |area| {
        draw_curve_chart(area, &config)
    })
}

// src/plot_functions/plot_lissajous.rs
