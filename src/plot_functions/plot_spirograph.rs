// src/plot_functions/plot_spirograph.rs

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_SPIROGRAPH, LINE_WIDTH_PLOT, SPIROGRAPH_SAMPLES};
use crate::curves::spirograph::{spirograph, spirograph_period};
use crate::error::SaveError;
use crate::pattern_kind::PatternKind;
use crate::pattern_params::SpirographParams;
use crate::plot_framework::{draw_curve_chart, save_plot, CurvePlotConfig, PlotSeries, SeriesMarker};

/// Generates the spirograph (hypotrochoid) plot (dark red)
pub fn plot_spirograph(params: SpirographParams, output_dir: &Path) -> Result<PathBuf, SaveError> {
    let kind = PatternKind::Spirograph;
    let SpirographParams { big_r, r, d } = params;
    let points = spirograph(big_r, r, d, SPIROGRAPH_SAMPLES);
    debug!(
        "event=curve_generated pattern=spirograph R={} r={} d={} period={:.4}",
        big_r,
        r,
        d,
        spirograph_period(big_r, r)
    );

    let config = CurvePlotConfig {
        title: "Spirograph".to_string(),
        series: vec![PlotSeries {
            data: points,
            color: COLOR_SPIROGRAPH,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Line,
        }],
        polar_grid: None,
    };

    save_plot(output_dir, kind.filename(), kind.figure_size(), move |area| {
        draw_curve_chart(area, &config)
    })
}

// src/plot_functions/plot_spirograph.rs
