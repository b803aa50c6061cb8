// src/plot_functions/plot_phyllotaxis.rs

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_PHYLLOTAXIS, PHYLLOTAXIS_MARKER_RADIUS_PX, PHYLLOTAXIS_SCALE};
use crate::curves::phyllotaxis::phyllotaxis;
use crate::error::SaveError;
use crate::pattern_kind::PatternKind;
use crate::plot_framework::{draw_curve_chart, save_plot, CurvePlotConfig, PlotSeries, SeriesMarker};

/// Generates the phyllotaxis scatter plot (green dots, equal axes, no frame)
pub fn plot_phyllotaxis(n_points: u64, output_dir: &Path) -> Result<PathBuf, SaveError> {
    let kind = PatternKind::Phyllotaxis;
    let points = phyllotaxis(n_points, PHYLLOTAXIS_SCALE);
    debug!("event=curve_generated pattern=phyllotaxis points={}", points.len());

    let config = CurvePlotConfig {
        title: "Phyllotaxis Pattern".to_string(),
        series: vec![PlotSeries {
            data: points,
            color: COLOR_PHYLLOTAXIS,
            stroke_width: 0,
            marker: SeriesMarker::Dot {
                radius: PHYLLOTAXIS_MARKER_RADIUS_PX,
            },
        }],
        polar_grid: None,
    };

    save_plot(output_dir, kind.filename(), kind.figure_size(), move |area| {
        draw_curve_chart(area, &config)
    })
}

// src/plot_functions/plot_phyllotaxis.rs
