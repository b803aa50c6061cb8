// src/orchestrator.rs

use chrono::NaiveDateTime;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data_input::birthdate::alive_seconds_at;
use crate::error::{RunError, SaveError};
use crate::pattern_kind::PatternKind;
use crate::pattern_params::PatternParams;
use crate::plot_functions::plot_lissajous::plot_lissajous;
use crate::plot_functions::plot_phyllotaxis::plot_phyllotaxis;
use crate::plot_functions::plot_rose_curve::plot_rose_curve;
use crate::plot_functions::plot_spirograph::plot_spirograph;
use crate::plot_functions::plot_ulam_spiral::plot_ulam_spiral;
use crate::types::ElapsedSeconds;

/// Where a run writes its images.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub elapsed: ElapsedSeconds,
    pub params: PatternParams,
    pub saved: Vec<PathBuf>,
    pub failed: Vec<SaveError>,
}

/// Formats an integer with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders one pattern into `output_dir`.
pub fn render_pattern(
    kind: PatternKind,
    params: &PatternParams,
    output_dir: &Path,
) -> Result<PathBuf, SaveError> {
    match kind {
        PatternKind::Phyllotaxis => plot_phyllotaxis(params.phyllotaxis_points, output_dir),
        PatternKind::Rose => plot_rose_curve(params.rose_k, output_dir),
        PatternKind::Lissajous => plot_lissajous(params.lissajous, output_dir),
        PatternKind::Spirograph => plot_spirograph(params.spirograph, output_dir),
        PatternKind::Ulam => plot_ulam_spiral(params.ulam_limit, output_dir),
    }
}

/// Full pipeline: birthdate → alive seconds → parameters → five images.
///
/// An invalid or future birthdate aborts before anything is written. A failed
/// image is reported on `out` and the remaining patterns still render.
pub fn run<W: Write>(
    birthdate_input: &str,
    now: NaiveDateTime,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let elapsed = alive_seconds_at(birthdate_input, now)?;
    writeln!(out, "⏱️ Alive seconds: {}", format_thousands(elapsed.get()))?;

    let params = PatternParams::from_elapsed(elapsed);
    info!("event=params_derived elapsed={} params={:?}", elapsed, params);

    let mut saved = Vec::with_capacity(PatternKind::ALL.len());
    let mut failed = Vec::new();

    for kind in PatternKind::ALL {
        match render_pattern(kind, &params, &config.output_dir) {
            Ok(path) => {
                writeln!(out, "✅ Saved: {}", kind.filename())?;
                saved.push(path);
            }
            Err(err) => {
                writeln!(out, "❌ Error saving {}: {}", err.filename(), err)?;
                warn!("event=plot_failed pattern={} error={}", kind, err);
                failed.push(err);
            }
        }
    }

    if failed.is_empty() {
        writeln!(out, "\n🎉 All personalized pattern images saved as PNGs!")?;
    } else {
        writeln!(
            out,
            "\nFinished with {} of {} images saved.",
            saved.len(),
            PatternKind::ALL.len()
        )?;
    }

    Ok(RunSummary {
        elapsed,
        params,
        saved,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(86_400), "86,400");
        assert_eq!(format_thousands(757_382_400), "757,382,400");
        assert_eq!(format_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }
}
