// src/constants.rs

use plotters::style::colors::{BLACK, BLUE, MAGENTA, WHITE};
use plotters::style::RGBColor;

// Output resolution. Figure sizes are given in inches and multiplied by this.
pub const DPI: u32 = 300;

// Figure sizes in inches (width, height).
pub const FIGURE_SIZE_PHYLLOTAXIS_IN: (f64, f64) = (8.0, 8.0);
pub const FIGURE_SIZE_DEFAULT_IN: (f64, f64) = (6.0, 6.0);

// Whitespace kept around the content when cropping to the tight bounding box.
pub const TIGHT_BBOX_PAD_IN: f64 = 0.1;

// Fraction of the data span added on each side of the auto-scaled axes.
pub const AXIS_MARGIN_FRACTION: f64 = 0.05;

// Chart margin inside the titled area, in pixels.
pub const CHART_MARGIN_PX: u32 = 20;

// --- Parameter derivation ---
pub const PHYLLOTAXIS_MIN_POINTS: u64 = 300;
pub const PHYLLOTAXIS_POINTS_DIVISOR: u64 = 100;
pub const ULAM_LIMIT_DIVISOR: u64 = 200;
pub const ULAM_LIMIT_MAX: u64 = 5000;

// --- Curve sampling ---
pub const PHYLLOTAXIS_SCALE: f64 = 2.0;
pub const GOLDEN_ANGLE_DEG: f64 = 137.5;
pub const ROSE_SAMPLES: usize = 1000;
pub const LISSAJOUS_SAMPLES: usize = 1000;
pub const LISSAJOUS_DEFAULT_DELTA: f64 = std::f64::consts::FRAC_PI_2;
pub const SPIROGRAPH_SAMPLES: usize = 2000;

// --- Plot Color Assignments ---
pub const COLOR_BACKGROUND: &RGBColor = &WHITE;
pub const COLOR_PHYLLOTAXIS: RGBColor = RGBColor(0, 128, 0);
pub const COLOR_ROSE: &RGBColor = &MAGENTA;
pub const COLOR_LISSAJOUS: &RGBColor = &BLUE;
pub const COLOR_SPIROGRAPH: RGBColor = RGBColor(139, 0, 0);
pub const COLOR_ULAM_PRIME: &RGBColor = &BLACK;
pub const COLOR_POLAR_GRID: RGBColor = RGBColor(176, 176, 176);
pub const COLOR_TITLE: &RGBColor = &BLACK;
pub const COLOR_MESSAGE: RGBColor = RGBColor(200, 0, 0);

// Stroke widths and marker sizes, in pixels at DPI.
pub const LINE_WIDTH_PLOT: u32 = 6;
pub const LINE_WIDTH_GRID: u32 = 2;
pub const PHYLLOTAXIS_MARKER_RADIUS_PX: u32 = 2;

// Polar grid drawn behind the rose curve.
pub const POLAR_GRID_RINGS: usize = 4;
pub const POLAR_GRID_SPOKES: usize = 8;
pub const POLAR_GRID_RING_SAMPLES: usize = 361;

// Font sizes in points; converted to pixels at DPI by font_config.
pub const FONT_SIZE_TITLE_PT: u32 = 12;
pub const FONT_SIZE_MESSAGE_PT: u32 = 10;

// src/constants.rs
