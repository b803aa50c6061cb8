// src/plot_framework.rs

use image::{imageops, ImageFormat, Rgb, RgbImage};
use log::debug;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::f64::consts::TAU;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    AXIS_MARGIN_FRACTION, CHART_MARGIN_PX, COLOR_BACKGROUND, COLOR_MESSAGE, COLOR_POLAR_GRID,
    COLOR_TITLE, COLOR_ULAM_PRIME, DPI, LINE_WIDTH_GRID, POLAR_GRID_RINGS,
    POLAR_GRID_RING_SAMPLES, POLAR_GRID_SPOKES, TIGHT_BBOX_PAD_IN,
};
use crate::error::SaveError;
use crate::font_config::{FONT_SIZE_MESSAGE_PX, FONT_TUPLE_MESSAGE, FONT_TUPLE_TITLE};
use crate::types::PrimeGrid;

/// Drawing surface handed to the plot callbacks.
pub type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesMarker {
    /// Connected polyline.
    Line,
    /// One filled dot per point.
    Dot { radius: u32 },
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker: SeriesMarker,
}

/// A titled chart with equal axis scaling and hidden axes.
#[derive(Clone)]
pub struct CurvePlotConfig {
    pub title: String,
    pub series: Vec<PlotSeries>,
    /// Outer radius of a polar grid drawn behind the series.
    pub polar_grid: Option<f64>,
}

/// Forces a `.png` extension: a trailing `.jpg` is replaced, anything else
/// gets `.png` appended.
pub fn normalize_png_filename(filename: &str) -> String {
    if filename.ends_with(".png") {
        return filename.to_string();
    }
    let stem = filename.strip_suffix(".jpg").unwrap_or(filename);
    format!("{stem}.png")
}

/// Pixel dimensions of a figure given in inches.
pub fn figure_pixels(size_in: (f64, f64)) -> (u32, u32) {
    let dpi = f64::from(DPI);
    (
        (size_in.0 * dpi).round() as u32,
        (size_in.1 * dpi).round() as u32,
    )
}

/// Calculate plot range with padding.
/// Adds `AXIS_MARGIN_FRACTION` on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        0.5
    } else {
        range * AXIS_MARGIN_FRACTION
    };
    (min - padding, max + padding)
}

/// Bounding box of all finite points across the series.
pub fn series_bounds(series: &[PlotSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in series.iter().flat_map(|s| s.data.iter()) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min > x_max {
        return None;
    }
    Some((x_min..x_max, y_min..y_max))
}

/// Widens the shorter data span so one data unit covers the same number of
/// pixels on both axes. Centres are preserved.
pub fn equal_aspect_ranges(
    x: Range<f64>,
    y: Range<f64>,
    pixels: (u32, u32),
) -> (Range<f64>, Range<f64>) {
    let (width, height) = (f64::from(pixels.0), f64::from(pixels.1));
    if width <= 0.0 || height <= 0.0 {
        return (x, y);
    }

    let x_span = (x.end - x.start).abs().max(f64::EPSILON);
    let y_span = (y.end - y.start).abs().max(f64::EPSILON);
    let units_per_px = (x_span / width).max(y_span / height);

    let half_w = units_per_px * width / 2.0;
    let half_h = units_per_px * height / 2.0;
    let cx = (x.start + x.end) / 2.0;
    let cy = (y.start + y.end) / 2.0;
    (cx - half_w..cx + half_w, cy - half_h..cy + half_h)
}

/// Smallest `(x, y, width, height)` rectangle holding every pixel that differs
/// from `background`, grown by `pad` on each side and clipped to the image.
/// `None` when the image is blank.
pub fn tight_bbox(image: &RgbImage, background: Rgb<u8>, pad: u32) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let (x0, y0, x1, y1) = bounds?;
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = x1.saturating_add(pad).min(image.width() - 1);
    let bottom = y1.saturating_add(pad).min(image.height() - 1);
    Some((left, top, right - left + 1, bottom - top + 1))
}

fn crop_to_content(image: RgbImage) -> RgbImage {
    let background = Rgb([COLOR_BACKGROUND.0, COLOR_BACKGROUND.1, COLOR_BACKGROUND.2]);
    let pad = (TIGHT_BBOX_PAD_IN * f64::from(DPI)).round() as u32;
    match tight_bbox(&image, background, pad) {
        Some((x, y, width, height)) => imageops::crop_imm(&image, x, y, width, height).to_image(),
        None => image,
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &PlotArea<'_>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_type} Data Unavailable: {reason}");

    let estimated_text_width =
        (message.chars().count() as f32 * FONT_SIZE_MESSAGE_PX as f32 * CHAR_WIDTH_RATIO) as i32;
    let position = (
        (width / 2 - estimated_text_width / 2).max(0),
        height / 2 - FONT_SIZE_MESSAGE_PX / 2,
    );

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&COLOR_MESSAGE);
    area.draw(&Text::new(message, position, text_style))?;
    Ok(())
}

fn polar_grid_paths(max_radius: f64) -> Vec<Vec<(f64, f64)>> {
    let mut paths = Vec::with_capacity(POLAR_GRID_RINGS + POLAR_GRID_SPOKES);

    for ring in 1..=POLAR_GRID_RINGS {
        let radius = max_radius * ring as f64 / POLAR_GRID_RINGS as f64;
        let step = TAU / (POLAR_GRID_RING_SAMPLES - 1) as f64;
        paths.push(
            (0..POLAR_GRID_RING_SAMPLES)
                .map(|i| {
                    let theta = i as f64 * step;
                    (radius * theta.cos(), radius * theta.sin())
                })
                .collect(),
        );
    }

    for spoke in 0..POLAR_GRID_SPOKES {
        let theta = TAU * spoke as f64 / POLAR_GRID_SPOKES as f64;
        paths.push(vec![
            (0.0, 0.0),
            (max_radius * theta.cos(), max_radius * theta.sin()),
        ]);
    }

    paths
}

fn inner_chart_pixels(area: &PlotArea<'_>) -> (u32, u32) {
    let (width, height) = area.dim_in_pixel();
    (
        width.saturating_sub(2 * CHART_MARGIN_PX),
        height.saturating_sub(2 * CHART_MARGIN_PX),
    )
}

/// Draws a titled chart with equal axis scaling and no axes, like a
/// decorative curve plot.
pub fn draw_curve_chart(area: &PlotArea<'_>, config: &CurvePlotConfig) -> Result<(), Box<dyn Error>> {
    let chart_area = area.titled(&config.title, FONT_TUPLE_TITLE.into_font().color(COLOR_TITLE))?;

    let bounds = match (series_bounds(&config.series), config.polar_grid) {
        (Some((x, y)), Some(radius)) => Some((
            x.start.min(-radius)..x.end.max(radius),
            y.start.min(-radius)..y.end.max(radius),
        )),
        (None, Some(radius)) => Some((-radius..radius, -radius..radius)),
        (bounds, None) => bounds,
    };
    let Some((x_data, y_data)) = bounds else {
        return draw_unavailable_message(&chart_area, &config.title, "No data points");
    };

    let (x_min, x_max) = calculate_range(x_data.start, x_data.end);
    let (y_min, y_max) = calculate_range(y_data.start, y_data.end);
    let (x_range, y_range) =
        equal_aspect_ranges(x_min..x_max, y_min..y_max, inner_chart_pixels(&chart_area));

    let mut chart = ChartBuilder::on(&chart_area)
        .margin(CHART_MARGIN_PX)
        .build_cartesian_2d(x_range, y_range)?;

    if let Some(radius) = config.polar_grid {
        chart.draw_series(
            polar_grid_paths(radius)
                .into_iter()
                .map(|path| PathElement::new(path, COLOR_POLAR_GRID.stroke_width(LINE_WIDTH_GRID))),
        )?;
    }

    for s in &config.series {
        match s.marker {
            SeriesMarker::Line => {
                chart.draw_series(LineSeries::new(
                    s.data.iter().copied(),
                    s.color.stroke_width(s.stroke_width),
                ))?;
            }
            SeriesMarker::Dot { radius } => {
                chart.draw_series(
                    s.data
                        .iter()
                        .map(|&point| Circle::new(point, radius, s.color.filled())),
                )?;
            }
        }
    }

    Ok(())
}

/// Draws a boolean grid as an image: set cells black, clear cells background.
/// Row 0 is at the top.
pub fn draw_boolean_grid(area: &PlotArea<'_>, title: &str, grid: &PrimeGrid) -> Result<(), Box<dyn Error>> {
    let chart_area = area.titled(title, FONT_TUPLE_TITLE.into_font().color(COLOR_TITLE))?;

    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return draw_unavailable_message(&chart_area, title, "Empty grid");
    }

    let (x_range, y_range) = equal_aspect_ranges(
        0.0..cols as f64,
        0.0..rows as f64,
        inner_chart_pixels(&chart_area),
    );
    let mut chart = ChartBuilder::on(&chart_area)
        .margin(CHART_MARGIN_PX)
        .build_cartesian_2d(x_range, y_range)?;

    chart.draw_series(
        grid.indexed_iter()
            .filter(|(_, set)| **set)
            .map(|((row, col), _)| {
                let top = (rows - row) as f64;
                let left = col as f64;
                Rectangle::new([(left, top - 1.0), (left + 1.0, top)], COLOR_ULAM_PRIME.filled())
            }),
    )?;

    Ok(())
}

fn render_figure<F>(buffer: &mut [u8], size: (u32, u32), draw: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&PlotArea<'_>) -> Result<(), Box<dyn Error>>,
{
    // `root` borrows the buffer and is dropped when this function returns,
    // whether drawing succeeded or not.
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(COLOR_BACKGROUND)?;
    draw(&root)?;
    root.present()?;
    Ok(())
}

/// Renders a figure of `figure_size_in` inches at `DPI`, crops it to the
/// tight bounding box of its content and writes it as PNG into `output_dir`.
///
/// The filename is normalized with [`normalize_png_filename`]. The drawing
/// context is released before the file is written, on success and on error.
/// Returns the written path.
pub fn save_plot<F>(
    output_dir: &Path,
    filename: &str,
    figure_size_in: (f64, f64),
    draw: F,
) -> Result<PathBuf, SaveError>
where
    F: FnOnce(&PlotArea<'_>) -> Result<(), Box<dyn Error>>,
{
    let filename = normalize_png_filename(filename);
    let (width, height) = figure_pixels(figure_size_in);
    let mut image = RgbImage::new(width, height);

    render_figure(&mut image, (width, height), draw).map_err(|err| SaveError::Render {
        filename: filename.clone(),
        reason: err.to_string(),
    })?;
    let image = crop_to_content(image);

    let path = output_dir.join(&filename);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| SaveError::Encode {
            filename: filename.clone(),
            source,
        })?;

    debug!(
        "event=plot_saved file={} width={} height={}",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_png_filename() {
        assert_eq!(normalize_png_filename("foo.jpg"), "foo.png");
        assert_eq!(normalize_png_filename("foo"), "foo.png");
        assert_eq!(normalize_png_filename("foo.png"), "foo.png");
        assert_eq!(normalize_png_filename("foo.jpg.bak"), "foo.jpg.bak.png");
    }

    #[test]
    fn test_figure_pixels_at_300_dpi() {
        assert_eq!(figure_pixels((8.0, 8.0)), (2400, 2400));
        assert_eq!(figure_pixels((6.0, 6.0)), (1800, 1800));
    }

    #[test]
    fn test_calculate_range_pads_both_sides() {
        let (min, max) = calculate_range(-1.0, 1.0);
        assert_abs_diff_eq!(min, -1.1);
        assert_abs_diff_eq!(max, 1.1);

        let (min, max) = calculate_range(3.0, 3.0);
        assert_abs_diff_eq!(min, 2.5);
        assert_abs_diff_eq!(max, 3.5);
    }

    #[test]
    fn test_equal_aspect_widens_short_axis() {
        let (x, y) = equal_aspect_ranges(-1.0..1.0, -2.0..2.0, (100, 100));
        assert_abs_diff_eq!(x.start, -2.0);
        assert_abs_diff_eq!(x.end, 2.0);
        assert_abs_diff_eq!(y.start, -2.0);
        assert_abs_diff_eq!(y.end, 2.0);

        let (x, y) = equal_aspect_ranges(0.0..10.0, 0.0..10.0, (200, 100));
        assert_abs_diff_eq!(x.end - x.start, 20.0);
        assert_abs_diff_eq!(y.end - y.start, 10.0);
        assert_abs_diff_eq!((x.start + x.end) / 2.0, 5.0);
    }

    #[test]
    fn test_series_bounds_skips_non_finite() {
        let series = vec![PlotSeries {
            data: vec![(1.0, -2.0), (f64::NAN, 100.0), (-3.0, 4.0)],
            color: RGBColor(0, 0, 0),
            stroke_width: 1,
            marker: SeriesMarker::Line,
        }];
        let (x, y) = series_bounds(&series).unwrap();
        assert_eq!(x, -3.0..1.0);
        assert_eq!(y, -2.0..4.0);
        assert!(series_bounds(&[]).is_none());
    }

    #[test]
    fn test_tight_bbox() {
        let white = Rgb([255, 255, 255]);
        let mut image = RgbImage::from_pixel(100, 80, white);
        assert_eq!(tight_bbox(&image, white, 5), None);

        image.put_pixel(20, 30, Rgb([0, 0, 0]));
        image.put_pixel(40, 35, Rgb([10, 10, 10]));
        assert_eq!(tight_bbox(&image, white, 0), Some((20, 30, 21, 6)));
        assert_eq!(tight_bbox(&image, white, 5), Some((15, 25, 31, 16)));

        // Padding is clipped at the image edges.
        image.put_pixel(99, 0, Rgb([0, 0, 0]));
        assert_eq!(tight_bbox(&image, white, 5), Some((15, 0, 85, 41)));
    }

    #[test]
    fn test_polar_grid_paths() {
        let paths = polar_grid_paths(1.0);
        assert_eq!(paths.len(), POLAR_GRID_RINGS + POLAR_GRID_SPOKES);
        let outer = &paths[POLAR_GRID_RINGS - 1];
        for &(x, y) in outer {
            assert_abs_diff_eq!((x * x + y * y).sqrt(), 1.0, epsilon = 1e-12);
        }
    }
}
