// src/font_config.rs

// Font styles for plot rendering. Sizes are specified in points and scaled to
// pixels at the output DPI so titles keep their printed size.

use crate::constants::{DPI, FONT_SIZE_MESSAGE_PT, FONT_SIZE_TITLE_PT};

/// Font family name for default system fonts (resolved by plotters)
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// Converts a point size to pixels at the output DPI (72 points per inch).
pub const fn points_to_px(points: u32) -> i32 {
    (points * DPI / 72) as i32
}

pub const FONT_SIZE_TITLE_PX: i32 = points_to_px(FONT_SIZE_TITLE_PT);
pub const FONT_SIZE_MESSAGE_PX: i32 = points_to_px(FONT_SIZE_MESSAGE_PT);

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TITLE_PX);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE_PX);
