//! Poster geometry and palette. The canvas is a fixed target; nothing here scales.

use crate::model::Color;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1200;

pub const MARGIN_LEFT: f64 = 60.0;
pub const TOP_OFFSET: f64 = 50.0;
pub const BRAND_MODEL_GAP: f64 = 10.0;

pub const BRAND_FONT_SIZE: f64 = 80.0;
pub const BRAND_TRACKING: f64 = 4.0;
pub const MODEL_START_SIZE: f64 = 72.0;

pub const PHOTO_BAND_GAP: f64 = 30.0;
pub const PHOTO_BAND_HEIGHT_RATIO: f64 = 0.38;
pub const PHOTO_INSET_RATIO: f64 = 0.05;

pub const TABLE_GAP: f64 = 55.0;
pub const LINE_HEIGHT: f64 = 46.0;
pub const COLUMN_GAP: f64 = 20.0;
pub const YEAR_VALUE_OFFSET: f64 = 32.0;
/// Divider x relative to the year column.
pub const YEAR_DIVIDER_OFFSET: f64 = 145.0;
/// Left labels start this far past the divider.
pub const DIVIDER_OFFSET: f64 = 30.0;
pub const DIVIDER_WIDTH: f64 = 2.0;
pub const DIVIDER_OVERHANG_TOP: f64 = 5.0;
pub const DIVIDER_OVERHANG_BOTTOM: f64 = 10.0;
pub const LEFT_ROWS: usize = 4;
/// Minimum clearance between a left value and the right label column.
pub const LEFT_VALUE_CLEARANCE: f64 = 35.0;

pub const YEAR_LABEL_SIZE: f64 = 26.0;
pub const YEAR_VALUE_SIZE: f64 = 18.0;
pub const SPEC_LABEL_SIZE: f64 = 20.0;
pub const SPEC_VALUE_SIZE: f64 = 20.0;

pub const FLAG_WIDTH: f64 = 50.0;
pub const FLAG_HEIGHT: f64 = 35.0;
/// Gap between the right value column and the flag.
pub const FLAG_MARGIN: f64 = 14.0;
/// Gap between the flag's right edge and the canvas edge.
pub const FLAG_RIGHT_MARGIN: f64 = 10.0;
pub const FLAG_ROW_NUDGE: f64 = 4.0;

pub const BACKGROUND: Color = Color::rgb(255, 255, 255);
pub const BRAND_COLOR: Color = Color::rgb(140, 140, 140);
pub const TEXT_COLOR: Color = Color::rgb(0, 0, 0);
pub const PHOTO_BAND_COLOR: Color = Color::rgb(225, 225, 225);
pub const DIVIDER_COLOR: Color = Color::rgb(150, 150, 150);
pub const FLAG_BORDER_COLOR: Color = Color::rgb(200, 200, 200);

pub const DEFAULT_MODEL: &str = "CAR MODEL";
pub const DEFAULT_BRAND: &str = "BRAND";
pub const DEFAULT_MODEL_LINE: &str = "MODEL";
