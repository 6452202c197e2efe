use crate::text::TextStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    /// Top of the line box.
    pub y: f64,
    pub baseline: f64,
    pub style: TextStyle,
    pub color: Color,
    pub letter_spacing: f64,
    /// Measured width, tracking included.
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect { rect: Rect, fill: Color },
    Circle { cx: f64, cy: f64, r: f64, fill: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagLayout {
    pub country: String,
    pub bounds: Rect,
    /// Fill shapes, painted in order, then the 1px border on top.
    pub shapes: Vec<Shape>,
    pub border: Color,
}

/// Spec-table column positions, recomputed for every poster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub table_top: f64,
    pub row_height: f64,
    pub year_x: f64,
    pub divider_x: f64,
    pub left_label_x: f64,
    pub left_value_x: f64,
    /// Width budget for left-column values; wider values are truncated.
    pub left_value_max_width: f64,
    pub right_label_x: f64,
    pub right_value_x: f64,
    /// Flag anchor (top-left corner of the flag box).
    pub flag_x: f64,
    pub flag_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterLayout {
    pub width: u32,
    pub height: u32,
    pub brand: TextItem,
    pub model: TextItem,
    pub photo_band: Rect,
    /// Band minus the inset; a placed photo always lies inside it.
    pub photo_area: Rect,
    pub photo: Option<Rect>,
    pub geometry: LayoutGeometry,
    pub divider: LineItem,
    /// Year column plus both spec columns, row-major.
    pub table: Vec<TextItem>,
    pub flag: Option<FlagLayout>,
}
