use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

mod fit;
mod font;

pub use fit::{ELLIPSIS, FIT_FLOOR, FIT_STEP, fit, truncate};
pub use font::{DEFAULT_FONT_FAMILY, FontBook, FontOptions, FontTextMeasurer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Bold,
    Regular,
}

impl FontFamily {
    pub fn svg_weight(self) -> &'static str {
        match self {
            FontFamily::Bold => "bold",
            FontFamily::Regular => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub font_size: f64,
}

impl TextStyle {
    pub const fn new(family: FontFamily, font_size: f64) -> Self {
        Self { family, font_size }
    }

    pub const fn bold(font_size: f64) -> Self {
        Self::new(FontFamily::Bold, font_size)
    }

    pub const fn regular(font_size: f64) -> Self {
        Self::new(FontFamily::Regular, font_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box (positive).
    pub descent: f64,
}

impl TextMetrics {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Measures single-line text.
///
/// `None` means the measurer cannot serve this style (e.g. no font face is available); callers
/// degrade deterministically instead of failing.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics>;
}

/// Font-free measurer: every display column is a fixed fraction of the font size.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub bold_width_factor: f64,
}

impl DeterministicTextMeasurer {
    pub fn metrics(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let factor = match style.family {
            FontFamily::Regular if self.char_width_factor == 0.0 => 0.6,
            FontFamily::Regular => self.char_width_factor,
            FontFamily::Bold if self.bold_width_factor == 0.0 => 0.66,
            FontFamily::Bold => self.bold_width_factor,
        };
        let font_size = style.font_size.max(1.0);
        TextMetrics {
            width: UnicodeWidthStr::width(text) as f64 * font_size * factor,
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
        }
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics> {
        Some(self.metrics(text, style))
    }
}

/// Measures with `measurer`, falling back to [`DeterministicTextMeasurer`] estimates.
pub fn measure_or_estimate(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
) -> TextMetrics {
    measurer.measure(text, style).unwrap_or_else(|| {
        tracing::warn!(
            family = ?style.family,
            size = style.font_size,
            "text measurement unavailable; using estimate"
        );
        DeterministicTextMeasurer::default().metrics(text, style)
    })
}

#[cfg(test)]
mod tests;
