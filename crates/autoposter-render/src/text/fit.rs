//! Auto-fit helpers: shrink a font size, or cut a string, until it fits a width budget.

use super::{FontFamily, TextMeasurer, TextStyle, measure_or_estimate};

/// Smallest size [`fit`] will go down to.
pub const FIT_FLOOR: f64 = 20.0;
pub const FIT_STEP: f64 = 2.0;
pub const ELLIPSIS: char = '…';

/// Largest size, stepping down from `start_size`, at which `text` is at most `max_width` wide.
///
/// Stops at [`FIT_FLOOR`] (the text may then overflow). Never returns more than `start_size`.
/// When the measurer cannot serve the family the floor is returned.
pub fn fit(
    measurer: &dyn TextMeasurer,
    text: &str,
    family: FontFamily,
    max_width: f64,
    start_size: f64,
) -> f64 {
    let floor = FIT_FLOOR.min(start_size);
    let mut size = start_size;
    while size > FIT_FLOOR {
        let Some(metrics) = measurer.measure(text, &TextStyle::new(family, size)) else {
            tracing::warn!(?family, size, "text measurement unavailable; using floor size");
            return floor;
        };
        if metrics.width <= max_width {
            return size;
        }
        size -= FIT_STEP;
    }
    floor
}

/// Cuts `text` to `max_width`, marking the cut with [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. Otherwise characters are dropped from the end
/// until `prefix…` fits; if only one character is left it is returned bare.
pub fn truncate(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    let width = |s: &str| measure_or_estimate(measurer, s, style).width;
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() > 1 {
        chars.pop();
        let candidate: String = chars.iter().copied().chain([ELLIPSIS]).collect();
        if width(&candidate) <= max_width {
            return candidate;
        }
    }
    chars.into_iter().collect()
}
