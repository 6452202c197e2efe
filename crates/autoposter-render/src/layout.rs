//! Poster layout: every position below the header derives from the extent of the stage above.

use crate::flag::layout_flag;
use crate::model::{
    Color, LayoutGeometry, LineItem, PosterLayout, Rect, TextItem,
};
use crate::text::{
    FontFamily, TextMeasurer, TextStyle, fit, measure_or_estimate, truncate,
};
use crate::theme::*;
use autoposter_core::{Attribute, VehicleSpec};

const LEFT_ROWS_SPEC: [(&str, Attribute); LEFT_ROWS] = [
    ("Engine", Attribute::Engine),
    ("Power", Attribute::Power),
    ("Torque", Attribute::Torque),
    ("Weight", Attribute::Weight),
];

const RIGHT_ROWS_SPEC: [(&str, Attribute); 2] = [
    ("0-100 km/h", Attribute::Acceleration),
    ("Top speed", Attribute::TopSpeed),
];

pub fn layout_poster(
    spec: &VehicleSpec,
    photo_size: Option<(u32, u32)>,
    measurer: &dyn TextMeasurer,
) -> PosterLayout {
    let canvas_w = f64::from(CANVAS_WIDTH);
    let canvas_h = f64::from(CANVAS_HEIGHT);

    // Header: gray tracked brand, then the model line auto-fitted to the usable width.
    let (brand_text, model_text) = header_lines(spec.get(Attribute::Model));
    let brand = text_item(
        measurer,
        brand_text,
        MARGIN_LEFT,
        TOP_OFFSET,
        TextStyle::bold(BRAND_FONT_SIZE),
        BRAND_COLOR,
        BRAND_TRACKING,
    );
    let model_y = (brand.baseline + BRAND_MODEL_GAP).round();
    let model_size = fit(
        measurer,
        &model_text,
        FontFamily::Bold,
        canvas_w - 2.0 * MARGIN_LEFT,
        MODEL_START_SIZE,
    );
    let model = text_item(
        measurer,
        model_text,
        MARGIN_LEFT,
        model_y,
        TextStyle::bold(model_size),
        TEXT_COLOR,
        0.0,
    );

    // Photo band.
    let band = Rect::new(
        0.0,
        (model.baseline + PHOTO_BAND_GAP).round(),
        canvas_w,
        (canvas_h * PHOTO_BAND_HEIGHT_RATIO).floor(),
    );
    let photo_area = inset(band);
    let photo = photo_size.map(|(w, h)| place_photo(w, h, band));

    let table_top = band.bottom() + TABLE_GAP;
    let geometry = table_geometry(spec, table_top, measurer);
    let table = table_items(spec, &geometry, measurer);

    let divider = LineItem {
        x1: geometry.divider_x,
        y1: table_top - DIVIDER_OVERHANG_TOP,
        x2: geometry.divider_x,
        y2: table_top + LEFT_ROWS as f64 * LINE_HEIGHT + DIVIDER_OVERHANG_BOTTOM,
        width: DIVIDER_WIDTH,
        color: DIVIDER_COLOR,
    };

    let flag = layout_flag(
        spec.get(Attribute::Country).unwrap_or(""),
        geometry.flag_x,
        geometry.flag_y,
    );

    tracing::debug!(
        band_y = band.y,
        table_top,
        left_value_max_width = geometry.left_value_max_width,
        has_flag = flag.is_some(),
        "poster layout"
    );

    PosterLayout {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        brand,
        model,
        photo_band: band,
        photo_area,
        photo,
        geometry,
        divider,
        table,
        flag,
    }
}

/// Brand and model lines from the full model name, uppercased.
pub fn header_lines(model: Option<&str>) -> (String, String) {
    let full = model.unwrap_or(DEFAULT_MODEL);
    let mut parts = full.split_whitespace();
    let brand = parts
        .next()
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_BRAND.to_string());
    let rest = parts.collect::<Vec<_>>();
    let model = if rest.is_empty() {
        DEFAULT_MODEL_LINE.to_string()
    } else {
        rest.join(" ").to_uppercase()
    };
    (brand, model)
}

fn inset(band: Rect) -> Rect {
    let dx = (band.width * PHOTO_INSET_RATIO).floor();
    let dy = (band.height * PHOTO_INSET_RATIO).floor();
    Rect::new(
        band.x + dx,
        band.y + dy,
        band.width - 2.0 * dx,
        band.height - 2.0 * dy,
    )
}

/// Scales `(width, height)` down (never up) to fit `max`, keeping the aspect ratio.
pub fn thumbnail_size(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (width <= max_width && height <= max_height) {
        return (width, height);
    }
    let (w, h) = (u64::from(width), u64::from(height));
    let (mw, mh) = (u64::from(max_width), u64::from(max_height));
    // Compare w/h against mw/mh without floating point.
    let (out_w, out_h) = if w * mh >= h * mw {
        (mw, ((h * mw + w / 2) / w).clamp(1, mh.max(1)))
    } else {
        (((w * mh + h / 2) / h).clamp(1, mw.max(1)), mh)
    };
    (
        u32::try_from(out_w).unwrap_or(max_width),
        u32::try_from(out_h).unwrap_or(max_height),
    )
}

/// Photo rectangle: scaled into the band's inset area and centered in the band.
pub fn place_photo(width: u32, height: u32, band: Rect) -> Rect {
    let area = inset(band);
    let (w, h) = thumbnail_size(
        width,
        height,
        area.width.max(0.0) as u32,
        area.height.max(0.0) as u32,
    );
    let (w, h) = (f64::from(w), f64::from(h));
    Rect::new(
        band.x + ((band.width - w) / 2.0).floor(),
        band.y + ((band.height - h) / 2.0).floor(),
        w,
        h,
    )
}

fn widest(measurer: &dyn TextMeasurer, texts: &[&str], style: &TextStyle) -> f64 {
    texts
        .iter()
        .map(|t| measure_or_estimate(measurer, t, style).width.ceil())
        .fold(0.0, f64::max)
}

/// Column geometry for the spec table.
///
/// Two passes, in this order:
/// 1. right-to-left: the flag anchor is pinned to the canvas's right edge, then the right value
///    column and the right label column are placed leftwards from it;
/// 2. left-to-right: the left label and value columns follow the divider, and the left value
///    budget is whatever remains before the right label column, minus a clearance.
///
/// The left budget depends on pass 1, so the columns cannot overlap.
pub fn table_geometry(
    spec: &VehicleSpec,
    table_top: f64,
    measurer: &dyn TextMeasurer,
) -> LayoutGeometry {
    let label_style = TextStyle::bold(SPEC_LABEL_SIZE);
    let value_style = TextStyle::regular(SPEC_VALUE_SIZE);

    // Pass 1: right column, anchored on the canvas edge.
    let right_labels = RIGHT_ROWS_SPEC.map(|(label, _)| label);
    let right_values = RIGHT_ROWS_SPEC.map(|(_, attr)| spec.display(attr));
    let right_label_w = widest(measurer, &right_labels, &label_style);
    let right_value_w = widest(measurer, &right_values, &value_style);
    let flag_right = f64::from(CANVAS_WIDTH) - FLAG_RIGHT_MARGIN;
    let flag_x = flag_right - FLAG_WIDTH;
    let right_value_x = flag_x - FLAG_MARGIN - right_value_w;
    let right_label_x = right_value_x - COLUMN_GAP - right_label_w;

    // Pass 2: left column, bounded by the right label column.
    let year_x = MARGIN_LEFT;
    let divider_x = year_x + YEAR_DIVIDER_OFFSET;
    let left_label_x = divider_x + DIVIDER_OFFSET;
    let left_labels = LEFT_ROWS_SPEC.map(|(label, _)| label);
    let left_label_w = widest(measurer, &left_labels, &label_style);
    let left_value_x = left_label_x + left_label_w + COLUMN_GAP;
    let left_value_max_width = right_label_x - left_value_x - LEFT_VALUE_CLEARANCE;

    LayoutGeometry {
        table_top,
        row_height: LINE_HEIGHT,
        year_x,
        divider_x,
        left_label_x,
        left_value_x,
        left_value_max_width,
        right_label_x,
        right_value_x,
        flag_x,
        flag_y: table_top + LINE_HEIGHT + FLAG_ROW_NUDGE,
    }
}

fn table_items(
    spec: &VehicleSpec,
    g: &LayoutGeometry,
    measurer: &dyn TextMeasurer,
) -> Vec<TextItem> {
    let label_style = TextStyle::bold(SPEC_LABEL_SIZE);
    let value_style = TextStyle::regular(SPEC_VALUE_SIZE);
    let row_y = |i: usize| g.table_top + i as f64 * g.row_height;

    let mut items = vec![
        text_item(
            measurer,
            "YEAR".to_string(),
            g.year_x,
            g.table_top,
            TextStyle::bold(YEAR_LABEL_SIZE),
            TEXT_COLOR,
            0.0,
        ),
        text_item(
            measurer,
            spec.display(Attribute::Year).to_string(),
            g.year_x,
            g.table_top + YEAR_VALUE_OFFSET,
            TextStyle::regular(YEAR_VALUE_SIZE),
            TEXT_COLOR,
            0.0,
        ),
    ];

    for (i, (label, attr)) in LEFT_ROWS_SPEC.iter().enumerate() {
        let y = row_y(i);
        let value = truncate(
            measurer,
            spec.display(*attr),
            &value_style,
            g.left_value_max_width,
        );
        items.push(text_item(
            measurer,
            label.to_string(),
            g.left_label_x,
            y,
            label_style,
            TEXT_COLOR,
            0.0,
        ));
        items.push(text_item(
            measurer,
            value,
            g.left_value_x,
            y,
            value_style,
            TEXT_COLOR,
            0.0,
        ));
    }

    for (i, (label, attr)) in RIGHT_ROWS_SPEC.iter().enumerate() {
        let y = row_y(i);
        items.push(text_item(
            measurer,
            label.to_string(),
            g.right_label_x,
            y,
            label_style,
            TEXT_COLOR,
            0.0,
        ));
        items.push(text_item(
            measurer,
            spec.display(*attr).to_string(),
            g.right_value_x,
            y,
            value_style,
            TEXT_COLOR,
            0.0,
        ));
    }
    items
}

fn text_item(
    measurer: &dyn TextMeasurer,
    text: String,
    x: f64,
    y: f64,
    style: TextStyle,
    color: Color,
    letter_spacing: f64,
) -> TextItem {
    let metrics = measure_or_estimate(measurer, &text, &style);
    let tracking = letter_spacing * text.chars().count() as f64;
    TextItem {
        baseline: (y + metrics.ascent).round(),
        width: metrics.width + tracking,
        text,
        x,
        y,
        style,
        color,
        letter_spacing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_splits_brand_and_model() {
        assert_eq!(
            header_lines(Some("BMW M4 Competition")),
            ("BMW".to_string(), "M4 COMPETITION".to_string())
        );
        assert_eq!(
            header_lines(Some("Koenigsegg")),
            ("KOENIGSEGG".to_string(), "MODEL".to_string())
        );
        assert_eq!(
            header_lines(None),
            ("CAR".to_string(), "MODEL".to_string())
        );
        assert_eq!(
            header_lines(Some("   ")),
            ("BRAND".to_string(), "MODEL".to_string())
        );
    }

    #[test]
    fn thumbnail_never_upscales() {
        assert_eq!(thumbnail_size(300, 200, 720, 412), (300, 200));
        assert_eq!(thumbnail_size(1440, 412, 720, 412), (720, 206));
        assert_eq!(thumbnail_size(1000, 2000, 720, 412), (206, 412));
        assert_eq!(thumbnail_size(0, 10, 720, 412), (0, 10));
    }
}
