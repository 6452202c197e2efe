use autoposter_core::{Attribute, NOT_AVAILABLE, VehicleSpec};
use autoposter_render::layout::{layout_poster, place_photo};
use autoposter_render::model::{PosterLayout, Rect};
use autoposter_render::text::{DeterministicTextMeasurer, ELLIPSIS, TextMeasurer};

fn bmw_spec() -> VehicleSpec {
    VehicleSpec::new()
        .with(Attribute::Model, "BMW M4 Competition")
        .with(Attribute::Year, "2021-2024")
        .with(Attribute::Engine, "3.0L TwinTurbo inline-6")
        .with(Attribute::Power, "503 HP")
        .with(Attribute::Torque, "650 Nm")
        .with(Attribute::Acceleration, "3.5 s")
        .with(Attribute::TopSpeed, "290 km/h")
        .with(Attribute::Weight, "1725 kg")
        .with(Attribute::Country, "GERMANY")
}

fn layout(spec: &VehicleSpec, photo: Option<(u32, u32)>) -> PosterLayout {
    layout_poster(spec, photo, &DeterministicTextMeasurer::default())
}

fn text_at<'a>(layout: &'a PosterLayout, x: f64, y: f64) -> &'a str {
    layout
        .table
        .iter()
        .find(|t| t.x == x && t.y == y)
        .map(|t| t.text.as_str())
        .unwrap_or_else(|| panic!("no table text at ({x}, {y})"))
}

#[test]
fn header_and_band_stack_from_measured_extents() {
    let l = layout(&bmw_spec(), None);
    assert_eq!(l.width, 800);
    assert_eq!(l.height, 1200);

    assert_eq!(l.brand.text, "BMW");
    assert_eq!((l.brand.x, l.brand.y), (60.0, 50.0));
    assert_eq!(l.brand.style.font_size, 80.0);
    assert_eq!(l.brand.letter_spacing, 4.0);
    // Estimated ascent is 0.8 em.
    assert_eq!(l.brand.baseline, 114.0);

    assert_eq!(l.model.text, "M4 COMPETITION");
    assert_eq!(l.model.y, 124.0);
    assert_eq!(l.model.style.font_size, 72.0);

    assert_eq!(l.photo_band, Rect::new(0.0, 212.0, 800.0, 456.0));
    assert_eq!(l.photo_area, Rect::new(40.0, 234.0, 720.0, 412.0));
    assert_eq!(l.photo, None);
    assert_eq!(l.geometry.table_top, 723.0);
}

#[test]
fn long_model_line_is_fitted_to_the_canvas() {
    let spec = VehicleSpec::new().with(Attribute::Model, "Mercedes-AMG GT Black Series Coupe Edition");
    let l = layout(&spec, None);
    assert!(l.model.style.font_size < 72.0);
    assert!(l.model.width <= 680.0 || l.model.style.font_size == 20.0);
}

#[test]
fn table_columns_are_placed_right_to_left_first() {
    let l = layout(&bmw_spec(), None);
    let g = l.geometry;
    assert_eq!(g.year_x, 60.0);
    assert_eq!(g.divider_x, 205.0);
    assert_eq!(g.left_label_x, 235.0);
    assert_eq!(g.flag_x, 740.0);
    assert_eq!(g.flag_y, 773.0);
    // Widest right value "290 km/h" is 96 px; widest right label "0-100 km/h" is 132 px.
    assert_eq!(g.right_value_x, 630.0);
    assert_eq!(g.right_label_x, 478.0);
    // Left labels are 80 px wide at most.
    assert_eq!(g.left_value_x, 335.0);
    assert_eq!(g.left_value_max_width, 108.0);

    assert_eq!(l.divider.x1, 205.0);
    assert_eq!(l.divider.y1, 718.0);
    assert_eq!(l.divider.y2, 917.0);
}

#[test]
fn rows_share_vertical_positions() {
    let l = layout(&bmw_spec(), None);
    let g = l.geometry;
    assert_eq!(text_at(&l, 60.0, 723.0), "YEAR");
    assert_eq!(text_at(&l, 60.0, 755.0), "2021-2024");
    assert_eq!(text_at(&l, 235.0, 723.0), "Engine");
    assert_eq!(text_at(&l, 235.0, 769.0), "Power");
    assert_eq!(text_at(&l, 235.0, 815.0), "Torque");
    assert_eq!(text_at(&l, 235.0, 861.0), "Weight");
    assert_eq!(text_at(&l, g.left_value_x, 769.0), "503 HP");
    assert_eq!(text_at(&l, g.right_label_x, 723.0), "0-100 km/h");
    assert_eq!(text_at(&l, g.right_value_x, 723.0), "3.5 s");
    assert_eq!(text_at(&l, g.right_label_x, 769.0), "Top speed");
    assert_eq!(text_at(&l, g.right_value_x, 769.0), "290 km/h");
}

#[test]
fn long_left_values_are_truncated_before_the_right_column() {
    let measurer = DeterministicTextMeasurer::default();
    let l = layout(&bmw_spec(), None);
    let g = l.geometry;
    let engine = text_at(&l, g.left_value_x, 723.0);
    assert_eq!(engine, "3.0L Twi…");
    assert!(engine.ends_with(ELLIPSIS));
    for item in l.table.iter().filter(|t| t.x == g.left_value_x) {
        let width = measurer
            .measure(&item.text, &item.style)
            .expect("deterministic")
            .width;
        assert!(width <= g.left_value_max_width, "{:?} overflows", item.text);
        assert!(item.x + width + 35.0 <= g.right_label_x);
    }
}

#[test]
fn right_column_never_overlaps_the_flag() {
    let spec = bmw_spec().with(Attribute::TopSpeed, "330 km/h (electronically limited)");
    let l = layout(&spec, None);
    let g = l.geometry;
    let widest_right = l
        .table
        .iter()
        .filter(|t| t.x == g.right_value_x)
        .map(|t| t.width)
        .fold(0.0, f64::max);
    assert!(g.right_value_x + widest_right <= g.flag_x - 14.0 + 1.0);
    assert!(g.right_label_x < g.right_value_x);
}

#[test]
fn empty_spec_uses_placeholders_and_no_flag() {
    let l = layout(&VehicleSpec::new(), None);
    assert_eq!(l.brand.text, "CAR");
    assert_eq!(l.model.text, "MODEL");
    assert!(l.flag.is_none());
    let values = l
        .table
        .iter()
        .filter(|t| t.style.family == autoposter_render::text::FontFamily::Regular)
        .collect::<Vec<_>>();
    assert_eq!(values.len(), 7);
    assert!(values.iter().all(|t| t.text == NOT_AVAILABLE));
}

#[test]
fn flag_follows_the_country_attribute() {
    let l = layout(&bmw_spec(), None);
    let flag = l.flag.expect("flag");
    assert_eq!(flag.country, "GERMANY");
    assert_eq!(flag.bounds, Rect::new(740.0, 773.0, 50.0, 35.0));

    let unknown = layout(&bmw_spec().with(Attribute::Country, "ATLANTIS"), None);
    assert!(unknown.flag.expect("border box").shapes.is_empty());
}

#[test]
fn photo_is_scaled_down_and_centered() {
    let band = Rect::new(0.0, 212.0, 800.0, 456.0);
    // Wide photo: limited by width.
    assert_eq!(
        place_photo(1600, 900, band),
        Rect::new(40.0, 237.0, 720.0, 405.0)
    );
    // Tall photo: limited by height.
    assert_eq!(
        place_photo(1000, 2000, band),
        Rect::new(297.0, 234.0, 206.0, 412.0)
    );
    // Small photo: never enlarged.
    assert_eq!(
        place_photo(200, 100, band),
        Rect::new(300.0, 390.0, 200.0, 100.0)
    );
}

#[test]
fn placed_photo_stays_inside_the_inset_area() {
    let l = layout(&bmw_spec(), Some((4000, 3000)));
    let photo = l.photo.expect("photo rect");
    assert!(l.photo_area.contains_rect(&photo));
    for (w, h) in [(1, 1), (7, 3000), (3000, 7), (720, 412), (721, 413), (1440, 824)] {
        let r = place_photo(w, h, l.photo_band);
        assert!(l.photo_area.contains_rect(&r), "{w}x{h} -> {r:?}");
        assert!(r.width <= f64::from(w) && r.height <= f64::from(h));
    }
}
