use super::*;

struct Unavailable;

impl TextMeasurer for Unavailable {
    fn measure(&self, _text: &str, _style: &TextStyle) -> Option<TextMetrics> {
        None
    }
}

#[test]
fn deterministic_widths_scale_with_size_and_weight() {
    let m = DeterministicTextMeasurer::default();
    let regular = m.metrics("POWER", &TextStyle::regular(20.0));
    let bold = m.metrics("POWER", &TextStyle::bold(20.0));
    assert!((regular.width - 60.0).abs() < 1e-9);
    assert!((bold.width - 66.0).abs() < 1e-9);
    assert!((regular.ascent - 16.0).abs() < 1e-9);
    assert!((regular.height() - 20.0).abs() < 1e-9);
}

#[test]
fn fit_keeps_start_size_when_text_fits() {
    let m = DeterministicTextMeasurer::default();
    assert_eq!(fit(&m, "M4", FontFamily::Bold, 680.0, 72.0), 72.0);
}

#[test]
fn fit_steps_down_until_text_fits() {
    let m = DeterministicTextMeasurer::default();
    let text = "M4 COMPETITION XDRIVE";
    let size = fit(&m, text, FontFamily::Bold, 680.0, 72.0);
    assert!(size < 72.0);
    assert!(size > FIT_FLOOR);
    assert!(m.metrics(text, &TextStyle::bold(size)).width <= 680.0);
    // One step larger would not have fit.
    assert!(m.metrics(text, &TextStyle::bold(size + FIT_STEP)).width > 680.0);
}

#[test]
fn fit_stops_at_floor_for_text_that_never_fits() {
    let m = DeterministicTextMeasurer::default();
    let text = "A".repeat(200);
    assert_eq!(fit(&m, &text, FontFamily::Bold, 680.0, 72.0), FIT_FLOOR);
    // The floor never lifts a small start size.
    assert_eq!(fit(&m, &text, FontFamily::Bold, 680.0, 12.0), 12.0);
}

#[test]
fn fit_falls_back_to_floor_without_measurement() {
    assert_eq!(fit(&Unavailable, "BMW", FontFamily::Bold, 680.0, 72.0), FIT_FLOOR);
}

#[test]
fn fit_never_exceeds_start_size() {
    let m = DeterministicTextMeasurer::default();
    for start in [10.0, 20.0, 21.0, 48.0, 72.0, 80.0] {
        for width in [0.0, 50.0, 300.0, 1000.0] {
            let size = fit(&m, "PORSCHE 911 GT3 RS", FontFamily::Bold, width, start);
            assert!(size <= start, "start {start} width {width} gave {size}");
            if size > FIT_FLOOR {
                let w = m.metrics("PORSCHE 911 GT3 RS", &TextStyle::bold(size)).width;
                assert!(w <= width);
            }
        }
    }
}

#[test]
fn truncate_returns_fitting_text_unchanged() {
    let m = DeterministicTextMeasurer::default();
    let style = TextStyle::regular(20.0);
    assert_eq!(truncate(&m, "503 HP", &style, 200.0), "503 HP");
    assert_eq!(truncate(&m, "503 HP", &style, 0.0), "");
}

#[test]
fn truncate_appends_ellipsis() {
    let m = DeterministicTextMeasurer::default();
    let style = TextStyle::regular(20.0);
    // 12 px per column: 61 px holds four characters plus the ellipsis.
    let out = truncate(&m, "3.0L TwinTurbo", &style, 61.0);
    assert_eq!(out, "3.0L…");
    assert_eq!(truncate(&m, "3.0L TwinTurbo", &style, 5.0), "3");
}

#[test]
fn truncate_is_idempotent() {
    let m = DeterministicTextMeasurer::default();
    let style = TextStyle::regular(20.0);
    for text in ["", "3.0L TwinTurbo inline-6", "N/A", "2.5L TFSI", "x"] {
        for width in [-1.0, 0.0, 5.0, 24.0, 60.0, 100.0, 1000.0] {
            let once = truncate(&m, text, &style, width);
            let twice = truncate(&m, &once, &style, width);
            assert_eq!(once, twice, "text {text:?} width {width}");
        }
    }
}

#[test]
fn truncate_estimates_without_measurement() {
    let style = TextStyle::regular(20.0);
    assert_eq!(truncate(&Unavailable, "3.0L TwinTurbo", &style, 61.0), "3.0L…");
}

#[test]
fn empty_font_book_measures_nothing() {
    let m = FontTextMeasurer::new(FontBook::empty());
    assert_eq!(m.measure("BMW", &TextStyle::bold(80.0)), None);
}

#[test]
fn system_faces_measure_advance_widths() {
    let book = FontBook::load(&FontOptions::default());
    if book.is_empty() {
        return;
    }
    let m = FontTextMeasurer::new(book);
    let small = m.measure("BMW", &TextStyle::bold(40.0)).expect("bold face");
    let large = m.measure("BMW", &TextStyle::bold(80.0)).expect("bold face");
    assert!(small.width > 0.0);
    assert!((large.width / small.width - 2.0).abs() < 1e-9);
    assert!(large.ascent > 0.0 && large.descent >= 0.0);
    assert!(large.ascent < 80.0 * 1.5);

    let regular = m.measure("BMW", &TextStyle::regular(80.0)).expect("regular face");
    assert!(large.width >= regular.width);
}

#[test]
fn unknown_family_falls_back_to_an_available_face() {
    let options = FontOptions {
        family: "No Such Family 7f3a".to_string(),
        ..FontOptions::default()
    };
    let book = FontBook::load(&options);
    if book.is_empty() {
        return;
    }
    let m = FontTextMeasurer::new(book);
    let metrics = m
        .measure("M4 COMPETITION", &TextStyle::bold(72.0))
        .expect("sans-serif fallback face");
    assert!(metrics.width > 0.0);
}
