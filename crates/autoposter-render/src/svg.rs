use crate::model::{FlagLayout, PosterLayout, Rect, Shape, TextItem};
use crate::theme::{BACKGROUND, PHOTO_BAND_COLOR};
use crate::{RenderError, Result};
use base64::Engine as _;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::fmt::Write as _;
use std::io::Cursor;

/// Writes `layout` as a standalone SVG document.
///
/// `photo` is resampled to `layout.photo` and embedded as a PNG data URI; it is ignored when the
/// layout has no photo rectangle.
pub fn render_svg(
    layout: &PosterLayout,
    photo: Option<&DynamicImage>,
    font_family: &str,
) -> Result<String> {
    let mut out = String::with_capacity(4096);
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height,
    );

    push_rect(
        &mut out,
        &Rect::new(0.0, 0.0, f64::from(layout.width), f64::from(layout.height)),
        &BACKGROUND.to_string(),
    );
    push_rect(&mut out, &layout.photo_band, &PHOTO_BAND_COLOR.to_string());

    if let (Some(rect), Some(photo)) = (layout.photo, photo) {
        push_photo(&mut out, &rect, photo)?;
    }

    push_text(&mut out, &layout.brand, font_family);
    push_text(&mut out, &layout.model, font_family);

    let d = &layout.divider;
    let _ = write!(
        &mut out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt(d.x1),
        fmt(d.y1),
        fmt(d.x2),
        fmt(d.y2),
        d.color,
        fmt(d.width),
    );

    for item in &layout.table {
        push_text(&mut out, item, font_family);
    }

    if let Some(flag) = &layout.flag {
        push_flag(&mut out, flag);
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn push_rect(out: &mut String, rect: &Rect, fill: &str) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        fmt(rect.x),
        fmt(rect.y),
        fmt(rect.width),
        fmt(rect.height),
        fill,
    );
}

fn push_text(out: &mut String, item: &TextItem, font_family: &str) {
    if item.text.is_empty() {
        return;
    }
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-family="{}" font-weight="{}" font-size="{}" fill="{}""#,
        fmt(item.x),
        fmt(item.baseline),
        escape_xml(font_family),
        item.style.family.svg_weight(),
        fmt(item.style.font_size),
        item.color,
    );
    if item.letter_spacing != 0.0 {
        let _ = write!(out, r#" letter-spacing="{}""#, fmt(item.letter_spacing));
    }
    let _ = write!(out, r#" xml:space="preserve">{}</text>"#, escape_xml(&item.text));
}

fn push_photo(out: &mut String, rect: &Rect, photo: &DynamicImage) -> Result<()> {
    let (w, h) = (rect.width as u32, rect.height as u32);
    if w == 0 || h == 0 {
        return Ok(());
    }
    let resized = photo.resize_exact(w, h, FilterType::Lanczos3);
    // Keep transparency when the source has it; usvg composites it over the band.
    let resized = if photo.color().has_alpha() {
        DynamicImage::ImageRgba8(resized.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(resized.to_rgb8())
    };
    let mut png = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(RenderError::PhotoEncode)?;
    let data = base64::engine::general_purpose::STANDARD.encode(&png);
    let _ = write!(
        out,
        r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" xlink:href="data:image/png;base64,{}"/>"#,
        fmt(rect.x),
        fmt(rect.y),
        fmt(rect.width),
        fmt(rect.height),
        data,
    );
    Ok(())
}

fn push_flag(out: &mut String, flag: &FlagLayout) {
    let _ = write!(out, r#"<g class="flag" data-country="{}">"#, escape_xml(&flag.country));
    for shape in &flag.shapes {
        match shape {
            Shape::Rect { rect, fill } => push_rect(out, rect, &fill.to_string()),
            Shape::Circle { cx, cy, r, fill } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    fmt(*cx),
                    fmt(*cy),
                    fmt(*r),
                    fill,
                );
            }
        }
    }
    // 1px stroke centered on the pixel grid inside the box.
    let b = &flag.bounds;
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
        fmt(b.x + 0.5),
        fmt(b.y + 0.5),
        fmt(b.width - 1.0),
        fmt(b.height - 1.0),
        flag.border,
    );
    out.push_str("</g>");
}

pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }
    format!("{v}")
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
    out
}
