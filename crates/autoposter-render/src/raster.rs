use crate::text::FontBook;
use crate::theme::BACKGROUND;
use crate::{RenderError, Result};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

pub const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Picks the encoding from the file extension; anything other than `.jpg`/`.jpeg` is PNG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg" | "jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }
}

/// Rasterizes an SVG document to an opaque RGB image at 1:1 scale.
pub fn rasterize(svg: &str, fonts: &FontBook) -> Result<RgbImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb = fonts.database();
    opt.font_family = fonts.family().to_string();

    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::SvgParse(e.to_string()))?;
    let size = tree.size().to_int_size();
    let (w, h) = (size.width(), size.height());

    let mut pixmap = tiny_skia::Pixmap::new(w, h).ok_or(RenderError::PixmapAlloc)?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        BACKGROUND.r,
        BACKGROUND.g,
        BACKGROUND.b,
        255,
    ));
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // The background is opaque, so premultiplied RGBA equals straight RGB here.
    let mut rgb = Vec::with_capacity((w as usize) * (h as usize) * 3);
    for px in pixmap.data().chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    RgbImage::from_raw(w, h, rgb).ok_or(RenderError::PixmapAlloc)
}

pub fn encode(image: &RgbImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Png => image
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .map_err(RenderError::Encode)?,
        OutputFormat::Jpeg => {
            let mut enc =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            enc.encode(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(RenderError::Encode)?;
        }
    }
    Ok(out)
}

/// Encodes fully in memory, then writes `path` in one call; a failed encode leaves no file.
pub fn save(image: &RgbImage, path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = encode(image, format)?;
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), ?format, "poster saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPG")), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("a.jpeg")), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("poster")), OutputFormat::Png);
    }

    #[test]
    fn encodings_carry_their_signatures() {
        let img = RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let png = encode(&img, OutputFormat::Png).expect("png");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let jpeg = encode(&img, OutputFormat::Jpeg).expect("jpeg");
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn rejects_malformed_svg() {
        let err = rasterize("<svg", &FontBook::empty()).unwrap_err();
        assert!(matches!(err, RenderError::SvgParse(_)));
    }
}
