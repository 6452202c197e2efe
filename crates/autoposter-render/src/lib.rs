#![forbid(unsafe_code)]

//! Poster typesetting for vehicle specs: layout on a fixed canvas, SVG scene, raster output.
//!
//! The pipeline is `layout_poster` -> `render_svg` -> `rasterize`; every stage is usable alone.

pub mod flag;
pub mod layout;
pub mod model;
pub mod raster;
pub mod svg;
pub mod text;
pub mod theme;

use crate::model::PosterLayout;
use crate::text::{DeterministicTextMeasurer, FontBook, FontTextMeasurer, TextMeasurer};
use autoposter_core::VehicleSpec;
use image::{DynamicImage, GenericImageView, RgbImage};
use std::path::Path;
use std::sync::Arc;

pub use layout::{layout_poster, place_photo};
pub use raster::{OutputFormat, encode, rasterize, save};
pub use svg::render_svg;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to parse poster SVG: {0}")]
    SvgParse(String),
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode photo for embedding: {0}")]
    PhotoEncode(#[source] image::ImageError),
    #[error("failed to encode poster image: {0}")]
    Encode(#[source] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

#[derive(Clone)]
pub struct RenderOptions {
    pub layout: LayoutOptions,
    /// Fonts handed to the rasterizer.
    pub fonts: FontBook,
    /// Output encoding; `None` picks it from the output file extension.
    pub format: Option<OutputFormat>,
}

impl RenderOptions {
    /// Layout measures with the same faces the rasterizer draws with.
    pub fn with_fonts(fonts: FontBook) -> Self {
        Self {
            layout: LayoutOptions {
                text_measurer: Arc::new(FontTextMeasurer::new(fonts.clone())),
            },
            fonts,
            format: None,
        }
    }

    /// No fonts at all: estimated metrics, and text is skipped by the rasterizer.
    pub fn deterministic() -> Self {
        Self {
            layout: LayoutOptions::default(),
            fonts: FontBook::empty(),
            format: None,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::deterministic()
    }
}

#[derive(Debug, Clone)]
pub struct Poster {
    pub layout: PosterLayout,
    pub svg: String,
    pub image: RgbImage,
}

pub fn render(
    spec: &VehicleSpec,
    photo: Option<&DynamicImage>,
    options: &RenderOptions,
) -> Result<Poster> {
    let layout = layout_poster(
        spec,
        photo.map(|p| p.dimensions()),
        options.layout.text_measurer.as_ref(),
    );
    let svg = render_svg(&layout, photo, options.fonts.family())?;
    let image = rasterize(&svg, &options.fonts)?;
    Ok(Poster { layout, svg, image })
}

/// Renders and saves in one step.
pub fn write_poster(
    spec: &VehicleSpec,
    photo: Option<&DynamicImage>,
    path: &Path,
    options: &RenderOptions,
) -> Result<Poster> {
    let poster = render(spec, photo, options)?;
    let format = options
        .format
        .unwrap_or_else(|| OutputFormat::from_path(path));
    save(&poster.image, path, format)?;
    Ok(poster)
}
