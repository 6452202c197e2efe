#![forbid(unsafe_code)]

//! `autoposter` turns free-form vehicle descriptions into fixed-layout spec posters.
//!
//! Extraction and gap filling live in `autoposter-core` and are re-exported here; poster
//! rendering lives in `autoposter-render`.
//!
//! # Features
//!
//! - `render` (default): layout, SVG scene and PNG/JPEG output (`autoposter::render`)

pub use autoposter_core::*;

/// Extracts a spec from a page (heading plus body text) and completes it from `kb`.
pub fn build_spec(
    query: &CarQuery,
    heading: Option<&str>,
    text: &str,
    kb: &FallbackKnowledgeBase,
) -> VehicleSpec {
    complete(extract_page(heading, text), query, kb)
}

#[cfg(feature = "render")]
pub mod render {
    pub use autoposter_render::model::PosterLayout;
    pub use autoposter_render::text::{
        DeterministicTextMeasurer, FontBook, FontOptions, FontTextMeasurer, TextMeasurer,
    };
    pub use autoposter_render::{
        LayoutOptions, OutputFormat, Poster, RenderError, RenderOptions, render, write_poster,
    };

    use crate::{CarQuery, FallbackKnowledgeBase, VehicleSpec};
    use image::DynamicImage;
    use std::path::{Path, PathBuf};

    #[derive(Debug, thiserror::Error)]
    pub enum GenerateError {
        #[error("failed to load photo {}: {source}", path.display())]
        Photo {
            path: PathBuf,
            #[source]
            source: image::ImageError,
        },
        #[error(transparent)]
        Render(#[from] RenderError),
    }

    pub type Result<T> = std::result::Result<T, GenerateError>;

    pub fn load_photo(path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|source| GenerateError::Photo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Renders `spec` and writes it to `path`.
    ///
    /// This is the generation boundary: a failure is logged and reported as `None`, and no file
    /// is written in that case.
    pub fn generate_poster(
        spec: &VehicleSpec,
        photo: Option<&DynamicImage>,
        path: &Path,
        options: &RenderOptions,
    ) -> Option<PathBuf> {
        match write_poster(spec, photo, path, options) {
            Ok(_) => Some(path.to_path_buf()),
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "poster generation failed");
                None
            }
        }
    }

    /// Knowledge base plus render options, for callers producing many posters.
    #[derive(Clone)]
    pub struct PosterGenerator<'kb> {
        pub knowledge_base: &'kb FallbackKnowledgeBase,
        pub render: RenderOptions,
    }

    impl Default for PosterGenerator<'static> {
        fn default() -> Self {
            Self::new(FallbackKnowledgeBase::builtin())
        }
    }

    impl<'kb> PosterGenerator<'kb> {
        pub fn new(knowledge_base: &'kb FallbackKnowledgeBase) -> Self {
            Self {
                knowledge_base,
                render: RenderOptions::default(),
            }
        }

        /// Measures and draws with `fonts`; the output format override is kept.
        pub fn with_fonts(mut self, fonts: FontBook) -> Self {
            let format = self.render.format;
            self.render = RenderOptions::with_fonts(fonts);
            self.render.format = format;
            self
        }

        pub fn build_spec(&self, query: &CarQuery, heading: Option<&str>, text: &str) -> VehicleSpec {
            crate::build_spec(query, heading, text, self.knowledge_base)
        }

        /// Builds the spec and writes the poster; `output` defaults to the query's poster name.
        pub fn generate(
            &self,
            query: &CarQuery,
            heading: Option<&str>,
            text: &str,
            photo: Option<&DynamicImage>,
            output: Option<&Path>,
        ) -> Option<PathBuf> {
            let spec = self.build_spec(query, heading, text);
            let default_path;
            let path = match output {
                Some(path) => path,
                None => {
                    default_path = PathBuf::from(query.default_output_name());
                    default_path.as_path()
                }
            };
            generate_poster(&spec, photo, path, &self.render)
        }
    }
}
