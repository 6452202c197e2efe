use super::{FontFamily, TextMeasurer, TextMetrics, TextStyle};
use std::path::PathBuf;
use std::sync::Arc;
use usvg::fontdb;

pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

#[derive(Debug, Clone)]
pub struct FontOptions {
    /// Family requested for every poster text element; `sans-serif` is the fallback.
    pub family: String,
    /// Extra font files loaded on top of (or instead of) the system fonts.
    pub font_files: Vec<PathBuf>,
    pub load_system_fonts: bool,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            font_files: Vec::new(),
            load_system_fonts: true,
        }
    }
}

/// Font database shared by the rasterizer and [`FontTextMeasurer`], so measured widths match
/// what ends up on the canvas.
#[derive(Debug, Clone)]
pub struct FontBook {
    db: Arc<fontdb::Database>,
    family: String,
}

impl FontBook {
    pub fn load(options: &FontOptions) -> Self {
        let mut db = fontdb::Database::new();
        if options.load_system_fonts {
            db.load_system_fonts();
        }
        for path in &options.font_files {
            if let Err(err) = db.load_font_file(path) {
                tracing::warn!(path = %path.display(), %err, "failed to load font file");
            }
        }
        // Map the generic family onto the requested one so unresolved names still land on it.
        let has_family = db
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| *name == options.family));
        let first_family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
        if has_family {
            db.set_sans_serif_family(options.family.clone());
        } else if let Some(name) = first_family {
            tracing::warn!(wanted = %options.family, using = %name, "font family not found");
            db.set_sans_serif_family(name);
        }
        tracing::debug!(faces = db.len(), family = %options.family, "font database ready");
        Self {
            db: Arc::new(db),
            family: options.family.clone(),
        }
    }

    /// A book with no faces: text is measured by estimate and not drawn.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    pub fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    fn face_id(&self, family: FontFamily) -> Option<fontdb::ID> {
        let families = [fontdb::Family::Name(&self.family), fontdb::Family::SansSerif];
        let weight = match family {
            FontFamily::Bold => fontdb::Weight::BOLD,
            FontFamily::Regular => fontdb::Weight::NORMAL,
        };
        self.db.query(&fontdb::Query {
            families: &families,
            weight,
            ..fontdb::Query::default()
        })
    }
}

/// Advance-width measurer over a [`FontBook`]. Kerning is ignored.
#[derive(Debug, Clone)]
pub struct FontTextMeasurer {
    book: FontBook,
}

impl FontTextMeasurer {
    pub fn new(book: FontBook) -> Self {
        Self { book }
    }
}

impl TextMeasurer for FontTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics> {
        let id = self.book.face_id(style.family)?;
        self.book
            .db
            .with_face_data(id, |data, index| {
                let face = ttf_parser::Face::parse(data, index).ok()?;
                let units_per_em = f64::from(face.units_per_em());
                if units_per_em <= 0.0 {
                    return None;
                }
                let scale = style.font_size / units_per_em;
                let advance: f64 = text
                    .chars()
                    .map(|ch| {
                        let glyph = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
                        f64::from(face.glyph_hor_advance(glyph).unwrap_or(0))
                    })
                    .sum();
                Some(TextMetrics {
                    width: advance * scale,
                    ascent: f64::from(face.ascender()) * scale,
                    descent: -f64::from(face.descender()) * scale,
                })
            })
            .flatten()
    }
}
