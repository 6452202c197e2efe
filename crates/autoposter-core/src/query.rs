use std::fmt;

/// A `"Brand Model"` request as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    text: String,
    brand: String,
    model: String,
}

impl CarQuery {
    pub fn new(text: &str) -> Self {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let (brand, model) = match text.split_once(' ') {
            Some((brand, model)) => (brand.to_string(), model.to_string()),
            None => (text.clone(), String::new()),
        };
        Self { text, brand, model }
    }

    /// The query with whitespace collapsed, original casing kept.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First token of the query.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Everything after the brand token; empty for single-word queries.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Normalized knowledge-base key: lowercased and trimmed.
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Default poster file name, `poster_<query with spaces as underscores>.png`.
    pub fn default_output_name(&self) -> String {
        format!("poster_{}.png", self.text.replace(' ', "_"))
    }
}

impl fmt::Display for CarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
