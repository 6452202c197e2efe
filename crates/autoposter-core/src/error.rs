pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fallback table JSON error: {0}")]
    FallbackJson(#[from] serde_json::Error),

    #[error("fallback record {key:?} is missing {attribute}")]
    IncompleteFallbackRecord { key: String, attribute: String },

    #[error("duplicate fallback record key: {key}")]
    DuplicateFallbackKey { key: String },
}
