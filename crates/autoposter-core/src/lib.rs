#![forbid(unsafe_code)]

//! Vehicle specification extraction (headless, no I/O).
//!
//! Design goals:
//! - ordered heuristic rules with numeric plausibility checks, one generic matcher
//! - static, read-only tables (pattern catalog, brand countries, fallback records)
//! - deterministic outputs: the same text always yields the same [`VehicleSpec`]

pub mod catalog;
pub mod country;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod merge;
pub mod query;
pub mod spec;

pub use country::{Country, country_for_brand, country_for_query};
pub use error::{Error, Result};
pub use extract::{extract, extract_model_name, extract_page};
pub use fallback::{FallbackKnowledgeBase, FallbackRecord};
pub use merge::{complete, merge};
pub use query::CarQuery;
pub use spec::{Attribute, NOT_AVAILABLE, VehicleSpec};
