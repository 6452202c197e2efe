//! Static knowledge base of known vehicles, used only to fill gaps left by extraction.
//!
//! Records live in `data/fallback.json` (embedded at compile time). The table is append-only:
//! lookups scan records in file order, so new entries go at the end.

use crate::error::{Error, Result};
use crate::spec::{Attribute, VehicleSpec};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::OnceLock;

const BUILTIN_JSON: &str = include_str!("../data/fallback.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FallbackRecord {
    pub key: String,
    pub model: String,
    pub engine: String,
    pub power: String,
    pub torque: String,
    pub acceleration: String,
    pub top_speed: String,
    pub weight: String,
    pub year: String,
    pub country: String,
}

impl FallbackRecord {
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Model => &self.model,
            Attribute::Engine => &self.engine,
            Attribute::Power => &self.power,
            Attribute::Torque => &self.torque,
            Attribute::Acceleration => &self.acceleration,
            Attribute::TopSpeed => &self.top_speed,
            Attribute::Weight => &self.weight,
            Attribute::Year => &self.year,
            Attribute::Country => &self.country,
        }
    }

    pub fn to_spec(&self) -> VehicleSpec {
        let mut spec = VehicleSpec::new();
        for attribute in Attribute::ALL {
            spec.set(attribute, self.get(attribute));
        }
        spec
    }
}

#[derive(Debug, Clone, Default)]
pub struct FallbackKnowledgeBase {
    records: Vec<FallbackRecord>,
    by_key: FxHashMap<String, usize>,
}

impl FallbackKnowledgeBase {
    /// Validates `records`; keys are normalized to trimmed lowercase.
    pub fn from_records(mut records: Vec<FallbackRecord>) -> Result<Self> {
        let mut by_key = FxHashMap::default();
        for (idx, record) in records.iter_mut().enumerate() {
            if let Some(missing) = Attribute::ALL
                .into_iter()
                .find(|a| record.get(*a).trim().is_empty())
            {
                return Err(Error::IncompleteFallbackRecord {
                    key: record.key.clone(),
                    attribute: missing.key().to_string(),
                });
            }
            record.key = record.key.trim().to_lowercase();
            if by_key.insert(record.key.clone(), idx).is_some() {
                return Err(Error::DuplicateFallbackKey {
                    key: record.key.clone(),
                });
            }
        }
        Ok(Self { records, by_key })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FallbackRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The embedded table, decoded once per process.
    pub fn builtin() -> &'static FallbackKnowledgeBase {
        static BUILTIN: OnceLock<FallbackKnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_json(BUILTIN_JSON).unwrap_or_else(|err| {
                tracing::error!(%err, "embedded fallback table is invalid; using an empty table");
                Self::default()
            })
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FallbackRecord] {
        &self.records
    }

    /// Record whose key equals the normalized query.
    pub fn exact(&self, key: &str) -> Option<&FallbackRecord> {
        let key = key.trim().to_lowercase();
        self.by_key.get(&key).map(|idx| &self.records[*idx])
    }

    /// Exact key first, otherwise the first record (table order) whose key contains `brand`.
    pub fn lookup(&self, key: &str, brand: &str) -> Option<&FallbackRecord> {
        if let Some(record) = self.exact(key) {
            return Some(record);
        }
        let brand = brand.trim().to_lowercase();
        if brand.is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.key.contains(&brand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_decodes() {
        let kb = FallbackKnowledgeBase::builtin();
        assert_eq!(kb.len(), 5);
        let m4 = kb.exact("BMW M4").expect("bmw m4 record");
        assert_eq!(m4.power, "503 HP");
        assert_eq!(m4.country, "GERMANY");
    }

    #[test]
    fn brand_substring_lookup_takes_first_record_in_table_order() {
        let kb = FallbackKnowledgeBase::builtin();
        let record = kb.lookup("bmw x5", "BMW").expect("brand match");
        assert_eq!(record.key, "bmw m4");
        assert_eq!(kb.lookup("lada niva", "lada"), None);
        assert_eq!(kb.lookup("", ""), None);
    }

    #[test]
    fn mixed_case_keys_match_both_lookups() {
        let json = r#"[{"key":" Nissan GT-R ","model":"Nissan GT-R","engine":"3.8L TwinTurbo V6",
            "power":"565 HP","torque":"633 Nm","acceleration":"2.9 s","top_speed":"315 km/h",
            "weight":"1752 kg","year":"2017-2022","country":"JAPAN"}]"#;
        let kb = FallbackKnowledgeBase::from_json(json).expect("valid table");
        assert_eq!(kb.records()[0].key, "nissan gt-r");
        assert!(kb.exact("NISSAN GT-R").is_some());
        let record = kb.lookup("nissan skyline", "Nissan").expect("brand match");
        assert_eq!(record.power, "565 HP");
    }

    #[test]
    fn incomplete_records_are_rejected() {
        let json = r#"[{"key":"x y","model":"X Y","engine":"","power":"1 HP","torque":"1 Nm",
            "acceleration":"3 s","top_speed":"200 km/h","weight":"1000 kg","year":"2020-2021",
            "country":"JAPAN"}]"#;
        let err = FallbackKnowledgeBase::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            Error::IncompleteFallbackRecord { ref attribute, .. } if attribute == "engine"
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let record = FallbackKnowledgeBase::builtin().records()[0].clone();
        let err = FallbackKnowledgeBase::from_records(vec![record.clone(), record]).unwrap_err();
        assert!(matches!(err, Error::DuplicateFallbackKey { .. }));
    }
}
