use serde::{Deserialize, Serialize};
use std::fmt;

/// Display value used for an attribute nobody could fill.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Model,
    Engine,
    Power,
    Torque,
    Acceleration,
    TopSpeed,
    Weight,
    Year,
    Country,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Attribute::Model,
        Attribute::Engine,
        Attribute::Power,
        Attribute::Torque,
        Attribute::Acceleration,
        Attribute::TopSpeed,
        Attribute::Weight,
        Attribute::Year,
        Attribute::Country,
    ];

    /// The attributes recovered from page text (and gap-filled by the fallback merge).
    pub const TRACKED: [Attribute; 7] = [
        Attribute::Engine,
        Attribute::Power,
        Attribute::Torque,
        Attribute::Acceleration,
        Attribute::TopSpeed,
        Attribute::Weight,
        Attribute::Year,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Attribute::Model => "model",
            Attribute::Engine => "engine",
            Attribute::Power => "power",
            Attribute::Torque => "torque",
            Attribute::Acceleration => "acceleration",
            Attribute::TopSpeed => "top_speed",
            Attribute::Weight => "weight",
            Attribute::Year => "year",
            Attribute::Country => "country",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured vehicle attributes.
///
/// Every present value is non-empty and already carries its unit (`"503 HP"`, `"250 km/h"`);
/// an unknown attribute is absent rather than empty. [`VehicleSpec::set`] enforces this by
/// dropping blank values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVehicleSpec")]
pub struct VehicleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    torque: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    acceleration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl VehicleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`VehicleSpec::set`].
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    fn slot(&self, attribute: Attribute) -> &Option<String> {
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

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<String> {
        match attribute {
            Attribute::Model => &mut self.model,
            Attribute::Engine => &mut self.engine,
            Attribute::Power => &mut self.power,
            Attribute::Torque => &mut self.torque,
            Attribute::Acceleration => &mut self.acceleration,
            Attribute::TopSpeed => &mut self.top_speed,
            Attribute::Weight => &mut self.weight,
            Attribute::Year => &mut self.year,
            Attribute::Country => &mut self.country,
        }
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.slot(attribute).as_deref()
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.slot(attribute).is_some()
    }

    /// Stores a trimmed value. Blank input clears the attribute instead.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        *self.slot_mut(attribute) = if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(value)
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn remove(&mut self, attribute: Attribute) -> Option<String> {
        self.slot_mut(attribute).take()
    }

    /// Value for display, with `"N/A"` standing in for unknown attributes.
    pub fn display(&self, attribute: Attribute) -> &str {
        self.get(attribute).unwrap_or(NOT_AVAILABLE)
    }

    pub fn is_empty(&self) -> bool {
        Attribute::ALL.iter().all(|a| !self.contains(*a))
    }

    /// Number of tracked attributes present (the `N` of "extracted N/7").
    pub fn tracked_count(&self) -> usize {
        Attribute::TRACKED
            .iter()
            .filter(|a| self.contains(**a))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(|a| self.get(a).map(|v| (a, v)))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVehicleSpec {
    model: Option<String>,
    engine: Option<String>,
    power: Option<String>,
    torque: Option<String>,
    acceleration: Option<String>,
    top_speed: Option<String>,
    weight: Option<String>,
    year: Option<String>,
    country: Option<String>,
}

impl From<RawVehicleSpec> for VehicleSpec {
    fn from(raw: RawVehicleSpec) -> Self {
        let mut spec = VehicleSpec::default();
        let pairs = [
            (Attribute::Model, raw.model),
            (Attribute::Engine, raw.engine),
            (Attribute::Power, raw.power),
            (Attribute::Torque, raw.torque),
            (Attribute::Acceleration, raw.acceleration),
            (Attribute::TopSpeed, raw.top_speed),
            (Attribute::Weight, raw.weight),
            (Attribute::Year, raw.year),
            (Attribute::Country, raw.country),
        ];
        for (attribute, value) in pairs {
            if let Some(value) = value {
                spec.set(attribute, value);
            }
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        let mut spec = VehicleSpec::new().with(Attribute::Power, "503 HP");
        spec.set(Attribute::Power, "   ");
        assert_eq!(spec.get(Attribute::Power), None);
        assert!(spec.is_empty());
    }

    #[test]
    fn display_defaults_to_not_available() {
        let spec = VehicleSpec::new().with(Attribute::Torque, " 650 Nm ");
        assert_eq!(spec.display(Attribute::Torque), "650 Nm");
        assert_eq!(spec.display(Attribute::Weight), "N/A");
        assert_eq!(spec.tracked_count(), 1);
    }

    #[test]
    fn json_omits_absent_keys_and_drops_blank_ones() {
        let spec = VehicleSpec::new()
            .with(Attribute::Model, "BMW M4")
            .with(Attribute::TopSpeed, "250 km/h");
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"model":"BMW M4","top_speed":"250 km/h"}"#);

        let parsed: VehicleSpec =
            serde_json::from_str(r#"{"model":"BMW M4","power":"","year":"2021-2024"}"#).unwrap();
        assert_eq!(parsed.get(Attribute::Power), None);
        assert_eq!(parsed.get(Attribute::Year), Some("2021-2024"));
    }
}
