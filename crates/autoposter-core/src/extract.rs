use crate::catalog::{self, AttributeRules};
use crate::spec::{Attribute, VehicleSpec};
use regex::Captures;

/// Recovers whatever attributes the catalog can find in `text`.
///
/// Attributes are extracted independently; a miss simply leaves that attribute absent.
pub fn extract(text: &str) -> VehicleSpec {
    let mut spec = VehicleSpec::new();
    for rules in catalog::catalog() {
        if let Some(value) = extract_attribute(rules, text) {
            tracing::debug!(attribute = %rules.attribute, value = %value, "found");
            spec.set(rules.attribute, value);
        }
    }
    tracing::info!(
        "extracted {}/{} specifications",
        spec.tracked_count(),
        Attribute::TRACKED.len()
    );
    spec
}

/// [`extract`] plus the model name read from the page heading.
pub fn extract_page(heading: Option<&str>, text: &str) -> VehicleSpec {
    let mut spec = extract(text);
    if let Some(model) = heading.and_then(extract_model_name) {
        tracing::info!(model = %model, "model name");
        spec.set(Attribute::Model, model);
    }
    spec
}

/// Strips trailing boilerplate ("… specifications: …", "… versions & types …") from a heading.
pub fn extract_model_name(heading: &str) -> Option<String> {
    let mut name = heading.trim().to_string();
    for re in catalog::model_suffix_patterns() {
        name = re.replace(&name, "").into_owned();
    }
    let name = collapse_whitespace(&name);
    (!name.is_empty()).then_some(name)
}

/// Runs one attribute's rules in priority order; the first plausible match wins.
pub fn extract_attribute(rules: &AttributeRules, text: &str) -> Option<String> {
    for rule in &rules.rules {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        if let Some(range) = rule.plausibility {
            let value = caps
                .get(1)
                .and_then(|m| m.as_str().trim().parse::<f64>().ok());
            match value {
                Some(v) if range.contains(v) => {}
                _ => {
                    tracing::debug!(
                        attribute = %rules.attribute,
                        captured = caps.get(1).map(|m| m.as_str()).unwrap_or(""),
                        "implausible match skipped"
                    );
                    continue;
                }
            }
        }
        let value = format_value(&caps, rules.suffix);
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

fn format_value(caps: &Captures<'_>, suffix: Option<&str>) -> String {
    let joined = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let value = collapse_whitespace(&joined);
    match suffix {
        Some(unit) if !value.is_empty() && !ends_with_unit(&value, unit) => {
            format!("{value} {unit}")
        }
        _ => value,
    }
}

fn ends_with_unit(value: &str, unit: &str) -> bool {
    value
        .to_ascii_lowercase()
        .ends_with(&unit.to_ascii_lowercase())
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
