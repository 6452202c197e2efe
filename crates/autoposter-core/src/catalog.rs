//! Ordered extraction rules per attribute.
//!
//! Each attribute owns a list of [`ExtractionRule`]s tried in order. A rule fires on the leftmost
//! case-insensitive match of its pattern; when the rule carries a [`Plausibility`] range, the
//! first capture group must parse as a number inside it, otherwise the next rule is tried.

use crate::spec::Attribute;
use regex::Regex;
use std::sync::OnceLock;

/// Inclusive numeric bounds used to reject a structurally matched but implausible capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plausibility {
    pub min: f64,
    pub max: f64,
}

impl Plausibility {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const ACCELERATION_SECONDS: Plausibility = Plausibility::new(2.0, 15.0);
pub const TOP_SPEED_KMH: Plausibility = Plausibility::new(100.0, 500.0);
pub const WEIGHT_KG: Plausibility = Plausibility::new(800.0, 3000.0);

#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub pattern: Regex,
    pub plausibility: Option<Plausibility>,
}

#[derive(Debug, Clone)]
pub struct AttributeRules {
    pub attribute: Attribute,
    /// Unit appended to the captured value unless it already ends with it.
    pub suffix: Option<&'static str>,
    pub rules: Vec<ExtractionRule>,
}

struct RuleSource {
    pattern: &'static str,
    plausibility: Option<Plausibility>,
}

const fn rule(pattern: &'static str) -> RuleSource {
    RuleSource {
        pattern,
        plausibility: None,
    }
}

const fn bounded(pattern: &'static str, plausibility: Plausibility) -> RuleSource {
    RuleSource {
        pattern,
        plausibility: Some(plausibility),
    }
}

struct AttributeSource {
    attribute: Attribute,
    suffix: Option<&'static str>,
    case_insensitive: bool,
    rules: &'static [RuleSource],
}

const SOURCES: &[AttributeSource] = &[
    AttributeSource {
        attribute: Attribute::Engine,
        suffix: None,
        case_insensitive: true,
        rules: &[
            rule(
                r"(\d+\.?\d*\s*(?:L|l)\s+(?:V\d+|inline|boxer|turbo|twin[\s-]?turbo|bi[\s-]?turbo|TFSI|TSI)?[\w\s-]*)",
            ),
            rule(r"(\d+\.?\d*\s*cm3)"),
            rule(r"(\d+\.?\d*L?\s+(?:TFSI|TSI|TDI|FSI))"),
        ],
    },
    AttributeSource {
        attribute: Attribute::Power,
        suffix: Some("HP"),
        case_insensitive: true,
        rules: &[rule(r"(\d+)\s*(?:hp|ps)"), rule(r"power[:\s]+(\d+)\s*hp")],
    },
    AttributeSource {
        attribute: Attribute::Torque,
        suffix: Some("Nm"),
        case_insensitive: true,
        rules: &[rule(r"(\d+)\s*nm"), rule(r"torque[:\s]+(\d+)\s*nm")],
    },
    AttributeSource {
        attribute: Attribute::Acceleration,
        suffix: Some("s"),
        case_insensitive: true,
        rules: &[
            bounded(
                r"(\d+\.?\d*)\s*s(?:ec)?.*?(?:0[\s-]?100|hundred)",
                ACCELERATION_SECONDS,
            ),
            bounded(r"0[\s-]?100[^\d]*(\d+\.?\d*)\s*s", ACCELERATION_SECONDS),
        ],
    },
    AttributeSource {
        attribute: Attribute::TopSpeed,
        suffix: Some("km/h"),
        case_insensitive: true,
        rules: &[
            bounded(r"(\d+)\s*km/h.*?(?:top|max).*?speed", TOP_SPEED_KMH),
            bounded(r"(?:top|max)\s*speed[^\d]*(\d+)\s*km/h", TOP_SPEED_KMH),
        ],
    },
    AttributeSource {
        attribute: Attribute::Weight,
        suffix: Some("kg"),
        case_insensitive: true,
        rules: &[
            bounded(r"(\d+)\s*kg.*?(?:weight|mass)", WEIGHT_KG),
            bounded(r"(?:weight|mass)[^\d]*(\d+)\s*kg", WEIGHT_KG),
        ],
    },
    AttributeSource {
        attribute: Attribute::Year,
        suffix: None,
        case_insensitive: false,
        rules: &[
            rule(r"(20\d{2})\s*[-–—]\s*(20\d{2})"),
            rule(r"(19\d{2})\s*[-–—]\s*(20\d{2})"),
        ],
    },
];

/// Trailing heading boilerplate removed from model names, applied in order.
const MODEL_SUFFIXES: &[&str] = &[
    r"(?i)\s*specifications:.*",
    r"(?i)\s*versions\s*&\s*types.*",
    r"(?i)\s*data\s*and.*",
];

fn compile(pattern: &str, case_insensitive: bool) -> Option<Regex> {
    let source = if case_insensitive {
        format!("(?i){pattern}")
    } else {
        pattern.to_string()
    };
    match Regex::new(&source) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::error!(pattern, %err, "invalid extraction pattern; rule dropped");
            None
        }
    }
}

/// The compiled catalog, in attribute extraction order.
pub fn catalog() -> &'static [AttributeRules] {
    static CATALOG: OnceLock<Vec<AttributeRules>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        SOURCES
            .iter()
            .map(|src| AttributeRules {
                attribute: src.attribute,
                suffix: src.suffix,
                rules: src
                    .rules
                    .iter()
                    .filter_map(|r| {
                        compile(r.pattern, src.case_insensitive).map(|pattern| ExtractionRule {
                            pattern,
                            plausibility: r.plausibility,
                        })
                    })
                    .collect(),
            })
            .collect()
    })
}

pub fn rules_for(attribute: Attribute) -> Option<&'static AttributeRules> {
    catalog().iter().find(|r| r.attribute == attribute)
}

pub fn model_suffix_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        MODEL_SUFFIXES
            .iter()
            .filter_map(|p| compile(p, false))
            .collect()
    })
}
