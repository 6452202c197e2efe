use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Country {
    Germany,
    Japan,
    Italy,
    Usa,
    France,
    Uk,
    SouthKorea,
    Sweden,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Germany,
        Country::Japan,
        Country::Italy,
        Country::Usa,
        Country::France,
        Country::Uk,
        Country::SouthKorea,
        Country::Sweden,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Country::Germany => "GERMANY",
            Country::Japan => "JAPAN",
            Country::Italy => "ITALY",
            Country::Usa => "USA",
            Country::France => "FRANCE",
            Country::Uk => "UK",
            Country::SouthKorea => "SOUTH KOREA",
            Country::Sweden => "SWEDEN",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCountry(wanted.to_string()))
    }
}

impl From<Country> for &'static str {
    fn from(value: Country) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for Country {
    type Error = UnknownCountry;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lowercased brand name → country of the manufacturer.
pub const BRAND_COUNTRIES: &[(&str, Country)] = &[
    ("audi", Country::Germany),
    ("bmw", Country::Germany),
    ("mercedes", Country::Germany),
    ("mercedes-benz", Country::Germany),
    ("porsche", Country::Germany),
    ("volkswagen", Country::Germany),
    ("vw", Country::Germany),
    ("opel", Country::Germany),
    ("toyota", Country::Japan),
    ("honda", Country::Japan),
    ("nissan", Country::Japan),
    ("mazda", Country::Japan),
    ("lexus", Country::Japan),
    ("subaru", Country::Japan),
    ("mitsubishi", Country::Japan),
    ("ford", Country::Usa),
    ("chevrolet", Country::Usa),
    ("tesla", Country::Usa),
    ("dodge", Country::Usa),
    ("cadillac", Country::Usa),
    ("ferrari", Country::Italy),
    ("lamborghini", Country::Italy),
    ("alfa romeo", Country::Italy),
    ("maserati", Country::Italy),
    ("peugeot", Country::France),
    ("renault", Country::France),
    ("bugatti", Country::France),
    ("citroen", Country::France),
    ("jaguar", Country::Uk),
    ("aston martin", Country::Uk),
    ("bentley", Country::Uk),
    ("rolls-royce", Country::Uk),
    ("land rover", Country::Uk),
    ("hyundai", Country::SouthKorea),
    ("kia", Country::SouthKorea),
    ("genesis", Country::SouthKorea),
    ("volvo", Country::Sweden),
    ("koenigsegg", Country::Sweden),
    ("saab", Country::Sweden),
];

/// Exact (case-insensitive) brand lookup.
pub fn country_for_brand(brand: &str) -> Option<Country> {
    let brand = brand.trim().to_lowercase();
    BRAND_COUNTRIES
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, c)| *c)
}

/// Brand lookup on a whole `"brand model"` string.
///
/// Multi-word brands (`"aston martin"`) are matched as a prefix; the longest matching brand wins.
pub fn country_for_query(query: &str) -> Option<Country> {
    let query = query.trim().to_lowercase();
    BRAND_COUNTRIES
        .iter()
        .filter(|(name, _)| {
            query
                .strip_prefix(*name)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
        .max_by_key(|(name, _)| name.len())
        .map(|(_, c)| *c)
}
