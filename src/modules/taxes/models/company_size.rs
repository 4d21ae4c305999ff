use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Company size classification requested by the caller.
///
/// `Auto` classifies from profit. `Unrecognized` keeps a bad value from
/// failing the request; it is taxed at the medium rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    #[default]
    Auto,
    Small,
    Medium,
    Large,
    Unrecognized,
}

impl CompanySize {
    /// Case-insensitive parse that never fails; blank input means `Auto`
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => CompanySize::Auto,
            "small" => CompanySize::Small,
            "medium" => CompanySize::Medium,
            "large" => CompanySize::Large,
            _ => CompanySize::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Auto => "auto",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CompanySize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => CompanySize::parse_lenient(&s),
            Value::Null => CompanySize::Auto,
            _ => CompanySize::Unrecognized,
        })
    }
}

/// Reported CIT category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CitCategory {
    Loss,
    Small,
    Medium,
    Large,
}

impl CitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CitCategory::Loss => "loss",
            CitCategory::Small => "small",
            CitCategory::Medium => "medium",
            CitCategory::Large => "large",
        }
    }
}

impl fmt::Display for CitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the CIT tier table; `threshold` is the inclusive upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitTier {
    pub category: CitCategory,
    pub threshold: Option<Decimal>,
    pub rate: Decimal,
}

/// CIT tiers in ascending threshold order
pub static CIT_TIERS: [CitTier; 3] = [
    CitTier {
        category: CitCategory::Small,
        threshold: Some(dec!(25000000)),
        rate: dec!(0),
    },
    CitTier {
        category: CitCategory::Medium,
        threshold: Some(dec!(100000000)),
        rate: dec!(0.20),
    },
    CitTier {
        category: CitCategory::Large,
        threshold: None,
        rate: dec!(0.30),
    },
];

/// Looks up the tier for an explicit size. `Auto` has no fixed tier.
pub fn tier_for(size: CompanySize) -> Option<&'static CitTier> {
    let category = match size {
        CompanySize::Small => CitCategory::Small,
        CompanySize::Medium | CompanySize::Unrecognized => CitCategory::Medium,
        CompanySize::Large => CitCategory::Large,
        CompanySize::Auto => return None,
    };
    CIT_TIERS.iter().find(|tier| tier.category == category)
}
