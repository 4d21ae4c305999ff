//! Fixed statutory rates and thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::company_size::CIT_TIERS;
use super::tax_bracket::PIT_BRACKETS;
use crate::core::money::{format_naira, ratio_to_percent};

pub const VAT_RATE: Decimal = dec!(0.075);
/// Inclusive revenue threshold for VAT
pub const VAT_THRESHOLD: Decimal = dec!(25000000);

/// Tertiary education tax, charged on positive profit
pub const EDUCATION_TAX_RATE: Decimal = dec!(0.02);

/// NITDA levy, charged on profit once revenue reaches the threshold
pub const NITDA_LEVY_RATE: Decimal = dec!(0.01);
pub const NITDA_LEVY_THRESHOLD: Decimal = dec!(100000000);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const VAT_NOT_APPLICABLE_REASON: &str = "Below VAT threshold or not registered";

pub const PAYE_NOTE: &str = "Estimated from total salaries using PIT brackets. \
Actual PAYE is computed per employee and may differ.";

pub const DISCLAIMER: &str = "This is an estimate only and does not constitute \
tax advice. Please consult a qualified tax professional or the Federal Inland \
Revenue Service (FIRS) for accurate tax computation.";

pub const RATES_SOURCE: &str = "Federal Inland Revenue Service (FIRS), Finance Act 2023";
pub const RATES_LAST_UPDATED: &str = "2024-01-01";

/// Published rate tables for client-side display.
///
/// All rates are percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRates {
    pub vat: VatRate,
    pub cit: Vec<CitTierRate>,
    pub pit: Vec<PitBracketRate>,
    pub education_tax: FlatRate,
    pub nitda_levy: ThresholdRate,
    pub last_updated: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatRate {
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub threshold: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitTierRate {
    pub category: String,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitBracketRate {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    /// `null` for the open-ended top band
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRate {
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRate {
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub threshold: Decimal,
    pub description: String,
}

impl TaxRates {
    pub fn current() -> Self {
        Self {
            vat: VatRate {
                rate: ratio_to_percent(VAT_RATE),
                threshold: VAT_THRESHOLD,
                description: "VAT applies to registered businesses with annual turnover \
                              of ₦25,000,000 or more"
                    .to_string(),
            },
            // Described as turnover-based to match the published tables; the
            // calculator classifies by profit.
            cit: CIT_TIERS
                .iter()
                .map(|tier| CitTierRate {
                    category: tier.category.to_string(),
                    threshold: tier.threshold,
                    rate: ratio_to_percent(tier.rate),
                    description: match tier.threshold {
                        Some(threshold) => format!(
                            "Companies with turnover up to {} (based on company turnover)",
                            format_naira(threshold)
                        ),
                        None => "Companies above the medium threshold (based on company turnover)"
                            .to_string(),
                    },
                })
                .collect(),
            pit: PIT_BRACKETS
                .iter()
                .map(|bracket| PitBracketRate {
                    min: bracket.min,
                    max: bracket.max,
                    rate: ratio_to_percent(bracket.rate),
                })
                .collect(),
            education_tax: FlatRate {
                rate: ratio_to_percent(EDUCATION_TAX_RATE),
                description: "Tertiary Education Tax on assessable profit".to_string(),
            },
            nitda_levy: ThresholdRate {
                rate: ratio_to_percent(NITDA_LEVY_RATE),
                threshold: NITDA_LEVY_THRESHOLD,
                description: "Levy on profit before tax for companies with turnover of \
                              ₦100,000,000 or more"
                    .to_string(),
            },
            last_updated: RATES_LAST_UPDATED.to_string(),
            source: RATES_SOURCE.to_string(),
        }
    }
}
