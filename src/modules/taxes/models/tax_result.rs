use rust_decimal::Decimal;
use serde::Serialize;

use super::company_size::CitCategory;

/// Company income tax outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitDetail {
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    /// Percentage, 0-100
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub category: CitCategory,
}

impl CitDetail {
    pub fn loss() -> Self {
        Self {
            tax: Decimal::ZERO,
            rate: Decimal::ZERO,
            category: CitCategory::Loss,
        }
    }
}

/// VAT outcome; `rate` is set only when applicable, `reason` only when not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatDetail {
    #[serde(with = "rust_decimal::serde::float")]
    pub vat: Decimal,
    pub applicable: bool,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationTaxDetail {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NitdaLevyDetail {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub applicable: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

/// PAYE approximated from aggregate salaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeDetail {
    #[serde(rename = "estimatedPAYE", with = "rust_decimal::serde::float")]
    pub estimated_paye: Decimal,
    #[serde(rename = "monthlyPAYE", with = "rust_decimal::serde::float")]
    pub monthly_paye: Decimal,
    pub note: String,
}

/// One human-readable line of the estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Complete estimate for one [`TaxInput`](super::TaxInput)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub cit: CitDetail,
    pub vat: VatDetail,
    pub education_tax: EducationTaxDetail,
    pub nitda_levy: NitdaLevyDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paye: Option<PayeDetail>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_estimated_tax: Decimal,
    /// VAT collected on behalf of the state; never part of the total
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_collectable: Decimal,
    pub breakdown: Vec<BreakdownLine>,
    pub disclaimer: String,
}

impl TaxResult {
    pub fn paye_amount(&self) -> Decimal {
        self.paye
            .as_ref()
            .map(|paye| paye.estimated_paye)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Tax falling in one PIT band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketShare {
    pub range: String,
    pub rate: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

/// Personal income tax for a single annual income
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_tax: Decimal,
    /// Percentage with two decimals, e.g. `"7.00"`
    pub effective_rate: String,
    pub breakdown: Vec<BracketShare>,
}
