use rust_decimal::Decimal;

use crate::core::money::{percent_of, round_naira};
use crate::modules::taxes::models::rates::{DISCLAIMER, MONTHS_PER_YEAR, PAYE_NOTE};
use crate::modules::taxes::models::{
    BreakdownLine, PayeDetail, PitSummary, TaxBracket, TaxInput, TaxResult, PIT_BRACKETS,
};

use super::company_tax::calculate_cit;
use super::levies::{calculate_education_tax, calculate_nitda_levy};
use super::progressive::{calculate_progressive_tax, progressive_breakdown};
use super::vat::calculate_vat;

/// Composes the individual tax computations into a single estimate.
///
/// Stateless apart from the PIT table it walks; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    brackets: &'static [TaxBracket],
}

impl TaxCalculator {
    pub fn new() -> Self {
        Self::with_brackets(&PIT_BRACKETS)
    }

    pub fn with_brackets(brackets: &'static [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Full estimate for one set of business figures.
    ///
    /// total = CIT + PAYE (when requested) + education tax + NITDA levy.
    /// VAT is reported as `vat_collectable` and kept out of the total.
    pub fn compute_tax_summary(&self, input: &TaxInput) -> TaxResult {
        let profit = input.profit();

        let cit = calculate_cit(profit, input.company_size);
        let vat = calculate_vat(input.revenue, input.is_vat_registered);
        let education_tax = calculate_education_tax(profit);
        let nitda_levy = calculate_nitda_levy(input.revenue, profit);
        let paye = if input.include_paye && input.salaries > Decimal::ZERO {
            Some(self.estimate_paye(input.salaries))
        } else {
            None
        };

        let mut breakdown = vec![BreakdownLine {
            label: format!("Company Income Tax ({})", cit.category),
            amount: cit.tax,
        }];
        if let Some(paye) = &paye {
            breakdown.push(BreakdownLine {
                label: "PAYE (estimated)".to_string(),
                amount: paye.estimated_paye,
            });
        }
        breakdown.push(BreakdownLine {
            label: "Tertiary Education Tax".to_string(),
            amount: education_tax.amount,
        });
        breakdown.push(BreakdownLine {
            label: "NITDA Levy".to_string(),
            amount: nitda_levy.amount,
        });

        let total_estimated_tax: Decimal = breakdown.iter().map(|line| line.amount).sum();
        let vat_collectable = vat.vat;

        tracing::debug!(
            profit = %profit,
            cit = %cit.tax,
            category = %cit.category,
            education_tax = %education_tax.amount,
            nitda_levy = %nitda_levy.amount,
            vat_collectable = %vat_collectable,
            total = %total_estimated_tax,
            "Tax summary computed"
        );

        TaxResult {
            profit,
            cit,
            vat,
            education_tax,
            nitda_levy,
            paye,
            total_estimated_tax,
            vat_collectable,
            breakdown,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// PAYE approximated by running total salaries through the PIT bands.
    pub fn estimate_paye(&self, total_salaries: Decimal) -> PayeDetail {
        let estimated_paye = calculate_progressive_tax(total_salaries, self.brackets);
        PayeDetail {
            estimated_paye,
            monthly_paye: round_naira(estimated_paye / MONTHS_PER_YEAR),
            note: PAYE_NOTE.to_string(),
        }
    }

    /// Personal income tax with a per-band breakdown
    pub fn personal_income_tax(&self, annual_income: Decimal) -> PitSummary {
        let total_tax = calculate_progressive_tax(annual_income, self.brackets);
        PitSummary {
            annual_income,
            total_tax,
            monthly_tax: round_naira(total_tax / MONTHS_PER_YEAR),
            effective_rate: percent_of(total_tax, annual_income),
            breakdown: progressive_breakdown(annual_income, self.brackets),
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper over [`TaxCalculator::compute_tax_summary`] with the
/// statutory PIT table
pub fn compute_tax_summary(input: &TaxInput) -> TaxResult {
    TaxCalculator::new().compute_tax_summary(input)
}
