use rust_decimal::Decimal;

use crate::core::money::{ratio_to_percent, round_naira};
use crate::modules::taxes::models::company_size::tier_for;
use crate::modules::taxes::models::{CitDetail, CitTier, CompanySize, CIT_TIERS};

/// Company income tax on `annual_profit`.
///
/// A loss (or break-even) is never classified. `Auto` picks the first tier
/// whose inclusive threshold covers the profit; an explicit size uses that
/// tier's rate with no threshold check.
pub fn calculate_cit(annual_profit: Decimal, company_size: CompanySize) -> CitDetail {
    if annual_profit <= Decimal::ZERO {
        return CitDetail::loss();
    }

    let tier = tier_for(company_size).unwrap_or_else(|| classify_by_profit(annual_profit));

    CitDetail {
        tax: round_naira(annual_profit * tier.rate),
        rate: ratio_to_percent(tier.rate),
        category: tier.category,
    }
}

/// Profit-based tier lookup.
///
/// Thresholds are labelled as turnover in the published rates, but the
/// comparison here is against profit.
pub fn classify_by_profit(annual_profit: Decimal) -> &'static CitTier {
    CIT_TIERS
        .iter()
        .find(|tier| match tier.threshold {
            Some(threshold) => annual_profit <= threshold,
            None => true,
        })
        .unwrap_or(&CIT_TIERS[CIT_TIERS.len() - 1])
}
