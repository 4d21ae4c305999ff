//! Table-driven progressive bracket walk used for PIT and PAYE.

use rust_decimal::Decimal;

use crate::core::money::{format_naira, format_rate, non_negative, round_naira};
use crate::modules::taxes::models::{BracketShare, TaxBracket};

/// Portion of income falling inside one bracket, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSlice<'a> {
    pub bracket: &'a TaxBracket,
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// Walks `brackets` from the lowest band up, stopping as soon as the income
/// is used up. Bands above the income level are never visited.
///
/// Negative income is treated as zero.
pub fn walk_brackets(annual_income: Decimal, brackets: &[TaxBracket]) -> Vec<BandSlice<'_>> {
    let mut remaining = non_negative(annual_income);
    let mut slices = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxable * bracket.rate;

        tracing::trace!(
            min = %bracket.min,
            rate = %bracket.rate,
            taxable = %taxable,
            tax = %tax,
            "PIT bracket applied"
        );

        slices.push(BandSlice {
            bracket,
            taxable,
            tax,
        });
        remaining -= taxable;
    }

    slices
}

/// Progressive tax on `annual_income`, rounded to the nearest Naira
pub fn calculate_progressive_tax(annual_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let tax: Decimal = walk_brackets(annual_income, brackets)
        .iter()
        .map(|slice| slice.tax)
        .sum();
    round_naira(tax)
}

/// Display rows for each bracket the income reaches
pub fn progressive_breakdown(annual_income: Decimal, brackets: &[TaxBracket]) -> Vec<BracketShare> {
    walk_brackets(annual_income, brackets)
        .into_iter()
        .map(|slice| BracketShare {
            range: range_label(slice.bracket),
            rate: format_rate(slice.bracket.rate),
            taxable_amount: round_naira(slice.taxable),
            tax: round_naira(slice.tax),
        })
        .collect()
}

fn range_label(bracket: &TaxBracket) -> String {
    match bracket.max {
        Some(max) => format!("{} - {}", format_naira(bracket.min), format_naira(max)),
        None => format!("Above {}", format_naira(bracket.min)),
    }
}
