// Property-based tests for the aggregated tax estimate
//
// - VAT is reported as collectable and never added to the total
// - total = CIT + PAYE + education tax + NITDA levy
// - loss-making inputs produce no CIT or education tax; the NITDA levy
//   still follows profit once revenue passes its threshold
// - identical inputs give identical results

use nairatax::core::money::round_naira;
use nairatax::taxes::models::{CitCategory, CompanySize, TaxInput};
use nairatax::taxes::services::{calculate_cit, calculate_nitda_levy, calculate_vat};
use nairatax::{compute_tax_summary, TaxCalculator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn company_size() -> impl Strategy<Value = CompanySize> {
    prop_oneof![
        Just(CompanySize::Auto),
        Just(CompanySize::Small),
        Just(CompanySize::Medium),
        Just(CompanySize::Large),
        Just(CompanySize::Unrecognized),
    ]
}

proptest! {
    #[test]
    fn test_total_is_sum_of_liabilities(
        revenue in 0u64..500_000_000u64,
        expenses in 0u64..300_000_000u64,
        salaries in 0u64..100_000_000u64,
        size in company_size(),
        vat_registered in any::<bool>(),
        include_paye in any::<bool>()
    ) {
        let input = TaxInput::new(
            Decimal::from(revenue),
            Decimal::from(expenses),
            Decimal::from(salaries),
        )
        .with_company_size(size)
        .with_vat_registration(vat_registered)
        .with_paye(include_paye);

        let result = compute_tax_summary(&input);

        let expected = result.cit.tax
            + result.paye_amount()
            + result.education_tax.amount
            + result.nitda_levy.amount;
        prop_assert_eq!(result.total_estimated_tax, expected);
        prop_assert_eq!(result.vat_collectable, result.vat.vat);
    }

    #[test]
    fn test_vat_never_changes_total(
        revenue in 25_000_000u64..500_000_000u64,
        expenses in 0u64..300_000_000u64
    ) {
        let registered = TaxInput::new(Decimal::from(revenue), Decimal::from(expenses), Decimal::ZERO);
        let unregistered = registered.clone().with_vat_registration(false);

        let with_vat = compute_tax_summary(&registered);
        let without_vat = compute_tax_summary(&unregistered);

        prop_assert!(with_vat.vat_collectable > Decimal::ZERO);
        prop_assert_eq!(without_vat.vat_collectable, Decimal::ZERO);
        prop_assert_eq!(with_vat.total_estimated_tax, without_vat.total_estimated_tax);
    }

    #[test]
    fn test_loss_yields_no_profit_taxes(
        revenue in 0u64..200_000_000u64,
        excess in 0u64..50_000_000u64,
        size in company_size()
    ) {
        let input = TaxInput::new(Decimal::from(revenue), Decimal::from(revenue + excess), Decimal::ZERO)
            .with_company_size(size);
        let result = compute_tax_summary(&input);

        prop_assert_eq!(result.cit.category, CitCategory::Loss);
        prop_assert_eq!(result.cit.tax, Decimal::ZERO);
        prop_assert_eq!(result.education_tax.amount, Decimal::ZERO);

        let expected_levy = if revenue >= 100_000_000 {
            round_naira(-Decimal::from(excess) * dec!(0.01))
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(result.nitda_levy.amount, expected_levy);
        prop_assert_eq!(result.total_estimated_tax, expected_levy);
    }

    #[test]
    fn test_summary_is_idempotent(
        revenue in 0u64..500_000_000u64,
        expenses in 0u64..300_000_000u64,
        salaries in 0u64..100_000_000u64
    ) {
        let input = TaxInput::new(Decimal::from(revenue), Decimal::from(expenses), Decimal::from(salaries))
            .with_paye(true);
        let calculator = TaxCalculator::new();
        prop_assert_eq!(calculator.compute_tax_summary(&input), calculator.compute_tax_summary(&input));
    }
}

#[test]
fn test_cit_tier_boundaries() {
    let cit = calculate_cit(dec!(-500000), CompanySize::Auto);
    assert_eq!(cit.tax, dec!(0));
    assert_eq!(cit.rate, dec!(0));
    assert_eq!(cit.category, CitCategory::Loss);

    let small = calculate_cit(dec!(25000000), CompanySize::Auto);
    assert_eq!(small.category, CitCategory::Small);
    assert_eq!(small.tax, dec!(0));

    let medium = calculate_cit(dec!(25000001), CompanySize::Auto);
    assert_eq!(medium.category, CitCategory::Medium);
}

#[test]
fn test_vat_boundary() {
    let at = calculate_vat(dec!(25000000), true);
    assert!(at.applicable);
    assert_eq!(at.vat, dec!(1875000));

    assert!(!calculate_vat(dec!(24999999), true).applicable);
    assert!(!calculate_vat(dec!(50000000), false).applicable);
}

#[test]
fn test_nitda_gate_independent_of_cit() {
    let levy = calculate_nitda_levy(dec!(100000000), dec!(10000000));
    assert!(levy.applicable);
    assert_eq!(levy.amount, dec!(100000));

    // The same profit alone classifies as small
    assert_eq!(
        calculate_cit(dec!(10000000), CompanySize::Auto).category,
        CitCategory::Small
    );
}

#[test]
fn test_loss_with_large_turnover_carries_negative_levy() {
    let input = TaxInput::new(dec!(150000000), dec!(152000000), dec!(0));
    let result = compute_tax_summary(&input);

    assert_eq!(result.profit, dec!(-2000000));
    assert_eq!(result.cit.category, CitCategory::Loss);
    assert!(result.nitda_levy.applicable);
    assert_eq!(result.nitda_levy.amount, dec!(-20000));
    assert_eq!(result.total_estimated_tax, dec!(-20000));
}

#[test]
fn test_high_revenue_zero_profit() {
    let input = TaxInput::new(dec!(90000000), dec!(60000000), dec!(30000000));
    let result = compute_tax_summary(&input);

    assert_eq!(result.profit, dec!(0));
    assert_eq!(result.vat_collectable, dec!(6750000));
    assert_eq!(result.total_estimated_tax, dec!(0));
}

#[test]
fn test_end_to_end_scenario() {
    let input = TaxInput::new(dec!(50000000), dec!(20000000), dec!(10000000))
        .with_company_size(CompanySize::Auto)
        .with_vat_registration(true)
        .with_paye(true);
    let result = compute_tax_summary(&input);

    assert_eq!(result.profit, dec!(20000000));
    assert_eq!(result.cit.category, CitCategory::Small);
    assert_eq!(result.cit.tax, dec!(0));
    assert_eq!(result.vat.vat, dec!(3750000));
    assert_eq!(result.education_tax.amount, dec!(400000));
    assert!(!result.nitda_levy.applicable);
    assert_eq!(result.paye_amount(), dec!(2192000));
    assert_eq!(result.total_estimated_tax, dec!(2592000));
}
