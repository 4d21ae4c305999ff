// Property-based tests for the progressive PIT bracket walk
//
// Covers monotonicity, non-negativity, boundary exactness and the bounded
// marginal rate of the statutory bracket table.

use nairatax::taxes::models::PIT_BRACKETS;
use nairatax::taxes::services::{calculate_progressive_tax, progressive_breakdown};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_tax_is_monotonic_in_income(
        a in 0u64..50_000_000u64,
        delta in 1u64..10_000_000u64
    ) {
        let lower = Decimal::from(a);
        let higher = Decimal::from(a + delta);

        let tax_lower = calculate_progressive_tax(lower, &PIT_BRACKETS);
        let tax_higher = calculate_progressive_tax(higher, &PIT_BRACKETS);

        prop_assert!(
            tax_higher >= tax_lower,
            "tax({}) = {} should be >= tax({}) = {}",
            higher, tax_higher, lower, tax_lower
        );
    }

    #[test]
    fn test_tax_is_non_negative_whole_naira(income in 0u64..1_000_000_000u64) {
        let tax = calculate_progressive_tax(Decimal::from(income), &PIT_BRACKETS);

        prop_assert!(tax >= Decimal::ZERO);
        prop_assert_eq!(tax, tax.trunc(), "tax must be whole Naira, got {}", tax);
    }

    #[test]
    fn test_tax_bounded_by_rates(income in 1u64..1_000_000_000u64) {
        let income = Decimal::from(income);
        let tax = calculate_progressive_tax(income, &PIT_BRACKETS);

        // Allow half a Naira either way for rounding
        let half = dec!(0.5);
        prop_assert!(tax <= income * dec!(0.24) + half);
        prop_assert!(tax + half >= income * dec!(0.07));
    }

    #[test]
    fn test_negative_income_is_zero(income in 1i64..1_000_000_000i64) {
        let tax = calculate_progressive_tax(Decimal::from(-income), &PIT_BRACKETS);
        prop_assert_eq!(tax, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_covers_income(income in 1u64..100_000_000u64) {
        let income = Decimal::from(income);
        let rows = progressive_breakdown(income, &PIT_BRACKETS);

        let taxable: Decimal = rows.iter().map(|row| row.taxable_amount).sum();
        prop_assert_eq!(taxable, income);
        prop_assert!(rows.len() <= PIT_BRACKETS.len());
    }

    #[test]
    fn test_deterministic(income in 0u64..1_000_000_000u64) {
        let income = Decimal::from(income);
        prop_assert_eq!(
            calculate_progressive_tax(income, &PIT_BRACKETS),
            calculate_progressive_tax(income, &PIT_BRACKETS)
        );
    }
}

#[test]
fn test_bracket_boundaries() {
    let cases = [
        (dec!(0), dec!(0)),
        (dec!(300000), dec!(21000)),
        (dec!(600000), dec!(54000)),
        (dec!(1100000), dec!(129000)),
        (dec!(1600000), dec!(224000)),
        (dec!(3200000), dec!(560000)),
        (dec!(4200000), dec!(800000)),
    ];

    for (income, expected) in cases {
        assert_eq!(
            calculate_progressive_tax(income, &PIT_BRACKETS),
            expected,
            "income {}",
            income
        );
    }
}

#[test]
fn test_one_naira_past_boundary_uses_next_rate() {
    // 21,000 + 11% of 10
    assert_eq!(
        calculate_progressive_tax(dec!(300010), &PIT_BRACKETS),
        dec!(21001)
    );
}
