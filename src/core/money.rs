//! Naira amount helpers shared by the tax engine and its HTTP surface.
//!
//! Amounts are `Decimal` values in whole Naira once rounded; the engine keeps
//! no kobo precision in its outputs.

use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds to the nearest whole Naira, halves toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`)
pub fn round_naira(amount: Decimal) -> Decimal {
    let strategy = if amount.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    amount.round_dp_with_strategy(0, strategy)
}

/// Clamps negative amounts to zero
pub fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// Converts a fractional rate (0.075) into a percentage (7.5)
pub fn ratio_to_percent(rate: Decimal) -> Decimal {
    (rate * HUNDRED).normalize()
}

/// Formats a whole-Naira amount with thousands separators, e.g. `₦1,100,000`
pub fn format_naira(amount: Decimal) -> String {
    let rounded = round_naira(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}

/// Formats a fractional rate as a percentage label, e.g. `7%` or `7.5%`
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", ratio_to_percent(rate))
}

/// Share of `part` in `whole` as a percentage string with two decimals.
///
/// A zero or negative `whole` yields `"0.00"`.
pub fn percent_of(part: Decimal, whole: Decimal) -> String {
    if whole <= Decimal::ZERO {
        return "0.00".to_string();
    }
    let percent = (part / whole * HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", percent)
}
