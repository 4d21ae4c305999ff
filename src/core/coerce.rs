//! Lenient coercion of client-supplied JSON values.
//!
//! Request bodies come from a mobile client that may send numbers as strings,
//! `null`, or omit fields entirely. None of that is an error: anything that
//! does not read as a number becomes zero, and flags fall back to their
//! defaults.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Reads a JSON value as an amount, yielding zero for anything non-numeric.
///
/// Numbers pass through, numeric strings are parsed (surrounding whitespace
/// ignored, empty string is zero), booleans map to one and zero. Arrays,
/// objects, `null` and non-finite values are zero.
pub fn amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string())
            .or_else(|| n.as_f64().and_then(Decimal::from_f64))
            .unwrap_or(Decimal::ZERO),
        Value::String(s) => parse_decimal(s.trim()).unwrap_or(Decimal::ZERO),
        Value::Bool(true) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

/// Reads a JSON value as a non-negative amount
pub fn non_negative_amount(value: &Value) -> Decimal {
    amount(value).max(Decimal::ZERO)
}

/// Reads a JSON value as a boolean flag, `None` when it cannot be read as one
pub fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// serde adapter: any JSON value into a non-negative amount
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_negative_amount(&value))
}

/// serde adapter: any JSON value into an optional flag
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag(&value))
}
