//! Lenient coercion of form values into calculator inputs.
//!
//! Salary forms are recomputed on every keystroke, so partially typed or
//! garbage values must never fail. Amounts follow `parseFloat(x) || 0`:
//! the longest numeric prefix is used and anything unparsable becomes zero.
//! Counts follow `parseInt(x) || 0`, additionally clamped to `u32`.
//!
//! This is the only place lenient parsing happens; everything past it is
//! strictly typed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveType, OvertimeType};

/// A raw form value: either a JSON number or whatever text was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// A JSON number.
    Number(serde_json::Number),
    /// A text value, possibly partial or non-numeric.
    Text(String),
    /// Any other JSON value (booleans, arrays, objects).
    Other(serde_json::Value),
}

impl FormValue {
    /// Coerces the value to a money amount.
    pub fn to_amount(&self) -> Decimal {
        match self {
            FormValue::Number(number) => coerce_amount(&number.to_string()),
            FormValue::Text(text) => coerce_amount(text),
            FormValue::Other(_) => Decimal::ZERO,
        }
    }

    /// Coerces the value to a whole count.
    pub fn to_count(&self) -> u32 {
        match self {
            FormValue::Number(number) => coerce_count(&number.to_string()),
            FormValue::Text(text) => coerce_count(text),
            FormValue::Other(_) => 0,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Coerces text to an amount, defaulting to zero.
///
/// Numbers too large for `Decimal` saturate at `Decimal::MAX` or
/// `Decimal::MIN`; numbers too small to represent become zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::coerce_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(coerce_amount("1250.50"), Decimal::from_str("1250.50").unwrap());
/// assert_eq!(coerce_amount("12.5kg"), Decimal::from_str("12.5").unwrap());
/// assert_eq!(coerce_amount("abc"), Decimal::ZERO);
/// assert_eq!(coerce_amount(""), Decimal::ZERO);
/// assert_eq!(coerce_amount("1e40"), Decimal::MAX);
/// ```
pub fn coerce_amount(text: &str) -> Decimal {
    let prefix = numeric_prefix(text, true);
    if prefix.is_empty() {
        return Decimal::ZERO;
    }

    let unsigned = prefix.trim_start_matches(['+', '-']);
    let mut normalized = String::with_capacity(prefix.len() + 1);
    if prefix.starts_with('-') {
        normalized.push('-');
    }
    if unsigned.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(&unsigned.to_ascii_lowercase());

    let parsed = match normalized.split_once('e') {
        Some((mantissa, exponent)) => parse_scientific(mantissa, exponent),
        None => Decimal::from_str(&normalized).ok(),
    };
    parsed.unwrap_or_else(|| out_of_range(&normalized))
}

/// Exponents beyond this are out of range for any mantissa `Decimal` holds.
const MAX_EXPONENT: u64 = 64;

fn parse_scientific(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let exponent: i64 = exponent.parse().ok()?;
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }
    let mut value = Decimal::from_str(mantissa).ok()?;
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value / Decimal::TEN
        };
    }
    Some(value)
}

/// Resolves a well-formed number that `Decimal` cannot hold.
fn out_of_range(normalized: &str) -> Decimal {
    let negative = normalized.starts_with('-');
    let unsigned = normalized.trim_start_matches('-');
    let (mantissa, exponent) = unsigned.split_once('e').unwrap_or((unsigned, "0"));
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let integer = integer.trim_start_matches('0');
    let significant = fraction.trim_start_matches('0');
    if integer.is_empty() && significant.trim_end_matches('0').is_empty() {
        return Decimal::ZERO;
    }

    // Position of the leading digit relative to the decimal point.
    let leading = if integer.is_empty() {
        -((fraction.len() - significant.len()) as i64)
    } else {
        integer.len() as i64
    };
    let exponent = exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });

    match (leading.saturating_add(exponent) > 0, negative) {
        (false, _) => Decimal::ZERO,
        (true, false) => Decimal::MAX,
        (true, true) => Decimal::MIN,
    }
}

/// Coerces text to a non-negative whole count, defaulting to zero.
///
/// Fractions are truncated, negative values become zero and values beyond
/// `u32::MAX` saturate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::coerce_count;
///
/// assert_eq!(coerce_count("10"), 10);
/// assert_eq!(coerce_count("7.9"), 7);
/// assert_eq!(coerce_count("-3"), 0);
/// assert_eq!(coerce_count("x"), 0);
/// ```
pub fn coerce_count(text: &str) -> u32 {
    let prefix = numeric_prefix(text, false);
    if prefix.starts_with('-') {
        return 0;
    }
    let digits = prefix.trim_start_matches('+');
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Coerces text to an overtime type, defaulting to weekday.
pub fn coerce_overtime_type(text: &str) -> OvertimeType {
    match text.trim().to_ascii_lowercase().as_str() {
        "weekend_holiday" | "weekend" | "holiday" => OvertimeType::WeekendHoliday,
        _ => OvertimeType::Weekday,
    }
}

/// Coerces text to a leave type, defaulting to full pay.
pub fn coerce_leave_type(text: &str) -> LeaveType {
    match text.trim().to_ascii_lowercase().as_str() {
        "no_pay" | "nopay" => LeaveType::NoPay,
        _ => LeaveType::FullPay,
    }
}

/// Returns the longest leading numeric prefix of `text`, after leading
/// whitespace. With `fractional`, a decimal point and exponent are allowed.
fn numeric_prefix(text: &str, fractional: bool) -> &str {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }

    if fractional && bytes.get(end) == Some(&b'.') {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        let fraction_digits = fraction_end - end - 1;
        if fraction_digits > 0 {
            end = fraction_end;
            mantissa_digits += fraction_digits;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if fractional && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    &text[..end]
}
