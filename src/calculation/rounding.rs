//! Money rounding.
//!
//! Every monetary amount is rounded to cents at the point it is computed,
//! before it is fed into the next step.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for money.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("4640.625").unwrap()), Decimal::from_str("4640.63").unwrap());
/// assert_eq!(round_money(Decimal::from_str("1521.4284").unwrap()), Decimal::from_str("1521.43").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
        assert_eq!(round_money(dec("10.125")), dec("10.13"));
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(round_money(dec("5357.142857")), dec("5357.14"));
    }

    #[test]
    fn test_negative_half_rounds_away_from_zero() {
        assert_eq!(round_money(dec("-0.005")), dec("-0.01"));
    }

    #[test]
    fn test_already_rounded_is_unchanged() {
        assert_eq!(round_money(dec("71200")), dec("71200"));
        assert_eq!(round_money(dec("12.30")), dec("12.30"));
    }
}
