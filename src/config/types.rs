//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from `policy.yaml`, together with the built-in standard policy.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::OvertimeType;

/// Days in the normalized payroll month. Fixed by policy, not by the calendar.
pub const STANDARD_WORKING_DAYS_PER_MONTH: NonZeroU32 = match NonZeroU32::new(28) {
    Some(days) => days,
    None => panic!("working days must be non-zero"),
};

/// Hours in a normalized working day.
pub const STANDARD_HOURS_PER_DAY: NonZeroU32 = match NonZeroU32::new(8) {
    Some(hours) => hours,
    None => panic!("hours per day must be non-zero"),
};

/// Overtime rate multipliers by overtime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for overtime worked on a weekday.
    pub weekday: Decimal,
    /// Multiplier for overtime worked on a weekend or public holiday.
    pub weekend_holiday: Decimal,
}

/// Mandatory fund contribution rates, as fractions of gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Employees' Provident Fund rate.
    pub epf: Decimal,
    /// Employees' Trust Fund rate.
    pub etf: Decimal,
}

/// A single slice of the progressive income tax schedule.
///
/// The rate applies only to the part of gross salary between `lower` and
/// `upper`. The last bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (exclusive of income below it).
    pub lower: Decimal,
    /// Upper bound of the bracket, or `None` for the open top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate for income inside the bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Returns the portion of `gross` that falls inside this bracket.
    pub fn taxable_slice(&self, gross: Decimal) -> Decimal {
        let ceiling = match self.upper {
            Some(upper) => gross.min(upper),
            None => gross,
        };
        ceiling.saturating_sub(self.lower).max(Decimal::ZERO)
    }
}

/// The complete payroll policy used by the calculator.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::OvertimeType;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.working_days_per_month.get(), 28);
/// assert_eq!(policy.overtime_multiplier(OvertimeType::WeekendHoliday), Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Human-readable policy name.
    pub name: String,
    /// Policy version or effective period.
    pub version: String,
    /// Divisor normalizing a month to working days.
    pub working_days_per_month: NonZeroU32,
    /// Divisor normalizing a working day to hours.
    pub hours_per_day: NonZeroU32,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
    /// EPF/ETF contribution rates.
    pub contributions: ContributionRates,
    /// Progressive tax schedule, ordered by `lower`.
    pub tax_brackets: Vec<TaxBracket>,
}

impl PayrollPolicy {
    /// Returns the rate multiplier for the given overtime type.
    pub fn overtime_multiplier(&self, overtime_type: OvertimeType) -> Decimal {
        match overtime_type {
            OvertimeType::Weekday => self.overtime.weekday,
            OvertimeType::WeekendHoliday => self.overtime.weekend_holiday,
        }
    }

    /// Checks that the policy is internally consistent.
    ///
    /// Brackets must start at zero, be contiguous, and only the last one may
    /// be open-ended. All rates must lie in `[0, 1]` and multipliers must not
    /// be negative.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| Err(EngineError::InvalidPolicy { message });

        let Some(first) = self.tax_brackets.first() else {
            return invalid("tax brackets are empty".to_string());
        };
        if first.lower != Decimal::ZERO {
            return invalid(format!(
                "first tax bracket must start at 0, found {}",
                first.lower
            ));
        }

        let last_index = self.tax_brackets.len() - 1;
        for (index, bracket) in self.tax_brackets.iter().enumerate() {
            if !is_fraction(bracket.rate) {
                return invalid(format!(
                    "tax bracket {} has rate {} outside [0, 1]",
                    index, bracket.rate
                ));
            }
            match bracket.upper {
                Some(upper) if upper <= bracket.lower => {
                    return invalid(format!(
                        "tax bracket {} upper bound {} is not above lower bound {}",
                        index, upper, bracket.lower
                    ));
                }
                Some(upper) => {
                    if let Some(next) = self.tax_brackets.get(index + 1) {
                        if next.lower != upper {
                            return invalid(format!(
                                "tax bracket {} ends at {} but bracket {} starts at {}",
                                index,
                                upper,
                                index + 1,
                                next.lower
                            ));
                        }
                    }
                }
                None if index != last_index => {
                    return invalid(format!(
                        "only the last tax bracket may be open-ended, bracket {} is",
                        index
                    ));
                }
                None => {}
            }
        }

        for (name, rate) in [
            ("epf", self.contributions.epf),
            ("etf", self.contributions.etf),
        ] {
            if !is_fraction(rate) {
                return invalid(format!("{} rate {} outside [0, 1]", name, rate));
            }
        }

        for (name, multiplier) in [
            ("weekday", self.overtime.weekday),
            ("weekend_holiday", self.overtime.weekend_holiday),
        ] {
            if multiplier.is_sign_negative() {
                return invalid(format!(
                    "{} overtime multiplier {} is negative",
                    name, multiplier
                ));
            }
        }

        Ok(())
    }
}

fn is_fraction(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

impl Default for PayrollPolicy {
    /// The standard monthly policy: 28 x 8 hour month, 1.0/1.5 overtime,
    /// EPF 8%, ETF 3%, tax 0/6/12/18% in 50,000 steps above 100,000.
    fn default() -> Self {
        Self {
            name: "Standard monthly payroll".to_string(),
            version: "2024-01".to_string(),
            working_days_per_month: STANDARD_WORKING_DAYS_PER_MONTH,
            hours_per_day: STANDARD_HOURS_PER_DAY,
            overtime: OvertimeMultipliers {
                weekday: Decimal::ONE,
                weekend_holiday: Decimal::new(15, 1),
            },
            contributions: ContributionRates {
                epf: Decimal::new(8, 2),
                etf: Decimal::new(3, 2),
            },
            tax_brackets: vec![
                TaxBracket {
                    lower: Decimal::ZERO,
                    upper: Some(Decimal::from(100_000)),
                    rate: Decimal::ZERO,
                },
                TaxBracket {
                    lower: Decimal::from(100_000),
                    upper: Some(Decimal::from(150_000)),
                    rate: Decimal::new(6, 2),
                },
                TaxBracket {
                    lower: Decimal::from(150_000),
                    upper: Some(Decimal::from(200_000)),
                    rate: Decimal::new(12, 2),
                },
                TaxBracket {
                    lower: Decimal::from(200_000),
                    upper: None,
                    rate: Decimal::new(18, 2),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PayrollPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_default_policy_constants() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.working_days_per_month.get(), 28);
        assert_eq!(policy.hours_per_day.get(), 8);
        assert_eq!(policy.contributions.epf, dec("0.08"));
        assert_eq!(policy.contributions.etf, dec("0.03"));
        assert_eq!(policy.tax_brackets.len(), 4);
    }

    #[test]
    fn test_overtime_multiplier_by_type() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.overtime_multiplier(OvertimeType::Weekday), dec("1"));
        assert_eq!(
            policy.overtime_multiplier(OvertimeType::WeekendHoliday),
            dec("1.5")
        );
    }

    #[test]
    fn test_taxable_slice_clamps_to_bracket() {
        let bracket = TaxBracket {
            lower: dec("100000"),
            upper: Some(dec("150000")),
            rate: dec("0.06"),
        };
        assert_eq!(bracket.taxable_slice(dec("90000")), Decimal::ZERO);
        assert_eq!(bracket.taxable_slice(dec("120000")), dec("20000"));
        assert_eq!(bracket.taxable_slice(dec("400000")), dec("50000"));
    }

    #[test]
    fn test_taxable_slice_extreme_gross() {
        let bracket = TaxBracket {
            lower: dec("100000"),
            upper: Some(dec("150000")),
            rate: dec("0.06"),
        };
        assert_eq!(bracket.taxable_slice(Decimal::MIN), Decimal::ZERO);
        assert_eq!(bracket.taxable_slice(Decimal::MAX), dec("50000"));
    }

    #[test]
    fn test_taxable_slice_open_bracket() {
        let bracket = TaxBracket {
            lower: dec("200000"),
            upper: None,
            rate: dec("0.18"),
        };
        assert_eq!(bracket.taxable_slice(dec("250000")), dec("50000"));
    }

    #[test]
    fn test_empty_brackets_rejected() {
        let mut policy = PayrollPolicy::default();
        policy.tax_brackets.clear();
        assert!(matches!(
            policy.validate(),
            Err(EngineError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_gap_between_brackets_rejected() {
        let mut policy = PayrollPolicy::default();
        policy.tax_brackets[1].lower = dec("110000");
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("ends at 100000"));
    }

    #[test]
    fn test_open_bracket_in_middle_rejected() {
        let mut policy = PayrollPolicy::default();
        policy.tax_brackets[1].upper = None;
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("open-ended"));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let mut policy = PayrollPolicy::default();
        policy.contributions.epf = dec("8");
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("epf"));
    }

    #[test]
    fn test_first_bracket_must_start_at_zero() {
        let mut policy = PayrollPolicy::default();
        policy.tax_brackets[0].lower = dec("1");
        assert!(policy.validate().is_err());
    }
}
