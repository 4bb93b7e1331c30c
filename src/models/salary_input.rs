//! Salary input model and related types.
//!
//! This module defines [`SalaryInput`], the strictly typed value the
//! calculator consumes, along with the overtime and leave enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayMonth;

/// Upper bound on overtime hours accepted for a submitted salary.
pub const MAX_OVERTIME_HOURS: u32 = 100;

/// Upper bound on no-pay leave days accepted for a submitted salary.
pub const MAX_NO_PAY_LEAVE_DAYS: u32 = 28;

/// When the overtime was worked, which decides its rate multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeType {
    /// Overtime on a normal working day.
    #[default]
    Weekday,
    /// Overtime on a weekend or public holiday.
    WeekendHoliday,
}

impl OvertimeType {
    /// Returns the wire name of the overtime type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeType::Weekday => "weekday",
            OvertimeType::WeekendHoliday => "weekend_holiday",
        }
    }
}

/// Whether leave taken in the month is paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Leave is paid in full, nothing is deducted.
    #[default]
    FullPay,
    /// Leave days are deducted pro rata from base salary.
    NoPay,
}

impl LeaveType {
    /// Returns the wire name of the leave type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::FullPay => "full_pay",
            LeaveType::NoPay => "no_pay",
        }
    }
}

/// Everything needed to compute one month's salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveType, OvertimeType, PayMonth, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     base_salary: Decimal::from(80_000),
///     bonus: Decimal::ZERO,
///     overtime_type: OvertimeType::Weekday,
///     overtime_hours: 0,
///     leave_type: LeaveType::FullPay,
///     no_pay_leave_days: 0,
///     month: "2024-05".parse::<PayMonth>().unwrap(),
///     employee_ref: None,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Bonus paid this month.
    #[serde(default)]
    pub bonus: Decimal,
    /// Rate class of the overtime worked.
    #[serde(default)]
    pub overtime_type: OvertimeType,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: u32,
    /// Whether leave is paid.
    #[serde(default)]
    pub leave_type: LeaveType,
    /// Days of no-pay leave; ignored for full-pay leave.
    #[serde(default)]
    pub no_pay_leave_days: u32,
    /// The month the salary is for.
    pub month: PayMonth,
    /// Opaque reference to the employee directory entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ref: Option<String>,
}

impl SalaryInput {
    /// Checks the input against the rules a salary must satisfy before it is
    /// submitted. The calculator accepts inputs that fail these checks.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(invalid("base_salary", "must be greater than 0"));
        }
        if self.bonus < Decimal::ZERO {
            return Err(invalid("bonus", "must not be negative"));
        }
        if self.overtime_hours > MAX_OVERTIME_HOURS {
            return Err(invalid(
                "overtime_hours",
                &format!("must be between 0 and {}", MAX_OVERTIME_HOURS),
            ));
        }
        if self.leave_type == LeaveType::NoPay && self.no_pay_leave_days > MAX_NO_PAY_LEAVE_DAYS {
            return Err(invalid(
                "no_pay_leave_days",
                &format!("must be between 0 and {}", MAX_NO_PAY_LEAVE_DAYS),
            ));
        }
        if self
            .employee_ref
            .as_deref()
            .is_some_and(|reference| reference.trim().is_empty())
        {
            return Err(invalid("employee_ref", "must not be blank"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidSalary {
        field: field.to_string(),
        message: message.to_string(),
    }
}
