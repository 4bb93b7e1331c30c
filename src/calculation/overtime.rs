//! Overtime pay calculation.
//!
//! The hourly rate is derived from the monthly base salary using the policy's
//! normalized month (standard: 28 days of 8 hours), independent of how many
//! days the calendar month actually has.
//!
//! ## Rate Structure
//!
//! - Weekday overtime: 1.0 x hourly rate
//! - Weekend/holiday overtime: 1.5 x hourly rate

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{AuditStep, OvertimeType};

use super::round_money;

/// The result of an overtime calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeResult {
    /// Overtime pay, rounded to cents.
    pub overtime_pay: Decimal,
    /// The audit step explaining the calculation.
    pub audit_step: AuditStep,
}

/// Returns the unrounded hourly rate for a monthly base salary.
pub fn hourly_rate(base_salary: Decimal, policy: &PayrollPolicy) -> Decimal {
    base_salary
        / Decimal::from(policy.working_days_per_month.get())
        / Decimal::from(policy.hours_per_day.get())
}

/// Calculates overtime pay.
///
/// `overtime_pay = round2(base_salary / days / hours_per_day x hours x multiplier)`.
/// Zero hours short-circuits to zero pay. Hours are not capped here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_overtime;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::OvertimeType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayrollPolicy::default();
/// let result = compute_overtime(Decimal::from(120_000), OvertimeType::Weekday, 10, &policy, 1);
/// assert_eq!(result.overtime_pay, Decimal::from_str("5357.14").unwrap());
/// ```
pub fn compute_overtime(
    base_salary: Decimal,
    overtime_type: OvertimeType,
    overtime_hours: u32,
    policy: &PayrollPolicy,
    step_number: u32,
) -> OvertimeResult {
    if overtime_hours == 0 {
        return OvertimeResult {
            overtime_pay: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "overtime_pay".to_string(),
                rule_name: "Overtime Pay".to_string(),
                input: serde_json::json!({
                    "base_salary": base_salary.to_string(),
                    "overtime_type": overtime_type.as_str(),
                    "overtime_hours": overtime_hours
                }),
                output: serde_json::json!({
                    "overtime_pay": "0.00"
                }),
                reasoning: "No overtime hours worked".to_string(),
            },
        };
    }

    let rate = hourly_rate(base_salary, policy);
    let multiplier = policy.overtime_multiplier(overtime_type);
    let overtime_pay = round_money(
        rate.saturating_mul(Decimal::from(overtime_hours))
            .saturating_mul(multiplier),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "overtime_type": overtime_type.as_str(),
            "overtime_hours": overtime_hours
        }),
        output: serde_json::json!({
            "hourly_rate": round_money(rate).to_string(),
            "multiplier": multiplier.normalize().to_string(),
            "overtime_pay": overtime_pay.to_string()
        }),
        reasoning: format!(
            "{} / {} days / {} hours = {:.2} per hour; {} {} hours x {:.2} x {} = {:.2}",
            base_salary,
            policy.working_days_per_month,
            policy.hours_per_day,
            round_money(rate),
            overtime_hours,
            overtime_type.as_str(),
            round_money(rate),
            multiplier.normalize(),
            overtime_pay
        ),
    };

    OvertimeResult {
        overtime_pay,
        audit_step,
    }
}
