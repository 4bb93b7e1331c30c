//! No-pay leave deduction.
//!
//! No-pay leave is deducted pro rata from base salary using the normalized
//! month (standard: 28 days). Full-pay leave deducts nothing.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{AuditStep, LeaveType};

use super::round_money;

/// The result of a leave deduction calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDeductionResult {
    /// The deduction, rounded to cents.
    pub deduction: Decimal,
    /// The audit step explaining the calculation.
    pub audit_step: AuditStep,
}

/// Calculates the deduction for leave taken in the month.
///
/// Days beyond a full month are not rejected; the deduction simply keeps
/// growing proportionally.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_leave_deduction;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::LeaveType;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let result = compute_leave_deduction(Decimal::from(140_000), LeaveType::NoPay, 3, &policy, 1);
/// assert_eq!(result.deduction, Decimal::from(15_000));
/// ```
pub fn compute_leave_deduction(
    base_salary: Decimal,
    leave_type: LeaveType,
    no_pay_leave_days: u32,
    policy: &PayrollPolicy,
    step_number: u32,
) -> LeaveDeductionResult {
    let input = serde_json::json!({
        "base_salary": base_salary.to_string(),
        "leave_type": leave_type.as_str(),
        "no_pay_leave_days": no_pay_leave_days
    });

    match leave_type {
        LeaveType::FullPay => LeaveDeductionResult {
            deduction: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "leave_deduction".to_string(),
                rule_name: "Leave Deduction".to_string(),
                input,
                output: serde_json::json!({
                    "deduction": "0.00",
                    "deduction_applied": false
                }),
                reasoning: "Full-pay leave, nothing deducted".to_string(),
            },
        },
        LeaveType::NoPay => {
            let daily_rate = base_salary / Decimal::from(policy.working_days_per_month.get());
            let deduction =
                round_money(daily_rate.saturating_mul(Decimal::from(no_pay_leave_days)));

            LeaveDeductionResult {
                deduction,
                audit_step: AuditStep {
                    step_number,
                    rule_id: "leave_deduction".to_string(),
                    rule_name: "Leave Deduction".to_string(),
                    input,
                    output: serde_json::json!({
                        "daily_rate": round_money(daily_rate).to_string(),
                        "deduction": deduction.to_string(),
                        "deduction_applied": true
                    }),
                    reasoning: format!(
                        "{} / {} days = {:.2} per day; {:.2} x {} no-pay days = {:.2}",
                        base_salary,
                        policy.working_days_per_month,
                        round_money(daily_rate),
                        round_money(daily_rate),
                        no_pay_leave_days,
                        deduction
                    ),
                },
            }
        }
    }
}
