//! Full salary calculation.
//!
//! Orchestrates the individual rules in a fixed order. Each amount is rounded
//! as it is produced and the rounded value is what later steps consume, so
//! results match existing pay slips to the cent.
//!
//! 1. Overtime pay
//! 2. Gross salary = base + bonus + overtime
//! 3. Tax on gross
//! 4. EPF and ETF on gross
//! 5. Leave deduction on base
//! 6. Net salary = gross - tax - EPF - ETF - leave deduction

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollPolicy;
use crate::models::{AuditStep, SalaryBreakdown, SalaryInput, SalaryResult};

use super::{
    compute_contributions, compute_leave_deduction, compute_overtime, compute_tax, round_money,
};

/// Computes a salary result from an input.
///
/// This never fails: any input, including zero, negative or very large
/// amounts, produces a complete result. Arithmetic saturates at the bounds
/// of `Decimal` instead of overflowing. Caps such as the overtime limit are
/// not applied here; see [`SalaryInput::validate`].
///
/// # Arguments
///
/// * `input` - Base salary, bonus, overtime and leave for one month
/// * `policy` - The payroll policy supplying divisors, rates and brackets
///
/// # Returns
///
/// Returns a `SalaryResult` with every amount rounded to cents and
/// `net_salary = gross_salary - tax - epf - etf - leave_deduction`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_full_salary;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{LeaveType, OvertimeType, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     base_salary: Decimal::from(80_000),
///     bonus: Decimal::ZERO,
///     overtime_type: OvertimeType::Weekday,
///     overtime_hours: 0,
///     leave_type: LeaveType::FullPay,
///     no_pay_leave_days: 0,
///     month: "2024-05".parse().unwrap(),
///     employee_ref: None,
/// };
///
/// let result = compute_full_salary(&input, &PayrollPolicy::default());
/// assert_eq!(result.gross_salary, Decimal::from(80_000));
/// assert_eq!(result.net_salary, Decimal::from(71_200));
/// ```
pub fn compute_full_salary(input: &SalaryInput, policy: &PayrollPolicy) -> SalaryResult {
    explain_full_salary(input, policy).result
}

/// Computes a salary result together with the audit steps explaining it.
///
/// # Returns
///
/// Returns a `SalaryBreakdown` holding the same result as
/// [`compute_full_salary`] and six audit steps in computation order.
pub fn explain_full_salary(input: &SalaryInput, policy: &PayrollPolicy) -> SalaryBreakdown {
    let mut steps = Vec::with_capacity(6);
    let mut step_number: u32 = 1;

    let overtime = compute_overtime(
        input.base_salary,
        input.overtime_type,
        input.overtime_hours,
        policy,
        step_number,
    );
    let overtime_pay = overtime.overtime_pay;
    steps.push(overtime.audit_step);
    step_number += 1;

    let gross_salary = input
        .base_salary
        .saturating_add(input.bonus)
        .saturating_add(overtime_pay);
    steps.push(AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "base_salary": input.base_salary.to_string(),
            "bonus": input.bonus.to_string(),
            "overtime_pay": overtime_pay.to_string()
        }),
        output: serde_json::json!({
            "gross_salary": gross_salary.to_string()
        }),
        reasoning: format!(
            "{} base + {} bonus + {} overtime = {}",
            input.base_salary, input.bonus, overtime_pay, gross_salary
        ),
    });
    step_number += 1;

    let tax = compute_tax(gross_salary, policy, step_number);
    steps.push(tax.audit_step);
    step_number += 1;

    let contributions = compute_contributions(gross_salary, policy, step_number);
    steps.push(contributions.audit_step);
    step_number += 1;

    let leave = compute_leave_deduction(
        input.base_salary,
        input.leave_type,
        input.no_pay_leave_days,
        policy,
        step_number,
    );
    steps.push(leave.audit_step);
    step_number += 1;

    let net_salary = round_money(
        gross_salary
            .saturating_sub(tax.tax)
            .saturating_sub(contributions.epf)
            .saturating_sub(contributions.etf)
            .saturating_sub(leave.deduction),
    );
    steps.push(AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "tax": tax.tax.to_string(),
            "epf": contributions.epf.to_string(),
            "etf": contributions.etf.to_string(),
            "leave_deduction": leave.deduction.to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.to_string(),
            "negative": net_salary < Decimal::ZERO
        }),
        reasoning: format!(
            "{} - {} tax - {} EPF - {} ETF - {} leave = {}",
            gross_salary, tax.tax, contributions.epf, contributions.etf, leave.deduction, net_salary
        ),
    });

    debug!(
        month = %input.month,
        gross_salary = %gross_salary,
        net_salary = %net_salary,
        "Computed salary"
    );

    SalaryBreakdown {
        result: SalaryResult {
            overtime_pay,
            gross_salary,
            tax: tax.tax,
            epf: contributions.epf,
            etf: contributions.etf,
            leave_deduction: leave.deduction,
            net_salary,
        },
        steps,
    }
}
