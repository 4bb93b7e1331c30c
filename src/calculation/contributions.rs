//! EPF and ETF contribution calculation.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::AuditStep;

use super::round_money;

/// The result of a contribution calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionsResult {
    /// Employees' Provident Fund contribution, rounded to cents.
    pub epf: Decimal,
    /// Employees' Trust Fund contribution, rounded to cents.
    pub etf: Decimal,
    /// The audit step explaining the calculation.
    pub audit_step: AuditStep,
}

/// Calculates EPF and ETF as fixed fractions of gross salary, each rounded
/// independently.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_contributions;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let result = compute_contributions(Decimal::from(80_000), &PayrollPolicy::default(), 1);
/// assert_eq!(result.epf, Decimal::from(6_400));
/// assert_eq!(result.etf, Decimal::from(2_400));
/// ```
pub fn compute_contributions(
    gross_salary: Decimal,
    policy: &PayrollPolicy,
    step_number: u32,
) -> ContributionsResult {
    let rates = &policy.contributions;
    let epf = round_money(gross_salary.saturating_mul(rates.epf));
    let etf = round_money(gross_salary.saturating_mul(rates.etf));

    let audit_step = AuditStep {
        step_number,
        rule_id: "fund_contributions".to_string(),
        rule_name: "EPF/ETF Contributions".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "epf_rate": rates.epf.normalize().to_string(),
            "etf_rate": rates.etf.normalize().to_string()
        }),
        output: serde_json::json!({
            "epf": epf.to_string(),
            "etf": etf.to_string()
        }),
        reasoning: format!(
            "EPF {} x {} = {:.2}; ETF {} x {} = {:.2}",
            gross_salary,
            rates.epf.normalize(),
            epf,
            gross_salary,
            rates.etf.normalize(),
            etf
        ),
    };

    ContributionsResult {
        epf,
        etf,
        audit_step,
    }
}
