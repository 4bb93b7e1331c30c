//! Progressive income tax calculation.
//!
//! The policy's bracket table is folded over the gross salary; each bracket
//! taxes only the slice of income that falls inside it. With the standard
//! policy:
//!
//! | Gross salary        | Marginal rate |
//! |---------------------|---------------|
//! | 0 - 100,000         | 0%            |
//! | 100,000 - 150,000   | 6%            |
//! | 150,000 - 200,000   | 12%           |
//! | above 200,000       | 18%           |

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::AuditStep;

use super::round_money;

/// The result of a tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxResult {
    /// Total tax, rounded to cents.
    pub tax: Decimal,
    /// The audit step explaining the calculation.
    pub audit_step: AuditStep,
}

/// Calculates progressive tax on a monthly gross salary.
///
/// Each bracket taxes the part of gross that falls between its lower and
/// upper bounds. The bracket taxes are summed unrounded and the total is
/// rounded to cents once. Gross salary at or below the first taxed bound
/// yields no tax, and any `Decimal` gross is accepted without overflow.
///
/// # Arguments
///
/// * `gross_salary` - Monthly gross salary (base + bonus + overtime)
/// * `policy` - The payroll policy supplying the bracket table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `TaxResult` containing the tax and an audit step listing each
/// bracket that contributed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_tax;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(compute_tax(Decimal::from(150_000), &policy, 1).tax, Decimal::from(3_000));
/// assert_eq!(compute_tax(Decimal::from(250_000), &policy, 1).tax, Decimal::from(18_000));
/// ```
pub fn compute_tax(gross_salary: Decimal, policy: &PayrollPolicy, step_number: u32) -> TaxResult {
    let mut slices = Vec::new();
    let mut explanations = Vec::new();

    let unrounded = policy
        .tax_brackets
        .iter()
        .fold(Decimal::ZERO, |total, bracket| {
            let slice = bracket.taxable_slice(gross_salary);
            if slice.is_zero() {
                return total;
            }
            let bracket_tax = slice.saturating_mul(bracket.rate);

            let upper = bracket
                .upper
                .map(|upper| upper.to_string())
                .unwrap_or_else(|| "and above".to_string());
            slices.push(serde_json::json!({
                "lower": bracket.lower.to_string(),
                "upper": bracket.upper.map(|upper| upper.to_string()),
                "rate": bracket.rate.normalize().to_string(),
                "taxable": slice.to_string(),
                "tax": bracket_tax.to_string()
            }));
            explanations.push(format!(
                "{} on {} ({} - {})",
                percentage(bracket.rate),
                slice,
                bracket.lower,
                upper
            ));

            total.saturating_add(bracket_tax)
        });

    let tax = round_money(unrounded);

    let reasoning = if explanations.is_empty() {
        format!("Gross {} has no taxable income", gross_salary)
    } else {
        format!("{} = {:.2}", explanations.join(" + "), tax)
    };

    TaxResult {
        tax,
        audit_step: AuditStep {
            step_number,
            rule_id: "income_tax".to_string(),
            rule_name: "Progressive Income Tax".to_string(),
            input: serde_json::json!({
                "gross_salary": gross_salary.to_string()
            }),
            output: serde_json::json!({
                "brackets": slices,
                "tax": tax.to_string()
            }),
            reasoning,
        },
    }
}

fn percentage(rate: Decimal) -> String {
    format!("{}%", rate.saturating_mul(Decimal::ONE_HUNDRED).normalize())
}
