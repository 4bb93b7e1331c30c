//! Salary result models.
//!
//! This module contains [`SalaryResult`], the seven derived amounts of a
//! salary calculation, and [`SalaryBreakdown`], which pairs a result with the
//! audit steps that explain it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The derived amounts of a salary calculation.
///
/// Every amount is rounded to two decimal places when it is computed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryResult;
/// use rust_decimal::Decimal;
///
/// let result = SalaryResult::zero();
/// assert_eq!(result.net_salary, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Base salary plus bonus plus overtime pay.
    pub gross_salary: Decimal,
    /// Progressive income tax on gross salary.
    pub tax: Decimal,
    /// Employees' Provident Fund contribution.
    pub epf: Decimal,
    /// Employees' Trust Fund contribution.
    pub etf: Decimal,
    /// Deduction for no-pay leave.
    pub leave_deduction: Decimal,
    /// Gross salary less tax, EPF, ETF and leave deduction.
    pub net_salary: Decimal,
}

impl SalaryResult {
    /// A result with every amount at zero.
    pub fn zero() -> Self {
        Self {
            overtime_pay: Decimal::ZERO,
            gross_salary: Decimal::ZERO,
            tax: Decimal::ZERO,
            epf: Decimal::ZERO,
            etf: Decimal::ZERO,
            leave_deduction: Decimal::ZERO,
            net_salary: Decimal::ZERO,
        }
    }

    /// Sum of all deductions taken from gross salary, saturating at the
    /// bounds of `Decimal`.
    pub fn total_deductions(&self) -> Decimal {
        self.tax
            .saturating_add(self.epf)
            .saturating_add(self.etf)
            .saturating_add(self.leave_deduction)
    }

    /// Checks that the result may be persisted. Deductions larger than gross
    /// produce a negative net salary, which is rejected here.
    pub fn validate(&self) -> EngineResult<()> {
        if self.net_salary < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                field: "net_salary".to_string(),
                message: format!(
                    "must not be negative (deductions {} exceed gross {})",
                    self.total_deductions(),
                    self.gross_salary
                ),
            });
        }
        Ok(())
    }
}

/// A single step in the explanation of a salary calculation.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A salary result together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The computed amounts.
    pub result: SalaryResult,
    /// The audit steps, in computation order.
    pub steps: Vec<AuditStep>,
}
