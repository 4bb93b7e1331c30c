//! Request types for the payroll API.
//!
//! [`SalaryRequest`] is the strict body for creating and updating stored
//! salaries. [`SalaryForm`] is the lenient body for the preview endpoint,
//! where numeric fields may arrive as numbers, numeric strings or garbage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{FormValue, coerce_leave_type, coerce_overtime_type};
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveType, OvertimeType, PayMonth, SalaryInput};

/// Request body for `POST /salaries` and `PUT /salaries/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
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
    /// Days of no-pay leave.
    #[serde(default)]
    pub no_pay_leave_days: u32,
    /// The month the salary is for, as `YYYY-MM`.
    pub month: PayMonth,
    /// Opaque employee reference.
    #[serde(default)]
    pub employee_ref: Option<String>,
}

impl From<SalaryRequest> for SalaryInput {
    fn from(req: SalaryRequest) -> Self {
        SalaryInput {
            base_salary: req.base_salary,
            bonus: req.bonus,
            overtime_type: req.overtime_type,
            overtime_hours: req.overtime_hours,
            leave_type: req.leave_type,
            no_pay_leave_days: req.no_pay_leave_days,
            month: req.month,
            employee_ref: req.employee_ref,
        }
    }
}

/// Request body for `POST /salaries/preview`.
///
/// Every field is optional. Unparseable numbers become zero and unknown
/// overtime or leave types fall back to weekday and full pay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryForm {
    /// Monthly base salary.
    #[serde(default)]
    pub base_salary: Option<FormValue>,
    /// Bonus paid this month.
    #[serde(default)]
    pub bonus: Option<FormValue>,
    /// Rate class of the overtime worked.
    #[serde(default)]
    pub overtime_type: Option<FormValue>,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Option<FormValue>,
    /// Whether leave is paid.
    #[serde(default)]
    pub leave_type: Option<FormValue>,
    /// Days of no-pay leave.
    #[serde(default)]
    pub no_pay_leave_days: Option<FormValue>,
    /// The month the salary is for, as `YYYY-MM`.
    #[serde(default)]
    pub month: Option<String>,
    /// Opaque employee reference.
    #[serde(default)]
    pub employee_ref: Option<String>,
}

impl SalaryForm {
    /// Coerces the form into a calculator input.
    ///
    /// Only the month can fail: it is required and must be `YYYY-MM`.
    pub fn into_input(self) -> EngineResult<SalaryInput> {
        let month: PayMonth = self
            .month
            .as_deref()
            .ok_or_else(|| EngineError::InvalidMonth {
                value: String::new(),
            })?
            .parse()?;

        let amount = |value: &Option<FormValue>| {
            value.as_ref().map(FormValue::to_amount).unwrap_or_default()
        };
        let count = |value: &Option<FormValue>| {
            value.as_ref().map(FormValue::to_count).unwrap_or_default()
        };

        Ok(SalaryInput {
            base_salary: amount(&self.base_salary),
            bonus: amount(&self.bonus),
            overtime_type: self
                .overtime_type
                .as_ref()
                .and_then(FormValue::as_text)
                .map(coerce_overtime_type)
                .unwrap_or_default(),
            overtime_hours: count(&self.overtime_hours),
            leave_type: self
                .leave_type
                .as_ref()
                .and_then(FormValue::as_text)
                .map(coerce_leave_type)
                .unwrap_or_default(),
            no_pay_leave_days: count(&self.no_pay_leave_days),
            month,
            employee_ref: self.employee_ref.filter(|r| !r.trim().is_empty()),
        })
    }
}
