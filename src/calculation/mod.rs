//! Calculation logic for the payroll engine.
//!
//! This module contains the pure salary rules: overtime pay, progressive
//! income tax, EPF/ETF contributions, no-pay leave deduction and the full
//! salary orchestration, plus money rounding and the lenient coercion used
//! at the form boundary.

mod coercion;
mod contributions;
mod full_salary;
mod leave_deduction;
mod overtime;
mod rounding;
mod tax;

pub use coercion::{
    FormValue, coerce_amount, coerce_count, coerce_leave_type, coerce_overtime_type,
};
pub use contributions::{ContributionsResult, compute_contributions};
pub use full_salary::{compute_full_salary, explain_full_salary};
pub use leave_deduction::{LeaveDeductionResult, compute_leave_deduction};
pub use overtime::{OvertimeResult, compute_overtime, hourly_rate};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use tax::{TaxResult, compute_tax};
