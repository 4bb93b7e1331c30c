//! Core data models for the payroll engine.
//!
//! This module contains the salary input and result types, the pay month,
//! and the persisted salary record.

mod pay_month;
mod salary_input;
mod salary_record;
mod salary_result;

pub use pay_month::PayMonth;
pub use salary_input::{
    LeaveType, MAX_NO_PAY_LEAVE_DAYS, MAX_OVERTIME_HOURS, OvertimeType, SalaryInput,
};
pub use salary_record::{NewSalaryRecord, SalaryFilter, SalaryRecord};
pub use salary_result::{AuditStep, SalaryBreakdown, SalaryResult};
