//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for previewing, storing and
//! managing monthly salaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{SalaryForm, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
