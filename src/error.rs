//! Error types for the payroll engine.
//!
//! The salary calculator itself never fails; these errors cover the layers
//! around it: policy configuration, submission validation and persistence.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The payroll policy parsed but is not internally consistent.
    #[error("Invalid payroll policy: {message}")]
    InvalidPolicy {
        /// A description of the inconsistency.
        message: String,
    },

    /// A pay month was not in `YYYY-MM` form.
    #[error("Invalid pay month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected value.
        value: String,
    },

    /// A salary submission failed validation.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalary {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No salary record exists with the given id.
    #[error("Salary record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The salary store could not complete an operation.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
