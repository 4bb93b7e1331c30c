//! Configuration loading and management for the payroll engine.
//!
//! This module loads the payroll policy (month normalization, overtime
//! multipliers, EPF/ETF rates and the progressive tax schedule) from YAML,
//! or provides the built-in standard policy.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::{
    ContributionRates, OvertimeMultipliers, PayrollPolicy, STANDARD_HOURS_PER_DAY,
    STANDARD_WORKING_DAYS_PER_MONTH, TaxBracket,
};
