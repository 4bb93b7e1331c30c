//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Name of the policy file inside a configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the payroll policy.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// └── policy.yaml   # Month normalization, overtime, contributions, tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads the policy from `<path>/policy.yaml` and validates it.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// describes an inconsistent policy.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;
        policy.validate()?;

        debug!(
            path = %policy_path.display(),
            policy = %policy.name,
            version = %policy.version,
            brackets = policy.tax_brackets.len(),
            "Loaded payroll policy"
        );

        Ok(Self { policy })
    }

    /// Returns a loader holding the built-in standard policy.
    pub fn standard() -> Self {
        Self {
            policy: PayrollPolicy::default(),
        }
    }

    /// Wraps an already constructed policy after validating it.
    pub fn from_policy(policy: PayrollPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}
