//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollPolicy};
use crate::store::{InMemorySalaryRepository, SalaryRepository};

/// Shared application state.
///
/// Holds the loaded payroll policy and the salary record store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    repository: Arc<dyn SalaryRepository>,
}

impl AppState {
    /// Creates a new application state from a policy and a store.
    pub fn new(config: ConfigLoader, repository: Arc<dyn SalaryRepository>) -> Self {
        Self {
            config: Arc::new(config),
            repository,
        }
    }

    /// Creates an application state backed by an empty in-memory store.
    pub fn in_memory(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(InMemorySalaryRepository::new()))
    }

    /// Returns the active payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Returns the salary record store.
    pub fn repository(&self) -> &dyn SalaryRepository {
        self.repository.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::in_memory(ConfigLoader::standard());
        let clone = state.clone();

        assert!(std::ptr::addr_eq(
            state.repository() as *const dyn SalaryRepository,
            clone.repository() as *const dyn SalaryRepository,
        ));
        assert_eq!(clone.policy(), &PayrollPolicy::default());
    }
}
