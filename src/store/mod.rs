//! Salary record persistence.
//!
//! The calculator's output is exactly the payload written here. Storage sits
//! behind [`SalaryRepository`] so the API does not depend on a particular
//! backend.

mod memory;

pub use memory::InMemorySalaryRepository;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{NewSalaryRecord, SalaryFilter, SalaryRecord};

/// Create, read, update and delete access to salary records.
///
/// Operations on an unknown id return [`crate::error::EngineError::RecordNotFound`].
pub trait SalaryRepository: Send + Sync {
    /// Stores a new record and returns it with its assigned id.
    fn create(&self, record: NewSalaryRecord) -> EngineResult<SalaryRecord>;

    /// Replaces the payload of an existing record.
    fn update(&self, id: Uuid, record: NewSalaryRecord) -> EngineResult<SalaryRecord>;

    /// Removes a record.
    fn delete(&self, id: Uuid) -> EngineResult<()>;

    /// Lists the records matching `filter`, newest month first.
    fn list(&self, filter: &SalaryFilter) -> EngineResult<Vec<SalaryRecord>>;

    /// Fetches a single record.
    fn get(&self, id: Uuid) -> EngineResult<SalaryRecord>;
}
