//! In-memory salary store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{NewSalaryRecord, SalaryFilter, SalaryRecord};

use super::SalaryRepository;

/// A salary store held in process memory.
///
/// Readers share the lock; writers take it exclusively.
#[derive(Debug, Default)]
pub struct InMemorySalaryRepository {
    records: RwLock<HashMap<Uuid, SalaryRecord>>,
}

impl InMemorySalaryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::StorageError {
        message: "salary store lock poisoned".to_string(),
    }
}

impl SalaryRepository for InMemorySalaryRepository {
    fn create(&self, record: NewSalaryRecord) -> EngineResult<SalaryRecord> {
        let record = SalaryRecord::from_new(Uuid::new_v4(), record, Utc::now());
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(record.id, record.clone());
        debug!(id = %record.id, month = %record.input.month, "Created salary record");
        Ok(record)
    }

    fn update(&self, id: Uuid, record: NewSalaryRecord) -> EngineResult<SalaryRecord> {
        let mut records = self.records.write().map_err(poisoned)?;
        let existing = records
            .get_mut(&id)
            .ok_or(EngineError::RecordNotFound { id })?;
        existing.apply_update(record, Utc::now());
        debug!(id = %id, "Updated salary record");
        Ok(existing.clone())
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records
            .remove(&id)
            .map(|_| debug!(id = %id, "Deleted salary record"))
            .ok_or(EngineError::RecordNotFound { id })
    }

    fn list(&self, filter: &SalaryFilter) -> EngineResult<Vec<SalaryRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        let mut matching: Vec<SalaryRecord> = records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.input
                .month
                .cmp(&a.input.month)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(matching)
    }

    fn get(&self, id: Uuid) -> EngineResult<SalaryRecord> {
        let records = self.records.read().map_err(poisoned)?;
        records
            .get(&id)
            .cloned()
            .ok_or(EngineError::RecordNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_full_salary;
    use crate::config::PayrollPolicy;
    use crate::models::{LeaveType, OvertimeType, SalaryInput};
    use rust_decimal::Decimal;

    fn create_payload(employee: &str, month: &str, base: i64) -> NewSalaryRecord {
        let input = SalaryInput {
            base_salary: Decimal::from(base),
            bonus: Decimal::ZERO,
            overtime_type: OvertimeType::Weekday,
            overtime_hours: 0,
            leave_type: LeaveType::FullPay,
            no_pay_leave_days: 0,
            month: month.parse().unwrap(),
            employee_ref: Some(employee.to_string()),
        };
        let result = compute_full_salary(&input, &PayrollPolicy::default());
        NewSalaryRecord { input, result }
    }

    #[test]
    fn test_create_then_get() {
        let store = InMemorySalaryRepository::new();
        let created = store.create(create_payload("emp_001", "2024-05", 80_000)).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.result.net_salary, Decimal::from(71_200));
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn test_get_unknown_returns_not_found() {
        let store = InMemorySalaryRepository::new();
        let id = Uuid::new_v4();

        match store.get(id) {
            Err(EngineError::RecordNotFound { id: missing }) => assert_eq!(missing, id),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_replaces_payload() {
        let store = InMemorySalaryRepository::new();
        let created = store.create(create_payload("emp_001", "2024-05", 80_000)).unwrap();

        let updated = store
            .update(created.id, create_payload("emp_001", "2024-05", 250_000))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.result.tax, Decimal::from(18_000));
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_returns_not_found() {
        let store = InMemorySalaryRepository::new();
        let result = store.update(Uuid::new_v4(), create_payload("emp_001", "2024-05", 80_000));
        assert!(matches!(result, Err(EngineError::RecordNotFound { .. })));
    }

    #[test]
    fn test_delete_removes_record() {
        let store = InMemorySalaryRepository::new();
        let created = store.create(create_payload("emp_001", "2024-05", 80_000)).unwrap();

        store.delete(created.id).unwrap();

        assert!(store.get(created.id).is_err());
        assert!(matches!(
            store.delete(created.id),
            Err(EngineError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_list_filters_and_sorts_newest_month_first() {
        let store = InMemorySalaryRepository::new();
        store.create(create_payload("emp_001", "2024-04", 80_000)).unwrap();
        store.create(create_payload("emp_001", "2024-06", 80_000)).unwrap();
        store.create(create_payload("emp_002", "2024-05", 80_000)).unwrap();

        let all = store.list(&SalaryFilter::default()).unwrap();
        let months: Vec<String> = all.iter().map(|r| r.input.month.to_string()).collect();
        assert_eq!(months, vec!["2024-06", "2024-05", "2024-04"]);

        let filter = SalaryFilter {
            employee_ref: Some("emp_001".to_string()),
            month: None,
        };
        assert_eq!(store.list(&filter).unwrap().len(), 2);

        let filter = SalaryFilter {
            employee_ref: None,
            month: Some("2024-05".parse().unwrap()),
        };
        let may = store.list(&filter).unwrap();
        assert_eq!(may.len(), 1);
        assert_eq!(may[0].input.employee_ref.as_deref(), Some("emp_002"));
    }
}
