//! Persisted salary record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayMonth, SalaryInput, SalaryResult};

/// The payload written to the salary store: a validated input and the result
/// computed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSalaryRecord {
    /// The salary input as submitted.
    #[serde(flatten)]
    pub input: SalaryInput,
    /// The amounts computed from `input`.
    #[serde(flatten)]
    pub result: SalaryResult,
}

/// A stored salary record.
///
/// Serialized flat: the input fields and result fields sit beside the id and
/// timestamps, which is the shape pay slips are rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// The salary input as submitted.
    #[serde(flatten)]
    pub input: SalaryInput,
    /// The amounts computed from `input`.
    #[serde(flatten)]
    pub result: SalaryResult,
    /// When the record was first stored.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// Builds a fresh record from a payload, stamping both timestamps with `now`.
    pub fn from_new(id: Uuid, record: NewSalaryRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            input: record.input,
            result: record.result,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the payload, keeping the id and creation time.
    pub fn apply_update(&mut self, record: NewSalaryRecord, now: DateTime<Utc>) {
        self.input = record.input;
        self.result = record.result;
        self.updated_at = now;
    }
}

/// Criteria for listing salary records. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryFilter {
    /// Only records for this employee.
    #[serde(default)]
    pub employee_ref: Option<String>,
    /// Only records for this month.
    #[serde(default)]
    pub month: Option<PayMonth>,
}

impl SalaryFilter {
    /// Returns true if the record satisfies every set criterion.
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        let employee_matches = self
            .employee_ref
            .as_deref()
            .is_none_or(|wanted| record.input.employee_ref.as_deref() == Some(wanted));
        let month_matches = self.month.is_none_or(|wanted| record.input.month == wanted);
        employee_matches && month_matches
    }
}
