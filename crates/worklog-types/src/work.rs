//! Work item records and their identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress state of a work item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// Not started (also the fallback for unrecognized input).
    #[default]
    Pending,
    /// In progress.
    Working,
    /// Done.
    Finished,
}

impl WorkStatus {
    /// Map a raw feed field to a status. Anything outside the three known
    /// values (case-insensitive), including an empty field, is `Pending`.
    pub fn from_field(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "working" => WorkStatus::Working,
            "finished" => WorkStatus::Finished,
            _ => WorkStatus::Pending,
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkStatus::Pending => "pending",
            WorkStatus::Working => "working",
            WorkStatus::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}

/// One unit of observed work, as parsed from a feed line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Calendar date in `MM-DD-YY` form (two-digit year, 2000+YY).
    pub date: String,
    /// Who did the work (free text).
    pub employee_name: String,
    /// What was done (free text).
    pub work: String,
    /// Progress state.
    #[serde(default)]
    pub status: WorkStatus,
    /// When this record was ingested. Provisional ordering only, never
    /// part of identity.
    #[serde(default = "Utc::now")]
    pub observed_at: DateTime<Utc>,
}

impl WorkItem {
    /// The dedup key. Two items with equal keys are the same item as far
    /// as the history store is concerned; status and observation time do
    /// not participate.
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            date: self.date.clone(),
            employee_name: self.employee_name.clone(),
            work: self.work.clone(),
        }
    }
}

/// The `(date, employee_name, work)` triple used for de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub date: String,
    pub employee_name: String,
    pub work: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_field_known_values() {
        assert_eq!(WorkStatus::from_field("Working"), WorkStatus::Working);
        assert_eq!(WorkStatus::from_field("FINISHED"), WorkStatus::Finished);
        assert_eq!(WorkStatus::from_field("pending"), WorkStatus::Pending);
    }

    #[test]
    fn test_status_from_field_defaults_to_pending() {
        assert_eq!(WorkStatus::from_field("Foo"), WorkStatus::Pending);
        assert_eq!(WorkStatus::from_field(""), WorkStatus::Pending);
        assert_eq!(WorkStatus::from_field("  "), WorkStatus::Pending);
    }

    #[test]
    fn test_identity_key_ignores_status_and_observed_at() {
        let a = WorkItem {
            date: "01-15-24".into(),
            employee_name: "Abdullah".into(),
            work: "Fix pump".into(),
            status: WorkStatus::Pending,
            observed_at: Utc::now(),
        };
        let mut b = a.clone();
        b.status = WorkStatus::Finished;
        b.observed_at = Utc::now();
        assert_eq!(a.identity_key(), b.identity_key());
    }
}
