//! Summary shapes produced by the stats aggregator.

use crate::WorkItem;
use serde::{Deserialize, Serialize};

/// Per-status partition of a display record set. The three buckets are
/// mutually exclusive and sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub working: usize,
    pub finished: usize,
}

/// One tracked person's slice of a view.
///
/// `items` comes from the display set (so it follows the active view mode),
/// while `completed` is counted against the full history and does not move
/// when the view changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSlice {
    /// The configured name fragment this slice was built for.
    pub name: String,
    /// Display-set items whose employee name contains the fragment.
    pub items: Vec<WorkItem>,
    /// Finished items in full history for the same fragment.
    pub completed: usize,
}

/// Full stats payload for one view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
    pub counts: StatusCounts,
    pub people: Vec<PersonSlice>,
}
