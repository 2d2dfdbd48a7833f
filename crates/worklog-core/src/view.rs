//! View selection: derives one display record set from snapshot + history.

use crate::dates;
use worklog_types::{DateFilter, ViewMode, WorkItem, WorkStatus};

/// Display-size guard on the pending view. Not a semantic limit; the first
/// 50 pending items in history order are shown, never a sorted subset.
pub const PENDING_DISPLAY_CAP: usize = 50;

/// Derive the display record set for a view mode.
///
/// Deterministic in its inputs and side-effect free. `None` stands for an
/// unrecognized mode and falls back to the snapshot unfiltered.
pub fn select(
    mode: Option<ViewMode>,
    snapshot: &[WorkItem],
    history: &[WorkItem],
    filter: &DateFilter,
) -> Vec<WorkItem> {
    match mode {
        Some(ViewMode::Live) => {
            let today = dates::today_mmddyy();
            snapshot
                .iter()
                .filter(|item| item.date == today)
                .cloned()
                .collect()
        }
        Some(ViewMode::Monthly) => monthly(history, filter),
        Some(ViewMode::Pending) => history
            .iter()
            .filter(|item| item.status == WorkStatus::Pending)
            .take(PENDING_DISPLAY_CAP)
            .cloned()
            .collect(),
        None => snapshot.to_vec(),
    }
}

/// History items falling in the filter's month, optionally narrowed to one
/// day by exact date-string equality. Items whose stored date fails to
/// parse are excluded, never an error.
fn monthly(history: &[WorkItem], filter: &DateFilter) -> Vec<WorkItem> {
    history
        .iter()
        .filter(|item| match dates::parse_mmddyy(&item.date) {
            Some(date) => dates::month_key(date) == filter.month,
            None => false,
        })
        .filter(|item| match &filter.day {
            Some(day) => &item.date == day,
            None => true,
        })
        .cloned()
        .collect()
}
