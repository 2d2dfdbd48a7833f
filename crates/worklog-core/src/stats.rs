//! Stats aggregation over a display record set.

use worklog_types::{PersonSlice, StatsSummary, StatusCounts, WorkItem, WorkStatus};

/// Partition a display set into per-status counts.
pub fn status_counts(display: &[WorkItem]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: display.len(),
        ..StatusCounts::default()
    };
    for item in display {
        match item.status {
            WorkStatus::Pending => counts.pending += 1,
            WorkStatus::Working => counts.working += 1,
            WorkStatus::Finished => counts.finished += 1,
        }
    }
    counts
}

/// Build one tracked person's slice.
///
/// Matching is a case-insensitive substring test against the employee
/// name. The item list follows the display set, but `completed` is counted
/// against the full history so it stays put when the view mode changes.
pub fn person_slice(fragment: &str, display: &[WorkItem], history: &[WorkItem]) -> PersonSlice {
    let needle = fragment.to_lowercase();
    let matches = |item: &WorkItem| item.employee_name.to_lowercase().contains(&needle);

    let items: Vec<WorkItem> = display.iter().filter(|i| matches(i)).cloned().collect();
    let completed = history
        .iter()
        .filter(|i| i.status == WorkStatus::Finished && matches(i))
        .count();

    PersonSlice {
        name: fragment.to_string(),
        items,
        completed,
    }
}

/// Full stats payload for a view: status counts plus one slice per tracked
/// person.
pub fn summarize(display: &[WorkItem], history: &[WorkItem], people: &[String]) -> StatsSummary {
    StatsSummary {
        counts: status_counts(display),
        people: people
            .iter()
            .map(|name| person_slice(name, display, history))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, status: WorkStatus) -> WorkItem {
        WorkItem {
            date: "01-15-24".to_string(),
            employee_name: name.to_string(),
            work: "job".to_string(),
            status,
            observed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_status_counts_partition() {
        let display = vec![
            item("A", WorkStatus::Pending),
            item("B", WorkStatus::Pending),
            item("C", WorkStatus::Working),
            item("D", WorkStatus::Finished),
        ];
        let counts = status_counts(&display);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.working, 1);
        assert_eq!(counts.finished, 1);
        assert_eq!(counts.total, counts.pending + counts.working + counts.finished);
    }

    #[test]
    fn test_person_match_is_case_insensitive_substring() {
        let display = vec![
            item("Abdullah Khan", WorkStatus::Working),
            item("Hamza", WorkStatus::Pending),
        ];
        let slice = person_slice("abdullah", &display, &[]);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.items[0].employee_name, "Abdullah Khan");
    }

    #[test]
    fn test_completed_counts_come_from_history_not_display() {
        // Display set holds no finished work for Abdullah, but history does:
        // the completed count must follow history.
        let display = vec![item("Abdullah", WorkStatus::Pending)];
        let history = vec![
            item("Abdullah", WorkStatus::Finished),
            item("Abdullah", WorkStatus::Finished),
            item("Abdullah", WorkStatus::Pending),
            item("Hamza", WorkStatus::Finished),
        ];
        let slice = person_slice("Abdullah", &display, &history);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.completed, 2);
    }

    #[test]
    fn test_summarize_builds_one_slice_per_person() {
        let display = vec![item("Abdullah", WorkStatus::Pending)];
        let history = vec![item("Hamza", WorkStatus::Finished)];
        let people = vec!["Abdullah".to_string(), "Hamza".to_string()];

        let summary = summarize(&display, &history, &people);
        assert_eq!(summary.people.len(), 2);
        assert_eq!(summary.people[0].items.len(), 1);
        assert_eq!(summary.people[0].completed, 0);
        assert_eq!(summary.people[1].items.len(), 0);
        assert_eq!(summary.people[1].completed, 1);
    }
}
