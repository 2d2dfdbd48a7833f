//! Record parser for the comma-separated feed.
//!
//! The feed is naive CSV: fields are split on every comma, with no support
//! for commas embedded in quoted fields. That matches the upstream export
//! and keeps the parser a pure function over one line of text.

use crate::dates;
use worklog_types::{WorkItem, WorkStatus};

/// Positional fields expected per line: date, employee name, work, status.
const MIN_FIELDS: usize = 4;

/// Trim a raw field and unwrap one layer of surrounding double quotes.
fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// Parse one data line into a work item, or reject it.
///
/// Rejections are silent (a debug trace at most): fewer than four fields,
/// or an empty employee name or work description. An empty date field
/// falls back to today's date in canonical `MM-DD-YY` form.
pub fn parse_line(line: &str) -> Option<WorkItem> {
    let fields: Vec<&str> = line.split(',').map(clean_field).collect();
    if fields.len() < MIN_FIELDS {
        tracing::debug!(
            target: "worklog::parser",
            "Rejected line with {} field(s): {:?}",
            fields.len(),
            line
        );
        return None;
    }

    let employee_name = fields[1];
    let work = fields[2];
    if employee_name.is_empty() || work.is_empty() {
        tracing::debug!(target: "worklog::parser", "Rejected line with empty name or work: {:?}", line);
        return None;
    }

    let date = if fields[0].is_empty() {
        dates::today_mmddyy()
    } else {
        fields[0].to_string()
    };

    Some(WorkItem {
        date,
        employee_name: employee_name.to_string(),
        work: work.to_string(),
        status: WorkStatus::from_field(fields[3]),
        observed_at: chrono::Utc::now(),
    })
}

/// Parse a full feed body into a snapshot.
///
/// Line 0 is the header row and is discarded; blank lines are skipped;
/// rejected lines contribute nothing.
pub fn parse_feed(text: &str) -> Vec<WorkItem> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}
