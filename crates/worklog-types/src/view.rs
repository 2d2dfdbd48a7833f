//! View selection inputs. Transient query state, never persisted.

use serde::{Deserialize, Serialize};

/// Named strategy for deriving a display record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Today's slice of the current snapshot.
    Live,
    /// One calendar month of history, optionally narrowed to a day.
    Monthly,
    /// All pending items across history, capped for display.
    Pending,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(ViewMode::Live),
            "monthly" => Ok(ViewMode::Monthly),
            "pending" => Ok(ViewMode::Pending),
            other => Err(format!("unsupported view mode: '{}'", other)),
        }
    }
}

/// Month/day narrowing for the monthly view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateFilter {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Optional specific day in `MM-DD-YY` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("live".parse::<ViewMode>().unwrap(), ViewMode::Live);
        assert_eq!("Monthly".parse::<ViewMode>().unwrap(), ViewMode::Monthly);
        assert!("calendar".parse::<ViewMode>().is_err());
    }
}
