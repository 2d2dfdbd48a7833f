//! Canonical `MM-DD-YY` date handling.
//!
//! Feed dates carry a two-digit year that is always read as 2000+YY.
//! Anything that doesn't parse under that rule is simply not a date as far
//! as the views are concerned; callers get `None` and filter the item out.

use chrono::{Datelike, Local, NaiveDate};

/// Render a calendar date in the feed's `MM-DD-YY` form.
pub fn format_mmddyy(date: NaiveDate) -> String {
    format!(
        "{:02}-{:02}-{:02}",
        date.month(),
        date.day(),
        date.year() % 100
    )
}

/// Parse an `MM-DD-YY` string. The year component must be two digits
/// (2000+YY); four-digit years fail rather than landing in year 4000+.
pub fn parse_mmddyy(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().splitn(3, '-');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year_part = parts.next()?.trim();
    if year_part.is_empty() || year_part.len() > 2 {
        return None;
    }
    let yy: i32 = year_part.parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + yy, month, day)
}

/// Today's date in `MM-DD-YY` form, local time.
pub fn today_mmddyy() -> String {
    format_mmddyy(Local::now().date_naive())
}

/// The `YYYY-MM` month key a date falls in.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// The month key for today, local time.
pub fn current_month_key() -> String {
    month_key(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let d = parse_mmddyy("01-15-24").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(format_mmddyy(d), "01-15-24");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_mmddyy("").is_none());
        assert!(parse_mmddyy("not a date").is_none());
        assert!(parse_mmddyy("13-01-24").is_none());
        assert!(parse_mmddyy("02-30-24").is_none());
        // Four-digit year is not the canonical form.
        assert!(parse_mmddyy("01-15-2024").is_none());
        // Locale-style strings must not parse.
        assert!(parse_mmddyy("1/15/2024").is_none());
    }

    #[test]
    fn test_month_key() {
        let d = parse_mmddyy("01-15-24").unwrap();
        assert_eq!(month_key(d), "2024-01");
        let d = parse_mmddyy("12-03-09").unwrap();
        assert_eq!(month_key(d), "2009-12");
    }

    #[test]
    fn test_today_is_canonical() {
        let today = today_mmddyy();
        assert!(parse_mmddyy(&today).is_some(), "today() must round-trip: {}", today);
    }
}
