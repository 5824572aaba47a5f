//! Calendar date helpers shared by the API boundary and the expiry engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used by the remote collection API and edit forms.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// The date part of an API timestamp: everything before the first space.
///
/// `"2024-01-15 10:30:00"` and `"2024-01-15"` both yield `"2024-01-15"`.
pub fn date_portion(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.split(' ').next().unwrap_or(trimmed)
}

/// Parse an API date (`YYYY-MM-DD[ HH:MM:SS]`). Empty or malformed text is `None`.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let date = date_portion(raw);
    if date.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(date, API_DATE_FORMAT).ok()
}

/// Format a date the way the API and report expect it.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// 00:00:00.000 on `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time of day")
}
