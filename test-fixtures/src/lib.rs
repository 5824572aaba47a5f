//! Shared builders and canned batches for lictrack tests and benches.

use chrono::{NaiveDate, NaiveDateTime};
use lictrack_core::models::{LicenseRecord, LicenseTerm};

/// Calendar date shorthand. Panics on an impossible date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| panic!("invalid fixture date {y}-{m}-{d}"))
}

/// An evaluation instant at `hh:mm` on the given day.
pub fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(hh, mm, 0)
        .unwrap_or_else(|| panic!("invalid fixture time {hh}:{mm}"))
}

/// Midday on the given day.
pub fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 12, 0)
}

/// A web license paid on `paid` for `months` months.
pub fn web_license(client_id: &str, paid: NaiveDate, months: u32) -> LicenseRecord {
    LicenseRecord::new(client_id, Some(paid), Some(paid), Some(LicenseTerm::from_months(months)))
}

/// A web license with the unlimited sentinel term.
pub fn unlimited_license(client_id: &str, paid: Option<NaiveDate>) -> LicenseRecord {
    LicenseRecord::new(client_id, paid, paid, Some(LicenseTerm::Unlimited))
}

/// A web license whose payment date could not be parsed.
pub fn undated_license(client_id: &str, months: u32) -> LicenseRecord {
    LicenseRecord::new(client_id, None, None, Some(LicenseTerm::Months(months)))
}

/// Mixed batch for the June 2024 report window:
/// two unlimited, one undated, one expiring 2024-06-15, one expiring 2024-07-05.
pub fn june_2024_batch() -> Vec<LicenseRecord> {
    vec![
        unlimited_license("unlimited-a", Some(date(2024, 1, 15))),
        unlimited_license("unlimited-b", None),
        undated_license("undated", 6),
        web_license("due-mid-june", date(2023, 12, 15), 6),
        web_license("due-july", date(2024, 4, 5), 3),
    ]
}

/// `n` licenses with varied payment dates and terms.
pub fn synthetic_batch(n: usize) -> Vec<LicenseRecord> {
    let base = date(2023, 1, 1);
    (0..n)
        .map(|i| {
            let paid = base + chrono::Duration::days((i % 730) as i64);
            let client = format!("client-{i:05}");
            match i % 10 {
                0 => unlimited_license(&client, Some(paid)),
                1 => undated_license(&client, 12),
                _ => web_license(&client, paid, (i % 24) as u32 + 1),
            }
        })
        .collect()
}
