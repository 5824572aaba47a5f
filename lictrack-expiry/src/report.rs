//! Report-window filtering.

use chrono::{NaiveDate, NaiveDateTime};
use lictrack_core::dates::{end_of_day, start_of_day};
use lictrack_core::models::{AnnotatedLicense, LicenseRecord};
use tracing::{debug, info};

use crate::calculator::compute_for;

/// Inclusive date range a report covers: 00:00:00.000 on `from` through
/// 23:59:59.999 on `to`.
///
/// A window whose start is after its end is legal and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl ReportWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: start_of_day(from),
            to: end_of_day(to),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.from
    }

    pub fn end(&self) -> NaiveDateTime {
        self.to
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from.date()
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to.date()
    }

    /// True when no date can fall inside the window.
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Whether an expiration date (taken at midnight) lies in the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let instant = start_of_day(date);
        self.from <= instant && instant <= self.to
    }
}

/// Records whose expiration date falls inside `window`, each annotated with
/// its expiration state at `now`.
///
/// Unlimited records and records without a determinable expiration date are
/// always excluded, even though the latter classify as expired. Input order
/// is preserved and the input is not modified. Never fails: a bad record is
/// skipped, the rest are still reported.
pub fn filter_expiring_within(
    records: &[LicenseRecord],
    window: &ReportWindow,
    now: NaiveDateTime,
) -> Vec<AnnotatedLicense> {
    let mut selected = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        let expiration = compute_for(record, now);
        let expiration_date = match expiration.expiration_date {
            Some(date) if expiration.is_reportable() => date,
            _ => {
                debug!(
                    client_id = %record.client_id,
                    remaining = %expiration.remaining,
                    "excluded from report: no trackable expiration date"
                );
                skipped += 1;
                continue;
            }
        };
        if window.contains(expiration_date) {
            selected.push(AnnotatedLicense {
                record: record.clone(),
                expiration,
            });
        }
    }

    info!(
        from = %window.from_date(),
        to = %window.to_date(),
        total = records.len(),
        skipped,
        selected = selected.len(),
        "report window filtered"
    );
    selected
}
