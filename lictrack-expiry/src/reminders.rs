//! Near-expiry reminder selection.
//!
//! Produces the payloads the notification scheduler delivers; scheduling
//! and delivery themselves live outside this crate.

use chrono::NaiveDate;
use lictrack_core::config::ExpiryConfig;
use lictrack_core::models::LicenseRecord;
use serde::Serialize;
use tracing::info;

use crate::evaluation::Evaluation;

/// A reminder for one license that is about to expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub client_id: String,
    pub days_remaining: u32,
    pub expiration_date: NaiveDate,
    pub title: String,
    pub body: String,
}

impl Reminder {
    fn new(record: &LicenseRecord, days_remaining: u32, expiration_date: NaiveDate) -> Self {
        let name = record.display_name();
        let when = match days_remaining {
            0 => "today".to_string(),
            1 => "in 1 day".to_string(),
            n => format!("in {n} days"),
        };
        Self {
            client_id: record.client_id.clone(),
            days_remaining,
            expiration_date,
            title: format!("License for {name}"),
            body: format!("The license for {name} expires {when}"),
        }
    }
}

/// Reminders for every license with between 0 and
/// `config.reminder_window_days` days left, inclusive, in input order.
///
/// Unlimited, expired, and undated licenses never produce a reminder.
pub fn due_reminders(
    records: &[LicenseRecord],
    evaluation: &Evaluation,
    config: &ExpiryConfig,
) -> Vec<Reminder> {
    let reminders: Vec<Reminder> = records
        .iter()
        .filter_map(|record| {
            let expiration = evaluation.expiration(record);
            let days = expiration.remaining.as_days()?;
            let date = expiration.expiration_date?;
            (days <= config.reminder_window_days).then(|| Reminder::new(record, days, date))
        })
        .collect();

    info!(
        scanned = records.len(),
        due = reminders.len(),
        window_days = config.reminder_window_days,
        "reminder scan complete"
    );
    reminders
}
