//! # lictrack-expiry
//!
//! Expiration engine for web licenses.
//! Calendar-month expiration math, report-window filtering, batch
//! evaluation against a single sampled instant, near-expiry reminders,
//! list search, and report tables.

pub mod calculator;
pub mod evaluation;
pub mod reminders;
pub mod report;
pub mod search;
pub mod table;

pub use calculator::{add_calendar_months, compute_expiration, compute_expiration_raw, compute_for};
pub use evaluation::Evaluation;
pub use reminders::{due_reminders, Reminder};
pub use report::{filter_expiring_within, ReportWindow};
pub use search::{search, Searchable};
pub use table::{ReportRow, ReportTable};
