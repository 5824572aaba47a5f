//! Web license record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::license_term::LicenseTerm;
use crate::errors::RecordError;

/// A web license: a time-bound subscription anchored at its payment date.
///
/// Built at the API boundary from [`RawWebLicense`](super::RawWebLicense).
/// Absent or malformed dates and terms are represented as `None` so the
/// expiry engine never re-parses strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Remote identifier; `None` for records not yet saved.
    pub id: Option<String>,
    /// Business name or reference.
    pub client_id: String,
    pub installation_date: Option<NaiveDate>,
    /// Anchor for the expiration date.
    pub payment_date: Option<NaiveDate>,
    /// `None` when the raw duration could not be normalized.
    pub term: Option<LicenseTerm>,
    /// Duration exactly as received, kept for display.
    pub raw_term: String,
}

impl LicenseRecord {
    /// Build a record from already-typed values.
    pub fn new(
        client_id: impl Into<String>,
        installation_date: Option<NaiveDate>,
        payment_date: Option<NaiveDate>,
        term: Option<LicenseTerm>,
    ) -> Self {
        Self {
            id: None,
            client_id: client_id.into(),
            installation_date,
            payment_date,
            raw_term: term.map(|t| t.to_string()).unwrap_or_default(),
            term,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self.term, Some(LicenseTerm::Unlimited))
    }

    /// Client id as shown in lists, reports, and reminders.
    pub fn display_name(&self) -> String {
        self.client_id.to_uppercase()
    }

    /// Check the fields a saved record must carry.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.client_id.trim().is_empty() {
            return Err(RecordError::EmptyClientId);
        }
        if self.term.is_none() {
            return Err(RecordError::InvalidTerm {
                value: self.raw_term.clone(),
            });
        }
        Ok(())
    }
}
