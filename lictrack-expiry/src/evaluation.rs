//! A single evaluation pass over a set of licenses.

use chrono::{Local, NaiveDate, NaiveDateTime};
use lictrack_core::models::{AnnotatedLicense, ExpirationResult, LicenseRecord};
use rayon::prelude::*;

use crate::calculator::compute_for;

/// One sampled instant, shared by every record in a pass.
///
/// Rendering a list, scanning for reminders, and building a report each
/// create one `Evaluation` and judge all records against it, so a batch
/// never straddles midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    now: NaiveDateTime,
}

impl Evaluation {
    /// Evaluate at a fixed instant.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Sample the local wall clock once.
    pub fn local_now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn expiration(&self, record: &LicenseRecord) -> ExpirationResult {
        compute_for(record, self.now)
    }

    pub fn annotate(&self, record: &LicenseRecord) -> AnnotatedLicense {
        AnnotatedLicense {
            record: record.clone(),
            expiration: self.expiration(record),
        }
    }

    /// Annotate every record, in parallel, preserving input order.
    pub fn evaluate_batch(&self, records: &[LicenseRecord]) -> Vec<AnnotatedLicense> {
        records.par_iter().map(|r| self.annotate(r)).collect()
    }
}
