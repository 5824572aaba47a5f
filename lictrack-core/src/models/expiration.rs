//! Derived expiration state. Computed on demand, never persisted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::license_record::LicenseRecord;

/// Time left on a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemainingDays {
    /// Whole days until expiration; `0` means it expires today.
    Days(u32),
    Unlimited,
    Expired,
}

impl RemainingDays {
    /// The comparable day count, when there is one.
    pub fn as_days(&self) -> Option<u32> {
        match self {
            Self::Days(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl fmt::Display for RemainingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(1) => write!(f, "1 day"),
            Self::Days(n) => write!(f, "{n} days"),
            Self::Unlimited => write!(f, "Unlimited"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Day counts serialize as numbers, the categorical states as strings.
impl Serialize for RemainingDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Days(n) => serializer.serialize_u32(*n),
            Self::Unlimited => serializer.serialize_str("Unlimited"),
            Self::Expired => serializer.serialize_str("Expired"),
        }
    }
}

/// Outcome of the expiration calculation for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpirationResult {
    pub remaining: RemainingDays,
    /// `payment_date + term`; `None` for unlimited terms or unusable input.
    pub expiration_date: Option<NaiveDate>,
}

impl ExpirationResult {
    pub fn unlimited() -> Self {
        Self {
            remaining: RemainingDays::Unlimited,
            expiration_date: None,
        }
    }

    /// Result for records whose expiration date cannot be determined.
    pub fn undetermined() -> Self {
        Self {
            remaining: RemainingDays::Expired,
            expiration_date: None,
        }
    }

    /// Whether the record can appear in a date-window report.
    pub fn is_reportable(&self) -> bool {
        !self.remaining.is_unlimited() && self.expiration_date.is_some()
    }
}

/// A record paired with its expiration state. The record is a copy; the
/// caller's input is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLicense {
    pub record: LicenseRecord,
    pub expiration: ExpirationResult,
}
