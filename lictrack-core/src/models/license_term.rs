//! Typed license duration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// How long a web license runs, normalized once at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseTerm {
    /// No expiration is tracked.
    Unlimited,
    /// Whole calendar months counted from the payment date.
    Months(u32),
}

impl LicenseTerm {
    /// Month count that the API uses to mean "unlimited".
    pub const UNLIMITED_SENTINEL: u32 = 999;

    /// Map a month count onto a term, recognising the sentinel.
    pub fn from_months(months: u32) -> Self {
        if months == Self::UNLIMITED_SENTINEL {
            Self::Unlimited
        } else {
            Self::Months(months)
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Normalize an integral month count of any width.
    pub fn from_count(count: i64) -> Result<Self, RecordError> {
        u32::try_from(count)
            .map(Self::from_months)
            .map_err(|_| RecordError::InvalidTerm {
                value: count.to_string(),
            })
    }
}

impl FromStr for LicenseTerm {
    type Err = RecordError;

    /// Accepts a non-negative whole number with optional surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::InvalidTerm {
                value: s.to_string(),
            });
        }
        trimmed
            .parse::<u32>()
            .map(Self::from_months)
            .map_err(|_| RecordError::InvalidTerm {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for LicenseTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "{}", Self::UNLIMITED_SENTINEL),
            Self::Months(n) => write!(f, "{n}"),
        }
    }
}
