//! Expiration and reminder configuration.

use serde::{Deserialize, Serialize};

/// Configuration for expiration tracking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExpiryConfig {
    /// Licenses with this many days left or fewer (and not yet expired)
    /// trigger a near-expiry reminder.
    pub reminder_window_days: u32,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            reminder_window_days: 5,
        }
    }
}
