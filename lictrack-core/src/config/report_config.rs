use serde::{Deserialize, Serialize};

/// Configuration for generated expiration reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Heading prefix; the report appends "<from> and <to>".
    pub title_prefix: String,
    /// Column headings, in row order.
    pub headers: [String; 5],
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title_prefix: "Licenses expiring between".to_string(),
            headers: [
                "Client".to_string(),
                "Installation Date".to_string(),
                "Payment Date".to_string(),
                "Months".to_string(),
                "Time Remaining".to_string(),
            ],
        }
    }
}
