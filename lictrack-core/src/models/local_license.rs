//! Local (desktop) license record.

use serde::{Deserialize, Serialize};

/// A desktop license. These carry installation credentials, not a
/// subscription term, so they never expire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalLicense {
    pub id: Option<String>,
    pub client_id: String,
    pub client_password: String,
    pub description: String,
    /// Activation key.
    pub key: String,
    pub reference: String,
    /// Taxpayer registration number of the licensee.
    pub tax_id: String,
    /// Installation path.
    pub path: String,
}

impl LocalLicense {
    /// Description as shown in lists.
    pub fn display_name(&self) -> String {
        self.description.to_uppercase()
    }
}
