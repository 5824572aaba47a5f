//! Case-insensitive list search.

use lictrack_core::models::{LicenseRecord, LocalLicense};

/// A record that list search can match against.
pub trait Searchable {
    /// The text a search query is matched against.
    fn search_key(&self) -> &str;
}

impl Searchable for LicenseRecord {
    fn search_key(&self) -> &str {
        &self.client_id
    }
}

impl Searchable for LocalLicense {
    fn search_key(&self) -> &str {
        &self.description
    }
}

/// Items whose search key contains `query`, ignoring case, in input order.
/// A blank query matches everything.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.search_key().to_lowercase().contains(&needle))
        .collect()
}
