//! # lictrack-core
//!
//! Foundation crate for lictrack.
//! Defines the license models, term normalization, API boundary parsing,
//! errors, config, and tracing setup. The expiry engine builds on this.

pub mod config;
pub mod dates;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LictrackConfig;
pub use errors::{LictrackError, LictrackResult, RecordError};
pub use models::{
    AnnotatedLicense, ExpirationResult, LicenseRecord, LicenseTerm, LocalLicense, RemainingDays,
};
