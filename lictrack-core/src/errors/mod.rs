mod config_error;
mod lictrack_error;
mod record_error;

pub use config_error::ConfigError;
pub use lictrack_error::{LictrackError, LictrackResult};
pub use record_error::RecordError;
