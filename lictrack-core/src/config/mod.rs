pub mod expiry_config;
pub mod observability_config;
pub mod report_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use expiry_config::ExpiryConfig;
pub use observability_config::ObservabilityConfig;
pub use report_config::ReportConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LictrackConfig {
    pub expiry: ExpiryConfig,
    pub report: ReportConfig,
    pub observability: ObservabilityConfig,
}

impl LictrackConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded lictrack config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report.title_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.title_prefix",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
