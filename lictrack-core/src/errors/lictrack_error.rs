use super::{ConfigError, RecordError};

/// Top-level error type for lictrack.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum LictrackError {
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tracing init failed: {0}")]
    TracingInit(String),
}

/// Convenience type alias.
pub type LictrackResult<T> = Result<T, LictrackError>;
