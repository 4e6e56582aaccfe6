//! Error types for heartbeat

use thiserror::Error;

/// The main error type for heartbeat operations
#[derive(Debug, Error)]
pub enum HeartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

/// Result type alias for heartbeat operations
pub type Result<T> = std::result::Result<T, HeartError>;

impl From<toml::ser::Error> for HeartError {
    fn from(err: toml::ser::Error) -> Self {
        HeartError::TomlSerError(err.to_string())
    }
}
