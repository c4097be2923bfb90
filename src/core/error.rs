//! Error types and error handling for the mdindex build pipeline.
//!
//! Per-document failures are absorbed inside the pipeline (logged,
//! document skipped); errors defined here cross the pipeline boundary
//! only for configuration problems and output emission failures.

use thiserror::Error;

/// Result type alias for mdindex operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for the index builder
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse failed: {0}")]
    ParseFailed(String),

    #[error("Output failed: {0}")]
    OutputFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is recoverable at the per-document level
    ///
    /// Recoverable errors are logged and the document is dropped;
    /// anything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, IndexError::ParseFailed(_) | IndexError::IoError(_))
    }
}
