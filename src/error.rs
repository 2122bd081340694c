//! Error types for Settle

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration resolution
#[derive(Error, Debug)]
pub enum SettleError {
    /// The primary configuration file is absent; callers recover with defaults
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The file exists but does not parse as a JSON mapping
    #[error("Failed to parse configuration file {path}: {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    #[error("Could not determine the directory containing the executable")]
    ExeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Generic error for unexpected conditions
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SettleError {
    /// Create a new configuration not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a new configuration parse error
    pub fn config_parse_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the recoverable "file missing" case; every other variant is fatal
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }
}

/// Result type alias for Settle operations
pub type Result<T> = std::result::Result<T, SettleError>;
