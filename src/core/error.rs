//! Error types for core module
//!
//! Provides custom error types for configuration loading and saving.

use crate::board::BoardError;
use thiserror::Error;

/// Errors that can occur while reading or writing the board configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file parsed but describes an unusable board
    #[error("Invalid board configuration: {0}")]
    Board(#[from] BoardError),
}

impl ConfigError {
    /// True if the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
