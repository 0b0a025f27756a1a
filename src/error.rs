//! Error types for sioprobe.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::IndexPort;
use std::path::PathBuf;
use thiserror::Error;

/// The single failure the register protocol models: the environment refused
/// access to an index/data port pair.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("access to ports {port}/{:#04X} denied: {reason}", .port.data_port())]
    Denied { port: IndexPort, reason: String },
}

impl AccessError {
    /// Build a denial from the last OS error (errno).
    pub fn from_last_os_error(port: IndexPort) -> Self {
        Self::Denied {
            port,
            reason: std::io::Error::last_os_error().to_string(),
        }
    }

    /// The index port that was refused.
    pub fn port(&self) -> IndexPort {
        match self {
            Self::Denied { port, .. } => *port,
        }
    }
}

/// Result type alias for port acquisition.
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidFormat(e.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
