//! Error types for sitenav-core
//!
//! A missing mount point is deliberately absent from this hierarchy: the
//! widget treats it as a silent no-op, never as a failure.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for header operations
#[derive(Error, Debug)]
pub enum HeaderError {
    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Duplicate navigation destination: {href}")]
    DuplicateDestination { href: String },

    #[error("Unknown presentation variant '{name}' (expected bar, overlay, dock, sheet or drawer)")]
    UnknownVariant { name: String },

    #[error("Unknown link set '{name}' (expected standard or live)")]
    UnknownLinkSet { name: String },

    // ===================
    // IO / Parse Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Host Errors
    // ===================
    #[error("Page host failed during {operation}: {message}")]
    Host { operation: String, message: String },
}

impl HeaderError {
    /// Build a host error from any displayable failure (JS exceptions, I/O)
    pub fn host(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HeaderError::Host {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by the hosting page rather than configuration
    pub fn is_host_failure(&self) -> bool {
        matches!(self, HeaderError::Host { .. })
    }
}

pub type Result<T> = std::result::Result<T, HeaderError>;
