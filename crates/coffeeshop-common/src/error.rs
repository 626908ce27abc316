//! Configuration error taxonomy shared by every crate in the workspace

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or reading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A configuration source could not be parsed or extracted
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// A single value was rejected while being read
    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// The assembled record violates one or more invariants
    #[error("Configuration validation failed: {}", details.join("; "))]
    ValidationFailed { details: Vec<String> },

    /// Lookup of a key the record does not define
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    /// The process-wide configuration was already frozen
    #[error("Configuration has already been initialized")]
    AlreadyInitialized,

    /// The process-wide configuration was read before being frozen
    #[error("Configuration has not been initialized")]
    NotInitialized,
}

impl ConfigurationError {
    pub fn parse(details: impl Into<String>) -> Self {
        Self::ParseError {
            details: details.into(),
        }
    }

    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Individual violations carried by a validation failure
    pub fn violations(&self) -> &[String] {
        match self {
            Self::ValidationFailed { details } => details,
            _ => &[],
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
