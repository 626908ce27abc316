//! Error types for the environment CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, validating or reading the environment failed
    #[error(transparent)]
    Config(#[from] coffeeshop_common::ConfigurationError),

    /// Output could not be rendered
    #[error("Failed to serialize output")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
