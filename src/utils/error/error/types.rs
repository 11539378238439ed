//! Core error types

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for sketchforge
pub type Result<T> = std::result::Result<T, SketchError>;

/// Main error type for sketchforge
#[derive(Error, Debug)]
pub enum SketchError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Image payload could not be read or decoded
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// A user-triggered generation failed. `message` is never empty.
    #[error("{operation} failed: {message}")]
    Generation {
        operation: &'static str,
        message: String,
    },

    /// Operation not allowed in the current session state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
