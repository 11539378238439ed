//! Helper functions for creating specific error types

use super::types::SketchError;
use crate::core::providers::unified_provider::ProviderError;

impl SketchError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_image<S: Into<String>>(message: S) -> Self {
        Self::InvalidImage(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState(message.into())
    }

    /// Label a provider failure with the operation that triggered it
    pub fn generation(operation: &'static str, err: &ProviderError) -> Self {
        Self::Generation {
            operation,
            message: err.message(),
        }
    }

    /// Message suitable for end users, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Generation { message, .. } => message.clone(),
            Self::Provider(err) => err.message(),
            other => other.to_string(),
        }
    }
}
