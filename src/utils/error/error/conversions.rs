//! Type conversions for SketchError

use super::types::SketchError;
use crate::core::providers::unified_provider::ProviderError;

impl From<ProviderError> for SketchError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => SketchError::Config(message),
            other => SketchError::Provider(other),
        }
    }
}

impl From<base64::DecodeError> for SketchError {
    fn from(err: base64::DecodeError) -> Self {
        SketchError::InvalidImage(format!("invalid base64 payload: {}", err))
    }
}
