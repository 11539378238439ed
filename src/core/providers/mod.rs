//! Image generation backends
//!
//! Every backend implements [`SketchGenerator`] and reports failures as the
//! unified [`ProviderError`].

pub mod gemini;
pub mod unified_provider;

use std::sync::Arc;

use crate::core::traits::SketchGenerator;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use unified_provider::{ProviderError, UNKNOWN_ERROR};

/// Build the shared generator handle used by the studio and the batch runner
pub fn create_generator(config: GeminiConfig) -> Result<Arc<dyn SketchGenerator>, ProviderError> {
    Ok(Arc::new(GeminiProvider::new(config)?))
}
