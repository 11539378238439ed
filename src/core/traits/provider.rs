//! Sketch generation trait
//!
//! The single seam between the orchestration code and the remote service.

use async_trait::async_trait;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{EncodedImage, SketchStyle, StyleParams};

/// Remote sketch generation service
///
/// Implementations perform one network call per method and never retry.
/// The batch runner and the studio only ever talk to this trait, so tests can
/// substitute a scripted generator for the real backend.
///
/// ```rust,ignore
/// let generator: Arc<dyn SketchGenerator> = Arc::new(GeminiProvider::new(config)?);
/// let sketch = generator.generate(&photo, &StyleParams::default()).await?;
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SketchGenerator: Send + Sync {
    /// Short backend identifier used in logs
    fn name(&self) -> &'static str;

    /// Render `image` in the style described by `params`
    async fn generate(
        &self,
        image: &EncodedImage,
        params: &StyleParams,
    ) -> Result<EncodedImage, ProviderError>;

    /// Modify an existing sketch according to a free-text instruction
    async fn refine(
        &self,
        image: &EncodedImage,
        instruction: &str,
        style: SketchStyle,
    ) -> Result<EncodedImage, ProviderError>;

    /// Produce an image from a text description alone
    async fn generate_from_text(&self, prompt: &str) -> Result<EncodedImage, ProviderError>;
}
