//! Gemini Provider Implementation

use async_trait::async_trait;
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ProviderConfig, SketchGenerator};
use crate::core::types::{EncodedImage, SketchStyle, StyleParams};

use super::client::GeminiClient;
use super::config::GeminiConfig;
use super::error::gemini_validation_error;
use super::prompt::{refine_prompt, sketch_prompt, text_prompt};

/// Gemini-backed [`SketchGenerator`]
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration("gemini", e))?;

        let client = GeminiClient::new(config)?;
        Ok(Self { client })
    }

    pub fn model(&self) -> &str {
        &self.client.config().model
    }
}

#[async_trait]
impl SketchGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        image: &EncodedImage,
        params: &StyleParams,
    ) -> Result<EncodedImage, ProviderError> {
        params
            .validate()
            .map_err(|e| gemini_validation_error(e.to_string()))?;

        debug!(style = %params.style, model = %self.model(), "Requesting sketch");
        self.client
            .generate_image(&sketch_prompt(params), Some(image))
            .await
    }

    async fn refine(
        &self,
        image: &EncodedImage,
        instruction: &str,
        style: SketchStyle,
    ) -> Result<EncodedImage, ProviderError> {
        if instruction.trim().is_empty() {
            return Err(gemini_validation_error("Edit instruction cannot be empty"));
        }

        debug!(style = %style, "Requesting refinement");
        self.client
            .generate_image(&refine_prompt(instruction, style), Some(image))
            .await
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<EncodedImage, ProviderError> {
        if prompt.trim().is_empty() {
            return Err(gemini_validation_error("Prompt cannot be empty"));
        }

        debug!("Requesting text-to-image generation");
        self.client.generate_image(&text_prompt(prompt), None).await
    }
}
