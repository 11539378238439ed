//! Google Gemini Provider
//!
//! Image-capable Gemini models reached through the Google AI Studio
//! `generateContent` endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;

// Re-export main types
pub use client::GeminiClient;
pub use config::{API_KEY_ENV_VARS, DEFAULT_MODEL, GeminiConfig, api_key_from_env};
pub use error::{GeminiError, GeminiErrorMapper};
pub use provider::GeminiProvider;

/// Create
pub fn create_gemini_provider(config: GeminiConfig) -> Result<GeminiProvider, GeminiError> {
    GeminiProvider::new(config)
}

/// Create
pub fn create_gemini_provider_from_env() -> Result<GeminiProvider, GeminiError> {
    let config = GeminiConfig::from_env()?;
    GeminiProvider::new(config)
}
