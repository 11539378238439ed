//! Configuration management
//!
//! A YAML file (optional) is loaded first, then environment variables
//! (including a `.env` file) fill in or override individual values. The CLI
//! applies its own flags on top of the result.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::gemini::GeminiConfig;
use crate::core::types::StyleParams;
use crate::utils::error::{Result, SketchError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SketchError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults configuration
        let app: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| SketchError::config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        load_dotenv();

        let config = Self {
            app: AppConfig::default().with_env_overrides(),
        };
        config.validate()?;
        Ok(config)
    }

    /// File (when given) plus environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        load_dotenv();

        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let config = Self {
            app: base.app.with_env_overrides(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn gemini(&self) -> &GeminiConfig {
        &self.app.gemini
    }

    pub fn defaults(&self) -> &StyleParams {
        &self.app.defaults
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    pub fn output(&self) -> &OutputConfig {
        &self.app.output
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.app.validate().map_err(SketchError::config)
    }

    /// Serialize to YAML with the API key removed
    pub fn to_yaml(&self) -> Result<String> {
        let mut redacted = self.app.clone();
        redacted.gemini.api_key = None;
        serde_yaml::to_string(&redacted)
            .map_err(|e| SketchError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}
