//! Top-level application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::*;
use crate::core::providers::gemini::{GeminiConfig, api_key_from_env};
use crate::core::types::StyleParams;

/// Everything a configuration file can contain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini connection settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Style used when the command line does not override it
    #[serde(default)]
    pub defaults: StyleParams,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Overlay values from the process environment.
    ///
    /// The API key is only taken from the environment when the file left it unset.
    pub fn with_env_overrides(mut self) -> Self {
        if self.gemini.api_key.is_none() {
            self.gemini.api_key = api_key_from_env();
        }
        self.with_overrides_from(env_var)
    }

    /// Overlay every non-secret value found through `lookup`
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        if let Some(timeout) = lookup("GEMINI_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.gemini = self.gemini.with_timeout(timeout);
        }
        if let Some(level) = lookup("SKETCHFORGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SKETCHFORGE_LOG_FORMAT").and_then(|v| v.parse().ok()) {
            self.logging.format = format;
        }
        if let Some(dir) = lookup("SKETCHFORGE_OUTPUT_DIR") {
            self.output.directory = Some(PathBuf::from(dir));
        }
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
