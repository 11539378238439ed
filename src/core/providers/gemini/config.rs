//! Gemini Configuration Module

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderConfig;

/// Default image-capable model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Default Google AI Studio endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for an API key, in order
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "VITE_GEMINI_API_KEY"];

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    pub api_key: Option<String>,

    /// Base URL
    pub base_url: String,

    /// API version path segment
    pub api_version: String,

    /// Model used for every operation
    pub model: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Connect timeout in seconds
    pub connect_timeout: u64,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// Custom headers
    pub custom_headers: HashMap<String, String>,

    /// Log request and response bodies at debug level
    pub debug: bool,
}

impl GeminiConfig {
    /// Create
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: "v1beta".to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 120,
            connect_timeout: 10,
            proxy_url: None,
            custom_headers: HashMap::new(),
            debug: false,
        }
    }

    /// Create from the first API key variable that is set
    pub fn from_env() -> Result<Self, ProviderError> {
        api_key_from_env().map(Self::new).ok_or_else(|| {
            ProviderError::configuration(
                "gemini",
                format!(
                    "No Gemini API key found; set one of {}",
                    API_KEY_ENV_VARS.join(", ")
                ),
            )
        })
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Request timeout in seconds; the connect timeout is lowered to fit under it
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = timeout_secs;
        self.connect_timeout = self.connect_timeout.min(timeout_secs);
        self
    }

    /// Settings
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Settings
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        let mut config = Self::new("");
        config.api_key = None;
        config
    }
}

impl ProviderConfig for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err("API key is required for Google AI Studio".to_string()),
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("Invalid base URL: {}", self.base_url));
        }

        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_base(&self) -> Option<&str> {
        Some(&self.base_url)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// First non-empty API key among [`API_KEY_ENV_VARS`]
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
