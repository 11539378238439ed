//! Section validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::providers::gemini::GeminiConfig;
use crate::core::types::StyleParams;
use tracing::debug;
use url::Url;

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating application configuration");

        Validate::validate(&self.gemini).map_err(|e| format!("gemini: {}", e))?;
        Validate::validate(&self.defaults).map_err(|e| format!("defaults: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("logging: {}", e))?;
        self.output.validate().map_err(|e| format!("output: {}", e))?;

        Ok(())
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base URL '{}': {}", self.base_url, e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(format!("base URL must use http or https, got {}", scheme)),
        }

        if self.model.trim().is_empty() {
            return Err("model name cannot be empty".to_string());
        }

        if self.request_timeout == 0 || self.connect_timeout == 0 {
            return Err("timeouts must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("connect timeout cannot be greater than request timeout".to_string());
        }

        if let Some(proxy) = &self.proxy_url {
            Url::parse(proxy).map_err(|e| format!("invalid proxy URL '{}': {}", proxy, e))?;
        }

        Ok(())
    }
}

impl Validate for StyleParams {
    fn validate(&self) -> Result<(), String> {
        StyleParams::validate(self).map_err(|e| e.to_string())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("log level cannot be empty".to_string());
        }
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("invalid log level '{}': {}", self.level, e))
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.suffix.contains(['/', '\\']) {
            return Err("suffix cannot contain path separators".to_string());
        }
        if self.directory.is_none() && self.suffix.is_empty() {
            return Err("an empty suffix requires a separate output directory".to_string());
        }
        Ok(())
    }
}
