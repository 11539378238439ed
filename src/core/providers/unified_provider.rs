//! Unified Provider Error Handling
//!
//! Single error type for every image generation backend.
//!
//! | Variant | Purpose | Retryable |
//! |------|------|--------|
//! | Authentication | Missing or rejected API key | No |
//! | RateLimit | Rate limit exceeded | Yes (after delay) |
//! | ModelNotFound | Unknown model or endpoint | No |
//! | InvalidRequest | Request rejected by the service | No |
//! | Network | Transport failure | Yes |
//! | Timeout | Call exceeded the configured deadline | Yes |
//! | ProviderUnavailable | Service temporarily unavailable | Yes |
//! | ContentFiltered | Blocked by safety systems | No |
//! | NoImage | Service answered without an image | No |
//! | ApiError | Any other non-success status | 429/5xx only |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sketchforge::ProviderError;
//!
//! let err = ProviderError::rate_limit("gemini", None);
//! assert!(err.is_retryable());
//! assert_eq!(err.message(), "Rate limit exceeded");
//! ```
//!
//! Batch items store [`ProviderError::message`] rather than the full
//! `Display` text, so per-item errors read like the service's own message.

/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} is unavailable: {message}")]
    ProviderUnavailable {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    /// Content filtered by safety systems
    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    /// The call succeeded but the response held no image part.
    /// `description` carries whatever text the model sent instead.
    #[error("{} returned no image{}", .provider, .description.as_deref().map(|d| format!(": {}", d)).unwrap_or_default())]
    NoImage {
        provider: &'static str,
        description: Option<String>,
    },

    /// API error with status code
    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} error: {message}")]
    Other {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create rate limit error with a service-provided message
    pub fn rate_limit_with_retry(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::RateLimit {
            provider,
            message: message.into(),
            retry_after,
        }
    }

    /// Create model not found error
    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create provider unavailable error
    pub fn provider_unavailable(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create serialization error
    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create content filtered error
    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    /// Create missing image error
    pub fn no_image(provider: &'static str, description: Option<String>) -> Self {
        Self::NoImage {
            provider,
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create other/generic error
    pub fn other(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Other {
            provider,
            message: message.into(),
        }
    }

    /// Get the provider name that caused this error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::ProviderUnavailable { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Serialization { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::NoImage { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Other { provider, .. } => *provider,
        }
    }

    /// Human-readable message without the provider prefix.
    ///
    /// Falls back to [`UNKNOWN_ERROR`] when the failure carries no text.
    pub fn message(&self) -> String {
        let raw = match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::InvalidRequest { message, .. }
            | Self::Network { message, .. }
            | Self::ProviderUnavailable { message, .. }
            | Self::Configuration { message, .. }
            | Self::Serialization { message, .. }
            | Self::Timeout { message, .. }
            | Self::ApiError { message, .. }
            | Self::Other { message, .. } => message.clone(),
            Self::ModelNotFound { model, .. } => format!("Model '{}' not found", model),
            Self::ContentFiltered { reason, .. } => reason.clone(),
            Self::NoImage { description, .. } => match description {
                Some(text) => format!("No image returned: {}", text),
                None => "No image returned".to_string(),
            },
        };

        if raw.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            raw
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::RateLimit { .. }
            | Self::ProviderUnavailable { .. } => true,

            // API errors depend on status code
            Self::ApiError { status, .. } => matches!(*status, 429 | 500..=599),

            Self::Authentication { .. }
            | Self::ModelNotFound { .. }
            | Self::InvalidRequest { .. }
            | Self::Configuration { .. }
            | Self::Serialization { .. }
            | Self::ContentFiltered { .. }
            | Self::NoImage { .. }
            | Self::Other { .. } => false,
        }
    }
}
