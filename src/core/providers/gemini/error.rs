//! Gemini Error Handling

use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ErrorMapper;

// Error
pub type GeminiError = ProviderError;

/// Maps Gemini HTTP statuses and error bodies to [`ProviderError`]
///
/// Holds the configured model so a bare 404 can name it.
#[derive(Debug, Clone)]
pub struct GeminiErrorMapper {
    model: String,
}

impl ErrorMapper for GeminiErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError {
        // Google wraps most failures in a JSON error object; prefer its message.
        if let Ok(json) = serde_json::from_str::<Value>(response_body) {
            if json.get("error").is_some() {
                return Self::from_api_response(&json);
            }
        }

        match status_code {
            400 => ProviderError::invalid_request("gemini", format!("Bad request: {}", response_body)),
            401 => ProviderError::authentication("gemini", "Invalid or missing API key"),
            403 => ProviderError::authentication("gemini", "Forbidden: insufficient permissions"),
            404 => ProviderError::model_not_found("gemini", self.model.clone()),
            429 => ProviderError::rate_limit("gemini", None),
            503 => ProviderError::provider_unavailable("gemini", "Service unavailable"),
            500..=599 => ProviderError::api_error(
                "gemini",
                status_code,
                format!("Server error: {}", response_body),
            ),
            _ => ProviderError::api_error("gemini", status_code, response_body),
        }
    }

    fn map_json_error(&self, error_response: &Value) -> ProviderError {
        Self::from_api_response(error_response)
    }
}

impl GeminiErrorMapper {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Response
    pub fn from_api_response(response: &Value) -> ProviderError {
        if let Some(error) = response.get("error") {
            let code = error
                .get("code")
                .and_then(|c| c.as_u64())
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(500);
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            let status = error.get("status").and_then(|s| s.as_str()).unwrap_or("");

            return match (code, status) {
                (401, _) | (_, "UNAUTHENTICATED") => {
                    ProviderError::authentication("gemini", message)
                }
                (403, _) | (_, "PERMISSION_DENIED") => {
                    ProviderError::authentication("gemini", message)
                }
                (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                    ProviderError::invalid_request("gemini", message)
                }
                // Google's text already names the missing resource
                (404, _) | (_, "NOT_FOUND") => ProviderError::api_error("gemini", 404, message),
                (429, _) | (_, "RESOURCE_EXHAUSTED") => ProviderError::rate_limit_with_retry(
                    "gemini",
                    message,
                    Self::extract_retry_after(error),
                ),
                (503, _) | (_, "UNAVAILABLE") => {
                    ProviderError::provider_unavailable("gemini", message)
                }
                (504, _) | (_, "DEADLINE_EXCEEDED") => ProviderError::timeout("gemini", message),
                _ => ProviderError::api_error("gemini", code, message),
            };
        }

        if let Some(reason) = response
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(|r| r.as_str())
        {
            return ProviderError::content_filtered("gemini", format!("Prompt blocked: {}", reason));
        }

        ProviderError::api_error("gemini", 500, "Unknown API error")
    }

    /// Error for a candidate that stopped without producing content
    pub fn from_finish_reason(finish_reason: &str) -> Option<ProviderError> {
        match finish_reason {
            "SAFETY" | "IMAGE_SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" | "SPII" => Some(
                ProviderError::content_filtered("gemini", format!("Blocked: {}", finish_reason)),
            ),
            "RECITATION" | "IMAGE_RECITATION" => Some(ProviderError::content_filtered(
                "gemini",
                "Content blocked due to recitation",
            )),
            _ => None,
        }
    }

    /// Retry delay in seconds, from `retry_after` or a `RetryInfo` detail such as `"30s"`
    fn extract_retry_after(error: &Value) -> Option<u64> {
        if let Some(retry_after) = error.get("retry_after").and_then(|r| r.as_u64()) {
            return Some(retry_after);
        }

        error
            .get("details")
            .and_then(|d| d.as_array())?
            .iter()
            .find_map(|detail| {
                detail
                    .get("retryDelay")
                    .and_then(|d| d.as_str())
                    .and_then(|d| d.trim_end_matches('s').parse::<f64>().ok())
                    .map(|secs| secs.ceil() as u64)
            })
    }
}

/// Create
pub fn gemini_network_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::network("gemini", msg.into())
}

/// Create
pub fn gemini_parse_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::serialization("gemini", msg.into())
}

/// Create
pub fn gemini_validation_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::invalid_request("gemini", msg.into())
}
