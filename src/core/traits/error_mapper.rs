//! Error mapping
//!
//! Converts transport-level failures into [`ProviderError`] values

use crate::core::providers::unified_provider::ProviderError;

/// Maps HTTP failures of one backend to the unified error type
///
/// ```rust,ignore
/// struct MyErrorMapper;
///
/// impl ErrorMapper for MyErrorMapper {
///     fn map_http_error(&self, status: u16, body: &str) -> ProviderError {
///         match status {
///             401 => ProviderError::authentication("my", "Invalid API key"),
///             _ => ProviderError::api_error("my", status, body),
///         }
///     }
/// }
/// ```
pub trait ErrorMapper: Send + Sync + 'static {
    /// Map a non-success HTTP status and its body
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError;

    /// Map a successful response that carries an error payload
    fn map_json_error(&self, error_response: &serde_json::Value) -> ProviderError;
}
