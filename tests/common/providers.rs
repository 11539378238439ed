//! Gemini test utilities
//!
//! Builders for `generateContent` response bodies and a config pointed at a
//! local mock server.

use serde_json::{Value, json};
use sketchforge::GeminiConfig;

pub const TEST_API_KEY: &str = "test-key";

/// Path the provider posts to with the default model
pub fn generate_path() -> String {
    format!(
        "/v1beta/models/{}:generateContent",
        sketchforge::core::providers::gemini::DEFAULT_MODEL
    )
}

/// Config aimed at a `wiremock` server
pub fn mock_config(server_uri: &str) -> GeminiConfig {
    GeminiConfig::new(TEST_API_KEY)
        .with_base_url(server_uri)
        .with_timeout(5)
}

/// Successful response carrying one inline image
pub fn image_response(mime_type: &str, data: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "Here is the sketch."},
                    {"inlineData": {"mimeType": mime_type, "data": data}}
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Successful response with text only
pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Google-style error body
pub fn error_response(code: u16, status: &str, message: &str) -> Value {
    json!({
        "error": {"code": code, "message": message, "status": status}
    })
}
