//! Gemini Client
//!
//! Thin HTTP layer over the `generateContent` endpoint. It builds request
//! bodies, applies the deadline, and pulls the generated image out of the response.

use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Value, json};
use tokio::time::timeout;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ErrorMapper, ProviderConfig};
use crate::core::types::EncodedImage;
use crate::utils::logging::truncate_for_log;

use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, gemini_network_error, gemini_parse_error};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
    error_mapper: GeminiErrorMapper,
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| gemini_network_error(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| gemini_network_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            error_mapper: GeminiErrorMapper::new(config.model.clone()),
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `prompt` (plus an optional image) and return the first generated image
    pub async fn generate_image(
        &self,
        prompt: &str,
        image: Option<&EncodedImage>,
    ) -> Result<EncodedImage, ProviderError> {
        let body = Self::build_request(prompt, image);
        let response = self.send_request(body).await?;
        Self::extract_image(&response)
    }

    /// Request
    pub fn build_request(prompt: &str, image: Option<&EncodedImage>) -> Value {
        let mut parts = vec![json!({ "text": prompt })];

        if let Some(image) = image {
            parts.push(json!({
                "inlineData": {
                    "mimeType": image.mime_type(),
                    "data": image.payload()
                }
            }));
        }

        json!({
            "contents": [{
                "role": "user",
                "parts": parts
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"]
            }
        })
    }

    /// Request
    async fn send_request(&self, body: Value) -> Result<Value, ProviderError> {
        let url = self.config.endpoint();
        let headers = self.build_headers()?;

        if self.config.debug {
            tracing::debug!("Gemini request URL: {}", url);
            tracing::debug!(
                "Gemini request body: {}",
                truncate_for_log(&body.to_string(), 512)
            );
        }

        let deadline = self.config.timeout();
        let response = timeout(
            deadline,
            self.http_client
                .post(&url)
                .headers(headers)
                .json(&body)
                .send(),
        )
        .await
        .map_err(|_| {
            ProviderError::timeout("gemini", format!("Request timed out after {:?}", deadline))
        })?
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::timeout("gemini", format!("Request timed out: {}", e))
            } else {
                gemini_network_error(format!("Network error: {}", e))
            }
        })?;

        self.handle_response(response).await
    }

    /// Request
    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = self.config.api_key.as_deref() {
            let mut value = HeaderValue::from_str(api_key).map_err(|e| {
                ProviderError::authentication("gemini", format!("Invalid API key format: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        for (key, value) in &self.config.custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| gemini_network_error(format!("Invalid header name: {}", e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| gemini_network_error(format!("Invalid header value: {}", e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Handle
    async fn handle_response(&self, response: Response) -> Result<Value, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if self.config.debug {
            tracing::debug!("Gemini response status: {}", status);
            tracing::debug!("Gemini response body: {}", truncate_for_log(&response_text, 512));
        }

        if !status.is_success() {
            return Err(self
                .error_mapper
                .map_http_error(status.as_u16(), &response_text));
        }

        let json_response: Value = serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))?;

        if json_response.get("error").is_some() {
            return Err(self.error_mapper.map_json_error(&json_response));
        }

        Ok(json_response)
    }

    /// Response
    ///
    /// A response without an image part becomes [`ProviderError::NoImage`]
    /// carrying the model's text; the input image is never echoed back.
    pub fn extract_image(response: &Value) -> Result<EncodedImage, ProviderError> {
        let candidate = match response
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
        {
            Some(candidate) => candidate,
            None if response.get("promptFeedback").is_some() => {
                return Err(GeminiErrorMapper::from_api_response(response));
            }
            None => return Err(ProviderError::no_image("gemini", None)),
        };

        let parts = candidate
            .get("content")
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut text_parts = Vec::new();
        for part in parts {
            let inline = part.get("inlineData").or_else(|| part.get("inline_data"));
            if let Some(inline) = inline {
                let mime_type = inline
                    .get("mimeType")
                    .or_else(|| inline.get("mime_type"))
                    .and_then(|m| m.as_str())
                    .unwrap_or("image/png");
                let data = inline
                    .get("data")
                    .and_then(|d| d.as_str())
                    .ok_or_else(|| gemini_parse_error("Inline image part has no data"))?;

                return EncodedImage::from_base64(mime_type, data)
                    .map_err(|e| gemini_parse_error(e.to_string()));
            }

            if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                text_parts.push(text);
            }
        }

        if let Some(error) = candidate
            .get("finishReason")
            .and_then(|r| r.as_str())
            .and_then(GeminiErrorMapper::from_finish_reason)
        {
            return Err(error);
        }

        let description = text_parts.join("").trim().to_string();
        Err(ProviderError::no_image("gemini", Some(description)))
    }
}
