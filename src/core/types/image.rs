//! Encoded image payloads
//!
//! Every image that crosses the crate boundary, uploaded or generated, is
//! held as a base64 `data:` URL. The payload is validated once on capture and
//! never mutated afterwards.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::utils::error::{Result, SketchError};

/// An immutable, base64-encoded image with its MIME type.
///
/// The payload is shared, so clones (batch snapshots, history entries) are cheap.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedImage {
    mime_type: String,
    data: Arc<str>,
}

impl EncodedImage {
    /// Parse a `data:<mime>;base64,<payload>` URL
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| SketchError::invalid_image("expected a data: URL"))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| SketchError::invalid_image("data URL has no payload separator"))?;

        let mut params = header.split(';');
        let mime_type = params.next().unwrap_or_default().trim();
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(SketchError::invalid_image("data URL is not base64 encoded"));
        }

        Self::from_base64(mime_type, payload)
    }

    /// Wrap an already base64-encoded payload, as returned by the generation service
    pub fn from_base64(mime_type: &str, data: &str) -> Result<Self> {
        let mime_type = normalize_mime(mime_type)?;
        let data = data.trim();
        if data.is_empty() {
            return Err(SketchError::invalid_image("image payload is empty"));
        }
        STANDARD.decode(data)?;

        Ok(Self {
            mime_type,
            data: Arc::from(data),
        })
    }

    /// Encode raw image bytes
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(SketchError::invalid_image("image payload is empty"));
        }
        Ok(Self {
            mime_type: normalize_mime(mime_type)?,
            data: Arc::from(STANDARD.encode(bytes)),
        })
    }

    /// Read an image file, inferring the MIME type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_for_path(path).ok_or_else(|| {
            SketchError::invalid_image(format!("unsupported image file: {}", path.display()))
        })?;
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(mime_type, &bytes)
    }

    /// Write the decoded image bytes to `path`
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.decode()?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload without the `data:` header
    pub fn payload(&self) -> &str {
        &self.data
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// File extension matching the MIME type
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/heic" => "heic",
            "image/heif" => "heif",
            "image/bmp" => "bmp",
            _ => "bin",
        }
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime_type", &self.mime_type)
            .field("encoded_len", &self.data.len())
            .finish()
    }
}

impl TryFrom<String> for EncodedImage {
    type Error = SketchError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_data_url(&value)
    }
}

impl From<EncodedImage> for String {
    fn from(image: EncodedImage) -> Self {
        image.data_url()
    }
}

/// MIME type for a file path, based on its extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

fn normalize_mime(mime_type: &str) -> Result<String> {
    let mime = mime_type.trim().to_ascii_lowercase();
    match mime.as_str() {
        "" => Err(SketchError::invalid_image("missing MIME type")),
        "image/jpg" => Ok("image/jpeg".to_string()),
        m if m.starts_with("image/") => Ok(mime),
        other => Err(SketchError::invalid_image(format!(
            "not an image MIME type: {}",
            other
        ))),
    }
}
