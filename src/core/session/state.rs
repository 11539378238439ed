//! Session state

use serde::{Deserialize, Serialize};

use crate::core::batch::{BatchItem, BatchProgress};
use crate::core::types::{EncodedImage, StyleParams};

/// Where the next source image comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadMode {
    /// A user-supplied photo
    #[default]
    Upload,
    /// An image generated from `generation_prompt`
    Generate,
}

/// Single-shot operation currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// Source photo to sketch
    Sketch,
    /// Existing sketch plus an edit instruction
    Refine,
    /// Text prompt to new source image
    FromPrompt,
}

impl GenerationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sketch => "sketch generation",
            Self::Refine => "sketch refinement",
            Self::FromPrompt => "image generation",
        }
    }
}

/// Everything one user session knows.
///
/// Only [`apply`](super::apply) produces new states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub source_image: Option<EncodedImage>,
    pub result_image: Option<EncodedImage>,
    /// Set while a single-shot call is outstanding
    pub in_flight: Option<GenerationKind>,
    pub params: StyleParams,
    pub edit_prompt: String,
    pub generation_prompt: String,
    pub upload_mode: UploadMode,
    pub error: Option<String>,
    /// Previous results, newest last
    pub history: Vec<EncodedImage>,
    pub batch_sources: Vec<EncodedImage>,
    pub batch_items: Vec<BatchItem>,
    pub is_batch_processing: bool,
    pub batch_progress: Option<BatchProgress>,
}

impl SessionState {
    pub fn new(params: StyleParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Image a refinement would start from: the current result, else the source
    pub fn refine_target(&self) -> Option<&EncodedImage> {
        self.result_image.as_ref().or(self.source_image.as_ref())
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && !self.is_processing()
    }
}
