//! Session events

use crate::core::batch::{BatchItem, BatchProgress, BatchUpdate};
use crate::core::types::{EncodedImage, SketchStyle, Slider};

use super::state::{GenerationKind, UploadMode};

/// Anything that can happen to a session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SourceSelected(EncodedImage),
    Reset,
    StyleSelected(SketchStyle),
    /// Out-of-range values are clamped
    SliderChanged { slider: Slider, value: u8 },
    EditPromptChanged(String),
    GenerationPromptChanged(String),
    UploadModeChanged(UploadMode),
    GenerationStarted(GenerationKind),
    GenerationSucceeded(EncodedImage),
    GenerationFailed(String),
    BatchSourcesSelected(Vec<EncodedImage>),
    BatchStarted { total: usize },
    BatchProgress(BatchProgress),
    BatchItemsUpdated(Vec<BatchItem>),
    BatchFinished,
    BatchCleared,
    Undo,
}

impl From<BatchUpdate> for SessionEvent {
    fn from(update: BatchUpdate) -> Self {
        match update {
            BatchUpdate::Started { total } => Self::BatchStarted { total },
            BatchUpdate::Progress(progress) => Self::BatchProgress(progress),
            BatchUpdate::ItemSettled { items, .. } => Self::BatchItemsUpdated(items),
            BatchUpdate::Finished => Self::BatchFinished,
        }
    }
}
