//! The session transition function

use tracing::trace;

use crate::core::batch::{BatchItem, BatchProgress};
use crate::core::providers::unified_provider::UNKNOWN_ERROR;

use super::event::SessionEvent;
use super::state::{GenerationKind, SessionState};

/// Compute the state that follows `event`.
///
/// Events that make no sense in the current state (a second `BatchStarted`,
/// `GenerationStarted` without an image to work on, `Undo` with no history)
/// return the state unchanged.
pub fn apply(state: SessionState, event: SessionEvent) -> SessionState {
    let mut next = state;

    match event {
        SessionEvent::SourceSelected(image) => {
            if next.is_processing() {
                return ignored(next, "SourceSelected");
            }
            next.source_image = Some(image);
            next.result_image = None;
            next.error = None;
        }
        SessionEvent::Reset => {
            if next.is_processing() {
                return ignored(next, "Reset");
            }
            next.source_image = None;
            next.result_image = None;
            next.error = None;
        }
        SessionEvent::StyleSelected(style) => {
            next.params = next.params.with_style(style);
        }
        SessionEvent::SliderChanged { slider, value } => {
            next.params = next.params.with_slider(slider, value);
        }
        SessionEvent::EditPromptChanged(prompt) => next.edit_prompt = prompt,
        SessionEvent::GenerationPromptChanged(prompt) => next.generation_prompt = prompt,
        SessionEvent::UploadModeChanged(mode) => next.upload_mode = mode,

        SessionEvent::GenerationStarted(kind) => {
            let ready = match kind {
                GenerationKind::Sketch => next.source_image.is_some(),
                GenerationKind::Refine => next.refine_target().is_some(),
                GenerationKind::FromPrompt => !next.generation_prompt.trim().is_empty(),
            };
            if next.is_processing() || !ready {
                return ignored(next, "GenerationStarted");
            }
            next.in_flight = Some(kind);
            next.error = None;
        }
        SessionEvent::GenerationSucceeded(image) => {
            let Some(kind) = next.in_flight.take() else {
                return ignored(next, "GenerationSucceeded");
            };
            match kind {
                GenerationKind::FromPrompt => {
                    next.source_image = Some(image);
                    next.result_image = None;
                }
                GenerationKind::Sketch | GenerationKind::Refine => {
                    if let Some(previous) = next.result_image.replace(image) {
                        next.history.push(previous);
                    }
                }
            }
        }
        SessionEvent::GenerationFailed(message) => {
            if next.in_flight.take().is_none() {
                return ignored(next, "GenerationFailed");
            }
            next.error = Some(non_blank(message));
        }

        SessionEvent::BatchSourcesSelected(sources) => {
            if next.is_batch_processing {
                return ignored(next, "BatchSourcesSelected");
            }
            next.batch_sources = sources;
            next.batch_items.clear();
        }
        SessionEvent::BatchStarted { total } => {
            if next.is_batch_processing || total != next.batch_sources.len() {
                return ignored(next, "BatchStarted");
            }
            next.batch_items = next
                .batch_sources
                .iter()
                .cloned()
                .map(BatchItem::pending)
                .collect();
            next.is_batch_processing = true;
            next.batch_progress = Some(BatchProgress::new(0, total));
        }
        SessionEvent::BatchProgress(progress) => {
            let accepted = next.is_batch_processing
                && next
                    .batch_progress
                    .is_some_and(|p| p.total == progress.total && progress.current >= p.current);
            if !accepted {
                return ignored(next, "BatchProgress");
            }
            next.batch_progress = Some(progress);
        }
        SessionEvent::BatchItemsUpdated(items) => {
            if !next.is_batch_processing || items.len() != next.batch_items.len() {
                return ignored(next, "BatchItemsUpdated");
            }
            next.batch_items = items;
        }
        SessionEvent::BatchFinished => {
            if !next.is_batch_processing {
                return ignored(next, "BatchFinished");
            }
            next.is_batch_processing = false;
            next.batch_progress = None;
        }
        SessionEvent::BatchCleared => {
            if next.is_batch_processing {
                return ignored(next, "BatchCleared");
            }
            next.batch_sources.clear();
            next.batch_items.clear();
        }

        SessionEvent::Undo => {
            if !next.can_undo() {
                return ignored(next, "Undo");
            }
            next.result_image = next.history.pop();
        }
    }

    next
}

fn ignored(state: SessionState, event: &str) -> SessionState {
    trace!(event, "Ignoring event in current session state");
    state
}

fn non_blank(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
