//! Studio: one generator bound to one session
//!
//! Every operation is expressed as session events, so the session state always
//! reflects what is in flight and what has settled.

use std::sync::Arc;
use tracing::{info, warn};

use crate::core::batch::{BatchReport, BatchRunner};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::session::{GenerationKind, SessionEvent, SessionState, apply};
use crate::core::traits::SketchGenerator;
use crate::core::types::{EncodedImage, StyleParams};
use crate::utils::error::{Result, SketchError};

/// Drives a [`SketchGenerator`] on behalf of a single session
pub struct Studio {
    generator: Arc<dyn SketchGenerator>,
    state: SessionState,
}

impl Studio {
    pub fn new(generator: Arc<dyn SketchGenerator>) -> Self {
        Self::with_params(generator, StyleParams::default())
    }

    /// Start from non-default style parameters
    pub fn with_params(generator: Arc<dyn SketchGenerator>, params: StyleParams) -> Self {
        Self {
            generator,
            state: SessionState::new(params),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = apply(current, event);
    }

    /// Sketch the current source image with the current parameters
    pub async fn create_sketch(&mut self) -> Result<EncodedImage> {
        let source = self
            .state
            .source_image
            .clone()
            .ok_or_else(|| SketchError::invalid_state("no source image selected"))?;
        let params = self.state.params;

        self.begin(GenerationKind::Sketch)?;
        let outcome = self.generator.generate(&source, &params).await;
        self.settle(GenerationKind::Sketch, outcome)
    }

    /// Apply a free-text edit to the current result (or the source when there is none)
    pub async fn refine(&mut self, instruction: &str) -> Result<EncodedImage> {
        if instruction.trim().is_empty() {
            return Err(SketchError::validation("edit instruction cannot be empty"));
        }
        let target = self
            .state
            .refine_target()
            .cloned()
            .ok_or_else(|| SketchError::invalid_state("nothing to refine"))?;
        let style = self.state.params.style;

        self.dispatch(SessionEvent::EditPromptChanged(instruction.to_string()));
        self.begin(GenerationKind::Refine)?;
        let outcome = self.generator.refine(&target, instruction, style).await;
        self.settle(GenerationKind::Refine, outcome)
    }

    /// Generate a new source image from `generation_prompt`
    pub async fn generate_from_prompt(&mut self) -> Result<EncodedImage> {
        let prompt = self.state.generation_prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(SketchError::validation("generation prompt cannot be empty"));
        }

        self.begin(GenerationKind::FromPrompt)?;
        let outcome = self.generator.generate_from_text(&prompt).await;
        self.settle(GenerationKind::FromPrompt, outcome)
    }

    /// Run the batch runner over `batch_sources`, feeding every update into the session
    pub async fn run_batch(&mut self) -> Result<BatchReport> {
        if self.state.is_batch_processing {
            return Err(SketchError::invalid_state("a batch is already running"));
        }

        let sources = self.state.batch_sources.clone();
        let params = self.state.params;
        let runner = BatchRunner::new(Arc::clone(&self.generator));
        let state = &mut self.state;

        let report = runner
            .run(sources, params, |update| {
                let current = std::mem::take(state);
                *state = apply(current, update.into());
            })
            .await;

        Ok(report)
    }

    fn begin(&mut self, kind: GenerationKind) -> Result<()> {
        self.dispatch(SessionEvent::GenerationStarted(kind));
        if self.state.in_flight != Some(kind) {
            return Err(SketchError::invalid_state(format!(
                "cannot start {} now",
                kind.name()
            )));
        }
        info!(
            operation = kind.name(),
            provider = self.generator.name(),
            "Generation started"
        );
        Ok(())
    }

    fn settle(
        &mut self,
        kind: GenerationKind,
        outcome: std::result::Result<EncodedImage, ProviderError>,
    ) -> Result<EncodedImage> {
        match outcome {
            Ok(image) => {
                self.dispatch(SessionEvent::GenerationSucceeded(image.clone()));
                info!(operation = kind.name(), "Generation succeeded");
                Ok(image)
            }
            Err(e) => {
                warn!(operation = kind.name(), error = %e, "Generation failed");
                let err = SketchError::generation(kind.name(), &e);
                self.dispatch(SessionEvent::GenerationFailed(err.user_message()));
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("generator", &self.generator.name())
            .field("state", &self.state)
            .finish()
    }
}
