//! In-process generator for tests
//!
//! Renders `sketch:<source tag>` for every source and fails the calls it was
//! told to fail. It records every call and the highest number of calls that
//! were in flight at once.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sketchforge::{EncodedImage, ProviderError, SketchGenerator, SketchStyle, StyleParams};

use super::fixtures::ImageFactory;

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Generate { source: String, params: StyleParams },
    Refine { source: String, instruction: String, style: SketchStyle },
    FromText { prompt: String },
}

#[derive(Default)]
pub struct ScriptedGenerator {
    /// Call index (0-based, across all methods) to the error it returns
    failures: HashMap<usize, ProviderError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make call number `index` fail with a network error carrying `message`
    pub fn fail_on(self, index: usize, message: &str) -> Self {
        self.fail_with(index, ProviderError::network("scripted", message))
    }

    pub fn fail_with(mut self, index: usize, error: ProviderError) -> Self {
        self.failures.insert(index, error);
        self
    }

    /// Sleep this long inside every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// What this generator renders for `source`
    pub fn rendering_of(source: &EncodedImage) -> EncodedImage {
        ImageFactory::tagged("image/png", &format!("sketch:{}", ImageFactory::tag_of(source)))
    }

    async fn record(&self, call: Call) -> Result<(), ProviderError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call);
            calls.len() - 1
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.failures.get(&index) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SketchGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(
        &self,
        image: &EncodedImage,
        params: &StyleParams,
    ) -> Result<EncodedImage, ProviderError> {
        self.record(Call::Generate {
            source: ImageFactory::tag_of(image),
            params: *params,
        })
        .await?;
        Ok(Self::rendering_of(image))
    }

    async fn refine(
        &self,
        image: &EncodedImage,
        instruction: &str,
        style: SketchStyle,
    ) -> Result<EncodedImage, ProviderError> {
        self.record(Call::Refine {
            source: ImageFactory::tag_of(image),
            instruction: instruction.to_string(),
            style,
        })
        .await?;
        Ok(ImageFactory::tagged(
            "image/png",
            &format!("{}+{}", ImageFactory::tag_of(image), instruction),
        ))
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<EncodedImage, ProviderError> {
        self.record(Call::FromText {
            prompt: prompt.to_string(),
        })
        .await?;
        Ok(ImageFactory::tagged("image/png", &format!("text:{}", prompt)))
    }
}
