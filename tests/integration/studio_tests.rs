//! Studio integration tests

use std::sync::Arc;

use sketchforge::{
    GenerationKind, SessionEvent, SketchError, SketchStyle, Slider, Studio, StyleParams,
    UploadMode,
};
use tokio_test::{assert_err, assert_ok};

use crate::common::generators::{Call, ScriptedGenerator};
use crate::common::{ImageFactory, photo, photos};

#[tokio::test]
async fn test_sketch_then_refine_then_undo() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut studio = Studio::new(generator.clone());

    studio.dispatch(SessionEvent::SourceSelected(photo(1)));
    studio.dispatch(SessionEvent::StyleSelected(SketchStyle::Hatching));
    studio.dispatch(SessionEvent::SliderChanged {
        slider: Slider::Roughness,
        value: 5,
    });

    let sketch = assert_ok!(studio.create_sketch().await);
    assert_eq!(ImageFactory::tag_of(&sketch), "sketch:photo-1");

    let refined = assert_ok!(studio.refine("add a hat").await);
    assert_eq!(ImageFactory::tag_of(&refined), "sketch:photo-1+add a hat");
    assert_eq!(studio.state().history, vec![sketch.clone()]);

    studio.dispatch(SessionEvent::Undo);
    assert_eq!(studio.state().result_image, Some(sketch));

    let calls = generator.calls();
    match &calls[0] {
        Call::Generate { params, .. } => {
            assert_eq!(params.style, SketchStyle::Hatching);
            assert_eq!(params.roughness, 5);
        }
        other => panic!("Unexpected call {:?}", other),
    }
    assert!(matches!(
        &calls[1],
        Call::Refine { style: SketchStyle::Hatching, .. }
    ));
}

#[tokio::test]
async fn test_failed_sketch_is_labeled_and_recorded() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(0, "model overloaded"));
    let mut studio = Studio::new(generator);
    studio.dispatch(SessionEvent::SourceSelected(photo(1)));

    let err = assert_err!(studio.create_sketch().await);
    assert_eq!(err.to_string(), "sketch generation failed: model overloaded");
    assert_eq!(studio.state().error.as_deref(), Some("model overloaded"));
    assert!(!studio.state().is_processing());

    // The next attempt clears the error
    assert_ok!(studio.create_sketch().await);
    assert!(studio.state().error.is_none());
}

#[tokio::test]
async fn test_prompt_mode() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut studio = Studio::new(generator.clone());

    studio.dispatch(SessionEvent::UploadModeChanged(UploadMode::Generate));
    let err = assert_err!(studio.generate_from_prompt().await);
    assert!(matches!(err, SketchError::Validation(_)));

    studio.dispatch(SessionEvent::GenerationPromptChanged("a red fox".to_string()));
    assert_ok!(studio.generate_from_prompt().await);
    assert_eq!(
        studio.state().source_image.as_ref().map(ImageFactory::tag_of),
        Some("text:a red fox".to_string())
    );

    // The generated image can be sketched like an upload
    let sketch = assert_ok!(studio.create_sketch().await);
    assert_eq!(ImageFactory::tag_of(&sketch), "sketch:text:a red fox");
    assert_eq!(
        generator.calls()[0],
        Call::FromText {
            prompt: "a red fox".to_string()
        }
    );
}

#[tokio::test]
async fn test_batch_through_studio() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(0, "bad photo"));
    let params = StyleParams::new(SketchStyle::Outline, 50, 50, 50, 50).unwrap();
    let mut studio = Studio::with_params(generator, params);

    studio.dispatch(SessionEvent::BatchSourcesSelected(photos(2)));
    let report = assert_ok!(studio.run_batch().await);

    let state = studio.state();
    assert!(!state.is_batch_processing);
    assert!(state.batch_progress.is_none());
    assert_eq!(state.batch_items, report.items);
    assert_eq!(state.batch_items[0].error(), Some("bad photo"));
    assert!(state.batch_items[1].result().is_some());

    studio.dispatch(SessionEvent::BatchCleared);
    assert!(studio.state().batch_items.is_empty());
}

#[tokio::test]
async fn test_single_and_batch_state_are_independent() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut studio = Studio::new(generator);

    studio.dispatch(SessionEvent::SourceSelected(photo(9)));
    studio.dispatch(SessionEvent::BatchSourcesSelected(photos(2)));
    assert_ok!(studio.run_batch().await);

    assert!(studio.state().result_image.is_none());
    assert_eq!(studio.state().in_flight, None::<GenerationKind>);
    assert_ok!(studio.create_sketch().await);
    assert_eq!(studio.state().batch_items.len(), 2);
}
