//! Batch runner integration tests

use std::sync::Arc;
use std::time::Duration;

use sketchforge::{
    BatchRunner, BatchUpdate, ProviderError, SketchStyle, StyleParams, UNKNOWN_ERROR,
};

use crate::common::assertions::{BatchReportAssertions, progress_currents};
use crate::common::generators::{Call, ScriptedGenerator};
use crate::common::{ImageFactory, photos};

#[tokio::test]
async fn test_results_align_with_inputs() {
    let generator = Arc::new(ScriptedGenerator::new());
    let sources = photos(4);

    let report = BatchRunner::new(generator.clone())
        .run_silent(sources.clone(), StyleParams::default())
        .await;

    report.assert_all_settled();
    report.assert_summary_consistent();
    for (item, source) in report.items.iter().zip(&sources) {
        assert_eq!(&item.source, source);
        assert_eq!(item.result(), Some(&ScriptedGenerator::rendering_of(source)));
    }
}

#[tokio::test]
async fn test_middle_failure_is_isolated() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(1, "upstream exploded"));

    let report = BatchRunner::new(generator)
        .run_silent(photos(3), StyleParams::default())
        .await;

    report.assert_all_settled();
    assert!(report.items[0].result().is_some());
    assert_eq!(report.items[1].error(), Some("upstream exploded"));
    assert!(report.items[2].result().is_some());
    assert_eq!(report.summary.succeeded, 2);
    assert_eq!(report.summary.failed, 1);
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let generator =
        Arc::new(ScriptedGenerator::new().fail_with(0, ProviderError::other("scripted", "")));

    let report = BatchRunner::new(generator)
        .run_silent(photos(1), StyleParams::default())
        .await;

    assert_eq!(report.items[0].error(), Some(UNKNOWN_ERROR));
    assert!(report.all_failed());
}

#[tokio::test]
async fn test_calls_are_strictly_sequential() {
    let generator = Arc::new(ScriptedGenerator::new().with_delay(Duration::from_millis(20)));

    BatchRunner::new(generator.clone())
        .run_silent(photos(4), StyleParams::default())
        .await;

    assert_eq!(generator.max_in_flight(), 1);
    let sources: Vec<_> = generator
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::Generate { source, .. } => source,
            other => panic!("Unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(sources, vec!["photo-0", "photo-1", "photo-2", "photo-3"]);
}

#[tokio::test]
async fn test_params_are_fixed_for_the_run() {
    let params = StyleParams::new(SketchStyle::ColoringBook, 80, 10, 60, 0).unwrap();
    let generator = Arc::new(ScriptedGenerator::new());

    BatchRunner::new(generator.clone())
        .run_silent(photos(3), params)
        .await;

    assert!(generator.calls().iter().all(|call| matches!(
        call,
        Call::Generate { params: p, .. } if *p == params
    )));
}

#[tokio::test]
async fn test_progress_and_snapshots() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(2, "nope"));
    let mut updates = Vec::new();

    let report = BatchRunner::new(generator)
        .run(photos(3), StyleParams::default(), |update| updates.push(update))
        .await;

    assert_eq!(progress_currents(&updates), vec![1, 2, 3]);
    assert_eq!(updates.first(), Some(&BatchUpdate::Started { total: 3 }));
    assert_eq!(updates.last(), Some(&BatchUpdate::Finished));

    // Each snapshot has one more settled item than the last
    let settled_counts: Vec<usize> = updates
        .iter()
        .filter_map(|update| match update {
            BatchUpdate::ItemSettled { items, .. } => {
                Some(items.iter().filter(|item| item.is_settled()).count())
            }
            _ => None,
        })
        .collect();
    assert_eq!(settled_counts, vec![1, 2, 3]);

    match &updates[updates.len() - 2] {
        BatchUpdate::ItemSettled { items, .. } => assert_eq!(items, &report.items),
        other => panic!("Expected final snapshot, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_input() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut updates = Vec::new();

    let report = BatchRunner::new(generator.clone())
        .run(Vec::new(), StyleParams::default(), |update| updates.push(update))
        .await;

    assert!(report.items.is_empty());
    assert!(progress_currents(&updates).is_empty());
    assert!(generator.calls().is_empty());
    assert!(!report.all_failed());
}

#[tokio::test]
async fn test_batch_ids_are_unique() {
    let runner = BatchRunner::new(Arc::new(ScriptedGenerator::new()));
    let first = runner.run_silent(photos(1), StyleParams::default()).await;
    let second = runner.run_silent(photos(1), StyleParams::default()).await;

    assert_ne!(first.batch_id, second.batch_id);
    assert_eq!(ImageFactory::tag_of(&second.items[0].source), "photo-0");
}
