//! Sequential batch runner
//!
//! Feeds each source image through [`SketchGenerator::generate`] one at a
//! time. A failing item is recorded on that item and the run moves on; the
//! run itself never fails.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::traits::SketchGenerator;
use crate::core::types::{EncodedImage, StyleParams};

use super::types::{BatchItem, BatchProgress, BatchReport, BatchSummary, BatchUpdate, ItemOutcome};

/// Runs batches against a single generator
#[derive(Clone)]
pub struct BatchRunner {
    generator: Arc<dyn SketchGenerator>,
}

impl BatchRunner {
    pub fn new(generator: Arc<dyn SketchGenerator>) -> Self {
        Self { generator }
    }

    /// Process `sources` in order with a fixed `params` snapshot.
    ///
    /// `observer` sees `Started`, then for every item a `Progress` followed by
    /// an `ItemSettled` snapshot, then `Finished`. Item `i` of the report
    /// always corresponds to `sources[i]`.
    pub async fn run<F>(
        &self,
        sources: Vec<EncodedImage>,
        params: StyleParams,
        mut observer: F,
    ) -> BatchReport
    where
        F: FnMut(BatchUpdate),
    {
        let batch_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();
        let total = sources.len();

        info!(
            %batch_id,
            total,
            style = %params.style,
            provider = self.generator.name(),
            "Starting batch"
        );

        let mut items: Vec<BatchItem> = sources.into_iter().map(BatchItem::pending).collect();
        observer(BatchUpdate::Started { total });

        for index in 0..total {
            observer(BatchUpdate::Progress(BatchProgress::new(index + 1, total)));

            let item_start = Instant::now();
            let outcome = match self.generator.generate(&items[index].source, &params).await {
                Ok(image) => {
                    debug!(%batch_id, index, elapsed = ?item_start.elapsed(), "Item rendered");
                    ItemOutcome::Rendered(image)
                }
                Err(e) => {
                    warn!(%batch_id, index, error = %e, "Item failed");
                    ItemOutcome::Failed(e.message())
                }
            };
            items[index].outcome = outcome;

            observer(BatchUpdate::ItemSettled {
                index,
                items: items.clone(),
            });
        }

        observer(BatchUpdate::Finished);

        let summary = BatchSummary::from_items(&items, start.elapsed());
        info!(
            %batch_id,
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            duration = ?summary.total_duration,
            "Batch finished"
        );

        BatchReport {
            batch_id,
            items,
            started_at,
            finished_at: Utc::now(),
            summary,
        }
    }

    /// [`run`](Self::run) without an observer
    pub async fn run_silent(&self, sources: Vec<EncodedImage>, params: StyleParams) -> BatchReport {
        self.run(sources, params, |_| {}).await
    }
}

impl std::fmt::Debug for BatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchRunner")
            .field("generator", &self.generator.name())
            .finish()
    }
}
