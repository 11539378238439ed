//! Batch data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::core::types::EncodedImage;

/// Settled (or not yet settled) state of one batch item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The call for this item has not settled yet
    Pending,
    /// The generated sketch
    Rendered(EncodedImage),
    /// Human-readable failure message
    Failed(String),
}

/// One source image of a batch and what became of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    pub source: EncodedImage,
    pub outcome: ItemOutcome,
}

impl BatchItem {
    /// New item awaiting its call
    pub fn pending(source: EncodedImage) -> Self {
        Self {
            source,
            outcome: ItemOutcome::Pending,
        }
    }

    pub fn result(&self) -> Option<&EncodedImage> {
        match &self.outcome {
            ItemOutcome::Rendered(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self.outcome, ItemOutcome::Pending)
    }
}

/// Position of a running batch; `current` is 1-based while items are in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    pub current: usize,
    pub total: usize,
}

impl BatchProgress {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current: current.min(total),
            total,
        }
    }

    /// Fraction in `[0, 1]`; an empty batch counts as complete
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Notification published by the runner while a batch is underway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchUpdate {
    /// The run has begun with `total` pending items
    Started { total: usize },
    /// Item `current` of `total` is about to be processed
    Progress(BatchProgress),
    /// Item `index` settled; `items` is a fresh snapshot of the whole sequence
    ItemSettled { index: usize, items: Vec<BatchItem> },
    /// Every item has settled
    Finished,
}

/// Counts for a finished batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Wall time for the whole run
    pub total_duration: Duration,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItem], total_duration: Duration) -> Self {
        let succeeded = items.iter().filter(|item| item.result().is_some()).count();
        let failed = items.iter().filter(|item| item.error().is_some()).count();
        Self {
            total: items.len(),
            succeeded,
            failed,
            total_duration,
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub items: Vec<BatchItem>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Whether every item failed (false for an empty batch)
    pub fn all_failed(&self) -> bool {
        self.summary.total > 0 && self.summary.failed == self.summary.total
    }
}
