//! Batch sketch generation
//!
//! Runs one generation per source image, strictly in sequence, and reports
//! progress and per-item results to an observer as it goes.

mod runner;
mod types;


pub use runner::BatchRunner;
pub use types::{BatchItem, BatchProgress, BatchReport, BatchSummary, BatchUpdate, ItemOutcome};
