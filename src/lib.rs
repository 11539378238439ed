//! # sketchforge
//!
//! Turn photos into sketch-style renderings through Google Gemini image
//! models, one at a time or in sequential batches.
//!
//! ## Features
//!
//! - **Ten sketch styles**: vector pencil, line art, engraving, stipple and more,
//!   each tuned by four sliders (detail, shading, stroke, roughness)
//! - **Sequential batches**: one call in flight, per-item failure capture,
//!   progress and snapshot updates after every item
//! - **Session state machine**: every UI-visible change is a pure
//!   `(state, event) -> state` transition
//! - **Pluggable backend**: the studio and the batch runner only see the
//!   [`SketchGenerator`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sketchforge::{BatchRunner, EncodedImage, GeminiConfig, StyleParams, create_generator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = create_generator(GeminiConfig::from_env()?)?;
//!     let photos = vec![
//!         EncodedImage::from_path("cat.jpg").await?,
//!         EncodedImage::from_path("dog.png").await?,
//!     ];
//!
//!     let report = BatchRunner::new(generator)
//!         .run(photos, StyleParams::default(), |update| println!("{:?}", update))
//!         .await;
//!
//!     println!("{} of {} rendered", report.summary.succeeded, report.summary.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Studio
//!
//! ```rust,no_run
//! use sketchforge::{Config, SessionEvent, Studio, EncodedImage, create_generator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let mut studio = Studio::with_params(
//!         create_generator(config.gemini().clone())?,
//!         *config.defaults(),
//!     );
//!
//!     studio.dispatch(SessionEvent::SourceSelected(EncodedImage::from_path("cat.jpg").await?));
//!     let sketch = studio.create_sketch().await?;
//!     sketch.save("cat-sketch.png").await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, SketchError};

pub use core::Studio;
pub use core::batch::{
    BatchItem, BatchProgress, BatchReport, BatchRunner, BatchSummary, BatchUpdate, ItemOutcome,
};
pub use core::providers::{
    GeminiConfig, GeminiProvider, ProviderError, UNKNOWN_ERROR, create_generator,
};
pub use core::session::{GenerationKind, SessionEvent, SessionState, UploadMode, apply};
pub use core::traits::SketchGenerator;
pub use core::types::{EncodedImage, SketchStyle, Slider, StyleParams};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata recorded by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (git {}, built {}, {})",
            self.version, self.git_hash, self.build_time, self.rust_version
        )
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
