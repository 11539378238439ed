//! Utility modules for sketchforge
//!
//! - **error**: crate-level error type and conversions
//! - **logging**: subscriber setup and log redaction helpers

pub mod error;
pub mod logging;

pub use error::{Result, SketchError};
pub use logging::{LogFormat, init_logging};
