//! Error handling for sketchforge
//!
//! This module defines the crate-level error type shared by the library and the CLI.

mod conversions;
mod helpers;
mod types;

pub use types::{Result, SketchError};
