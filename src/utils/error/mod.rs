//! Error handling utilities
//!
//! Crate-level error type and its conversions from provider failures.

pub mod error;

pub use error::*;
