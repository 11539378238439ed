//! Core functionality
//!
//! Domain types, the generator seam and its Gemini backend, the batch runner,
//! and the session state machine the studio drives.

pub mod batch;
pub mod providers;
pub mod session;
pub mod studio;
pub mod traits;
pub mod types;

pub use studio::Studio;
