//! Common test utilities for sketchforge
//!
//! - Image fixtures
//! - A scripted generator standing in for the remote service
//! - Gemini response builders for `wiremock`
//! - Custom assertions
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, generators::ScriptedGenerator};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let generator = ScriptedGenerator::new().fail_on(1, "quota");
//!     let photos = fixtures::photos(3);
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod providers;

// Re-export commonly used items
pub use fixtures::{ImageFactory, photo, photos};
pub use generators::ScriptedGenerator;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Skip test if no Gemini API key is available
#[macro_export]
macro_rules! skip_without_api_key {
    () => {
        if sketchforge::core::providers::gemini::api_key_from_env().is_none() {
            eprintln!("Skipping test: no Gemini API key set");
            return;
        }
    };
}
