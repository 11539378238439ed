//! End-to-end tests for sketchforge
//!
//! These tests call the real Gemini API and are ignored by default.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - GEMINI_API_KEY (or GOOGLE_API_KEY): Google AI Studio key

pub mod gemini_live;
