//! Integration tests for sketchforge
//!
//! These tests exercise several components together. Network calls go to a
//! local `wiremock` server, never to the real service.

pub mod batch_tests;
pub mod config_tests;
pub mod error_handling_tests;
pub mod studio_tests;
