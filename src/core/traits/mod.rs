//! Core traits module
//!
//! Contains the abstract interfaces between the orchestration layer and the
//! generation backends

pub mod config;
pub mod error_mapper;
pub mod provider;

pub use config::ProviderConfig;
pub use error_mapper::ErrorMapper;
pub use provider::SketchGenerator;

#[cfg(test)]
pub use provider::MockSketchGenerator;
