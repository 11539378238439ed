//! Configuration validation
//!
//! - `trait_def`: the [`Validate`] trait
//! - `config_validators`: one implementation per configuration section
//! - `tests`: validator tests

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
