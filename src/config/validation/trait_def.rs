//! Validation trait definition

/// Structural checks for a configuration section.
///
/// Secrets are not checked here; a missing API key is reported when the
/// provider is built, so commands that never call the service still run.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
