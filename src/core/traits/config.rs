//! Provider configuration trait

use std::fmt::Debug;
use std::time::Duration;

/// Provider configuration trait
///
/// Every backend configuration validates itself before a client is built
/// from it and exposes the settings shared by all backends.
///
/// # Example
/// ```rust,ignore
/// impl ProviderConfig for MyConfig {
///     fn validate(&self) -> Result<(), String> {
///         if self.api_key.is_empty() {
///             return Err("API key is required".to_string());
///         }
///         Ok(())
///     }
///
///     fn api_key(&self) -> Option<&str> {
///         Some(&self.api_key)
///     }
///
///     fn api_base(&self) -> Option<&str> {
///         None
///     }
///
///     fn timeout(&self) -> Duration {
///         Duration::from_secs(self.timeout_secs)
///     }
/// }
/// ```
pub trait ProviderConfig: Send + Sync + Clone + Debug + 'static {
    /// Validate configuration
    ///
    /// # Returns
    /// `Ok(())` if configuration is valid, `Err(String)` with error message otherwise
    fn validate(&self) -> Result<(), String>;

    /// API key, if the backend needs one
    fn api_key(&self) -> Option<&str>;

    /// Base URL of the backend
    fn api_base(&self) -> Option<&str>;

    /// Deadline for a single request
    fn timeout(&self) -> Duration;
}
