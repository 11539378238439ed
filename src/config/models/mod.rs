//! Configuration data models

pub mod app;
pub mod logging;
pub mod output;

pub use app::*;
pub use logging::*;
pub use output::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default suffix appended to the input file stem
pub fn default_output_suffix() -> String {
    "-sketch".to_string()
}
