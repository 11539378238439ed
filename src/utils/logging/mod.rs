//! Logging utilities
//!
//! Subscriber setup for the CLI and a helper for shortening payloads in log lines.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::utils::error::{Result, SketchError};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(SketchError::config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Build the filter from `RUST_LOG`, falling back to `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            SketchError::config(format!("Invalid log level '{}': {}", default_level, e))
        }),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for results.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let filter = build_filter(default_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| SketchError::config(format!("Failed to install logger: {}", e)))
}

/// Shorten a data URL or long payload for log output
pub fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
