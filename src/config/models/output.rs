//! Output file configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated files; defaults to the input file's directory
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            suffix: default_output_suffix(),
        }
    }
}

impl OutputConfig {
    /// `<directory>/<stem><suffix>.<extension>` for a given input file
    pub fn output_path(&self, input: &Path, extension: &str) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let file_name = format!("{}{}.{}", stem, self.suffix, extension);

        match &self.directory {
            Some(dir) => dir.join(file_name),
            None => input
                .parent()
                .map(|parent| parent.join(&file_name))
                .unwrap_or_else(|| PathBuf::from(&file_name)),
        }
    }
}
