use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "customFeedbacks";
pub const DEFAULT_EXTENSION: &str = "java";

/// Contents of `.pipeline-helper.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub line_length: LineLengthConfig,
}

impl Config {
    /// Reject values that parse but cannot work.
    ///
    /// # Errors
    /// Returns [`CheckerError::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(CheckerError::Config(
                "output.directory must not be empty".to_string(),
            ));
        }

        let extension = &self.line_length.extension;
        if extension.trim().is_empty() {
            return Err(CheckerError::Config(
                "line_length.extension must not be empty".to_string(),
            ));
        }
        if extension.starts_with('.') {
            return Err(CheckerError::Config(format!(
                "line_length.extension must not start with a dot, use \"{}\"",
                extension.trim_start_matches('.')
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Where `TEST-<name>.json` files are written.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LineLengthConfig {
    /// Extension of the files to scan, without the dot.
    pub extension: String,

    /// Glob patterns, relative to the scanned directory, of files to skip.
    pub exclude: Vec<String>,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
