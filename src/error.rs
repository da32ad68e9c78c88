use std::path::PathBuf;

use thiserror::Error;

use crate::checker::ValidationError;

/// Raised when a checker could not produce any verdict at all.
///
/// A completed check that reports `successful = false` is not an error; it is
/// returned as an ordinary [`crate::checker::CheckerResult`].
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid checker result: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot read file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid Dejagnu log file: {}", path.display())]
    InvalidLog { path: PathBuf },

    #[error("Could not load class file {}", path.display())]
    ClassLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory already exists but is a file: {}", path.display())]
    OutputDirectory { path: PathBuf },

    #[error("Cannot write result to {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read configuration file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CheckerError {
    /// Short category used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Validation",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidLog { .. } => "InvalidLog",
            Self::ClassLoad { .. } => "ClassLoad",
            Self::OutputDirectory { .. } | Self::OutputWrite { .. } => "Output",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. }
            | Self::ClassLoad { source, .. }
            | Self::OutputWrite { source, .. }
            | Self::ConfigRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Whether the error comes from the invocation (configuration, arguments,
    /// result output) rather than from running a check.
    ///
    /// Drives the process exit code.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::OutputDirectory { .. }
                | Self::OutputWrite { .. }
                | Self::InvalidPattern { .. }
                | Self::Config(_)
                | Self::ConfigRead { .. }
                | Self::TomlParse(_)
                | Self::JsonSerialize(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
