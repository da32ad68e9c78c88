use std::path::{Path, PathBuf};

use tracing::info;

use crate::checker::CheckerResult;
use crate::error::{CheckerError, Result};

/// Writes one `TEST-<name>.json` file per result for the CI reporting layer.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    #[must_use]
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn file_name(result: &CheckerResult) -> String {
        format!("TEST-{}.json", result.name())
    }

    /// Make sure the output directory exists.
    ///
    /// # Errors
    /// Returns an error if the path exists but is not a directory, or if it
    /// cannot be created.
    pub fn prepare(&self) -> Result<()> {
        if self.output_dir.exists() {
            if self.output_dir.is_dir() {
                return Ok(());
            }
            return Err(CheckerError::OutputDirectory {
                path: self.output_dir.clone(),
            });
        }

        std::fs::create_dir_all(&self.output_dir).map_err(|source| CheckerError::OutputWrite {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Serialize `result` into the output directory, replacing an earlier
    /// file of the same name. Returns the written path.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be prepared or the file
    /// cannot be written.
    pub fn write(&self, result: &CheckerResult) -> Result<PathBuf> {
        self.prepare()?;

        let path = self.output_dir.join(Self::file_name(result));
        let json = serde_json::to_string(result)?;
        std::fs::write(&path, json).map_err(|source| CheckerError::OutputWrite {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), successful = result.is_successful(), "wrote result");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
