use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CheckerError, Result};

pub trait FileFilter {
    /// Decide on a path given relative to the listing root.
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts file names ending in `.<extension>` that no exclude glob matches.
pub struct GlobFilter {
    suffix: String,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extension and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: &str, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CheckerError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| CheckerError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: format!(".{extension}"),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
