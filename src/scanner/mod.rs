mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{CheckerError, Result};

/// Source of the files a checker inspects.
pub trait FileLister {
    type Files: Iterator<Item = PathBuf>;

    /// List readable regular files below `root` whose name ends with
    /// `.<extension>`. The returned sequence is single-pass; call `list`
    /// again to restart.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be accessed.
    fn list(&self, root: &Path, extension: &str) -> Result<Self::Files>;
}

/// Recursive lister backed by `walkdir`.
///
/// Entries are visited sorted by file name at every directory level, so the
/// order is the same on every platform.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLister {
    exclude_patterns: Vec<String>,
}

impl DirectoryLister {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclude_patterns: Vec::new(),
        }
    }

    /// Skip files matching any of the glob patterns (relative to the root).
    #[must_use]
    pub const fn with_excludes(exclude_patterns: Vec<String>) -> Self {
        Self { exclude_patterns }
    }
}

impl FileLister for DirectoryLister {
    type Files = ListedFiles;

    fn list(&self, root: &Path, extension: &str) -> Result<ListedFiles> {
        std::fs::metadata(root).map_err(|source| CheckerError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        let filter = GlobFilter::new(extension, &self.exclude_patterns)?;

        Ok(ListedFiles {
            root: root.to_path_buf(),
            walker: WalkDir::new(root).sort_by_file_name().into_iter(),
            filter,
        })
    }
}

/// Lazy walk over the files selected by a [`DirectoryLister`].
pub struct ListedFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
    filter: GlobFilter,
}

impl Iterator for ListedFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let Self {
            root,
            walker,
            filter,
        } = self;
        walker
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| warn!(error = %e, "skipping unreadable entry"))
                    .ok()
            })
            .find(|entry| accepts(root, filter, entry.path()))
            .map(walkdir::DirEntry::into_path)
    }
}

fn accepts(root: &Path, filter: &GlobFilter, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    path.is_file() && filter.should_include(relative) && is_readable(path)
}

fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
