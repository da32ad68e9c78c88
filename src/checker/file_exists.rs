use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;

use super::{Checker, CheckerResult};

const CHECKER_NAME: &str = "FileExistsChecker";

/// Outcome of inspecting one expected file.
///
/// Declaration order is the order the feedback sections are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    Missing,
    Empty,
    NonReadable,
    Valid,
}

impl FileStatus {
    const REPORTED: [Self; 3] = [Self::Missing, Self::Empty, Self::NonReadable];

    /// Classify `path`. Directories count as missing.
    #[must_use]
    pub fn of(path: &Path) -> Self {
        if !std::fs::metadata(path).is_ok_and(|meta| !meta.is_dir()) {
            return Self::Missing;
        }
        match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Self::Empty,
            Ok(_) => Self::Valid,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "file not readable as text");
                Self::NonReadable
            }
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Missing => "Missing files:",
            Self::Empty => "Empty files:",
            Self::NonReadable => "Non-readable files:",
            Self::Valid => "",
        }
    }
}

/// Checks that every given path is a readable, non-blank file.
#[derive(Debug, Clone)]
pub struct FileExistsChecker {
    files: Vec<PathBuf>,
}

impl FileExistsChecker {
    #[must_use]
    pub const fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl Checker for FileExistsChecker {
    fn name(&self) -> &str {
        CHECKER_NAME
    }

    fn check(&self) -> Result<CheckerResult> {
        let classified: Vec<(FileStatus, &Path)> = self
            .files
            .iter()
            .map(|path| (FileStatus::of(path), path.as_path()))
            .collect();

        let invalid = classified
            .iter()
            .filter(|(status, _)| *status != FileStatus::Valid)
            .count();
        info!(
            checked = classified.len(),
            invalid, "file existence check finished"
        );

        if invalid == 0 {
            return Ok(CheckerResult::passed(CHECKER_NAME)?);
        }
        Ok(CheckerResult::failed(CHECKER_NAME, feedback(&classified))?)
    }
}

fn feedback(classified: &[(FileStatus, &Path)]) -> String {
    let sections: Vec<String> = FileStatus::REPORTED
        .iter()
        .filter_map(|status| {
            let names: Vec<String> = classified
                .iter()
                .filter(|(s, _)| s == status)
                .map(|(_, path)| base_name(path))
                .collect();
            if names.is_empty() {
                return None;
            }
            Some(format!("{}\n{}", status.heading(), names.join("\n")))
        })
        .collect();
    sections.join("\n\n")
}

fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
#[path = "file_exists_tests.rs"]
mod tests;
