use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CheckerError, Result};
use crate::output::display_path;
use crate::scanner::FileLister;

use super::{Checker, CheckerResult};

const CHECKER_NAME: &str = "LineLengthChecker";

/// Overlong lines found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineLengthViolations {
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// 1-based line number to line length in characters.
    pub violations: BTreeMap<usize, usize>,
}

impl fmt::Display for FileLineLengthViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        let noun = if count == 1 { "line" } else { "lines" };
        writeln!(f, "{}, on {count} {noun}:", self.file)?;
        for (line, length) in &self.violations {
            writeln!(f, "    -> line {line}, length {length}")?;
        }
        Ok(())
    }
}

/// Checks that no line in the listed files is longer than a threshold.
#[derive(Debug, Clone)]
pub struct LineLengthChecker<L> {
    lister: L,
    root: PathBuf,
    extension: String,
    max_length: usize,
}

impl<L: FileLister> LineLengthChecker<L> {
    #[must_use]
    pub fn new(lister: L, root: &Path, extension: &str, max_length: usize) -> Self {
        Self {
            lister,
            root: root.to_path_buf(),
            extension: extension.to_string(),
            max_length,
        }
    }

    fn scan_file(&self, path: &Path) -> Result<Option<FileLineLengthViolations>> {
        let content = std::fs::read_to_string(path).map_err(|source| CheckerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let violations: BTreeMap<usize, usize> = content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.chars().count()))
            .filter(|(_, length)| *length > self.max_length)
            .collect();

        debug!(
            path = %path.display(),
            violations = violations.len(),
            "scanned file"
        );
        if violations.is_empty() {
            return Ok(None);
        }
        Ok(Some(FileLineLengthViolations {
            file: display_path(path, Some(&self.root)),
            violations,
        }))
    }
}

impl<L: FileLister> Checker for LineLengthChecker<L> {
    fn name(&self) -> &str {
        CHECKER_NAME
    }

    fn check(&self) -> Result<CheckerResult> {
        let mut offending = Vec::new();
        for path in self.lister.list(&self.root, &self.extension)? {
            if let Some(found) = self.scan_file(&path)? {
                offending.push(found);
            }
        }

        info!(
            files = offending.len(),
            max_length = self.max_length,
            "line length check finished"
        );
        if offending.is_empty() {
            return Ok(CheckerResult::passed(CHECKER_NAME)?);
        }

        let mut message = format!(
            "Found files with lines longer than {} characters:\n",
            self.max_length
        );
        for file in &offending {
            let _ = write!(message, "{file}");
        }
        Ok(CheckerResult::failed(CHECKER_NAME, message.trim())?)
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
