use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CheckerError, Result};

use super::{Checker, CheckerResult};

const SPAWN_PREFIX: &str = "spawn ";
const SUMMARY_SUFFIX: &str = "Summary ===";
const TERMINATED_MARKER: &str = "got a TERM signal, terminated";
const FAILURE_PREFIXES: [&str; 2] = ["# of unexpected failures", "FAIL:"];
const STACK_FRAME_PREFIX: &str = "\tat ";
const STACK_FRAME_REPLACEMENT: &str = "    at ";

const MISSING_LOG_MESSAGE: &str = "Could not generate a report for this test. Maybe the test ran longer than expected and got aborted.";
const TIMEOUT_MESSAGE: &str = "The test took too long and got aborted. Check your code for possibly infinite loops or other long-running sections.";

/// Turns a Dejagnu log into a verdict for one test case.
///
/// The feedback is the part of the log from the first `spawn` line up to,
/// but excluding, the last summary footer.
#[derive(Debug, Clone)]
pub struct DejagnuLogChecker {
    test_name: String,
    log_file: PathBuf,
}

impl DejagnuLogChecker {
    #[must_use]
    pub fn new(test_name: impl Into<String>, log_file: &Path) -> Self {
        Self {
            test_name: test_name.into(),
            log_file: log_file.to_path_buf(),
        }
    }
}

impl Checker for DejagnuLogChecker {
    fn name(&self) -> &str {
        &self.test_name
    }

    fn check(&self) -> Result<CheckerResult> {
        if !self.log_file.exists() {
            debug!(path = %self.log_file.display(), "Dejagnu log missing");
            return Ok(CheckerResult::failed(&self.test_name, MISSING_LOG_MESSAGE)?);
        }

        let content =
            std::fs::read_to_string(&self.log_file).map_err(|source| CheckerError::FileRead {
                path: self.log_file.clone(),
                source,
            })?;
        let lines: Vec<&str> = content.lines().collect();

        let log = DejagnuLog::extract(&lines).ok_or_else(|| CheckerError::InvalidLog {
            path: self.log_file.clone(),
        })?;

        info!(
            test = %self.test_name,
            failures = log.has_failures,
            terminated = log.has_been_terminated,
            "Dejagnu log check finished"
        );
        Ok(CheckerResult::new(
            &self.test_name,
            log.is_successful(),
            Some(log.message()),
        )?)
    }
}

/// The relevant window of a log together with what the full log revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DejagnuLog<'a> {
    lines: &'a [&'a str],
    has_failures: bool,
    has_been_terminated: bool,
}

impl<'a> DejagnuLog<'a> {
    /// Returns `None` if the log has no spawn line, no summary footer, or the
    /// last footer comes before the first spawn line.
    fn extract(lines: &'a [&'a str]) -> Option<Self> {
        let mut first_line = None;
        let mut last_line = None;
        let mut has_failures = false;
        let mut has_been_terminated = false;

        for (index, line) in lines.iter().enumerate() {
            if first_line.is_none() && line.starts_with(SPAWN_PREFIX) {
                first_line = Some(index);
            }
            if line.ends_with(SUMMARY_SUFFIX) {
                last_line = Some(index);
            }
            if line.contains(TERMINATED_MARKER) {
                has_been_terminated = true;
            }
            if FAILURE_PREFIXES.iter().any(|p| line.starts_with(p)) {
                has_failures = true;
            }
        }

        let (first, last) = (first_line?, last_line?);
        Some(Self {
            lines: lines.get(first..last)?,
            has_failures,
            has_been_terminated,
        })
    }

    const fn is_successful(&self) -> bool {
        !self.has_failures && !self.has_been_terminated
    }

    fn message(&self) -> String {
        let body = self
            .lines
            .iter()
            .map(|line| unindent_stack_frame(line))
            .collect::<Vec<_>>()
            .join("\n");

        let message = if self.has_been_terminated {
            format!("{TIMEOUT_MESSAGE}\n{body}")
        } else {
            body
        };
        message.trim().to_string()
    }
}

/// CI log post-processing drops everything after a line starting with a tab.
fn unindent_stack_frame(line: &str) -> String {
    line.strip_prefix(STACK_FRAME_PREFIX).map_or_else(
        || line.to_string(),
        |rest| format!("{STACK_FRAME_REPLACEMENT}{rest}"),
    )
}

#[cfg(test)]
#[path = "dejagnu_tests.rs"]
mod tests;
