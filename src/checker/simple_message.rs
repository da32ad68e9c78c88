use crate::error::Result;

use super::{Checker, CheckerResult};

/// Reports a verdict decided by the caller, e.g. a pipeline step that only
/// needs its outcome shown next to the other checks.
#[derive(Debug, Clone)]
pub struct SimpleMessageChecker {
    name: String,
    successful: bool,
    message: String,
}

impl SimpleMessageChecker {
    #[must_use]
    pub fn new(name: impl Into<String>, successful: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            successful,
            message: message.into(),
        }
    }
}

impl Checker for SimpleMessageChecker {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self) -> Result<CheckerResult> {
        Ok(CheckerResult::new(
            &self.name,
            self.successful,
            Some(self.message.clone()),
        )?)
    }
}

#[cfg(test)]
#[path = "simple_message_tests.rs"]
mod tests;
