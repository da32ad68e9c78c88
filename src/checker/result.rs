use serde::Serialize;
use thiserror::Error;

/// Upper bound on the feedback length, in characters.
///
/// Keeps the serialized payload handed to the CI reporting layer bounded.
pub const MAX_MESSAGE_LENGTH: usize = 10_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Checker name cannot be blank")]
    BlankName,

    #[error("Feedback for non-successful checks cannot be blank")]
    MissingFeedback,
}

/// Verdict of a single checker run.
///
/// Instances are validated on construction: the name is never blank, and a
/// failed result always carries feedback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CheckerResult {
    name: String,
    successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckerResult {
    /// Create a validated result, truncating overlong feedback.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankName`] if `name` is blank, and
    /// [`ValidationError::MissingFeedback`] if the check failed without a
    /// non-blank message.
    pub fn new(
        name: impl Into<String>,
        successful: bool,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if !successful && message.as_deref().is_none_or(|m| m.trim().is_empty()) {
            return Err(ValidationError::MissingFeedback);
        }

        Ok(Self {
            name,
            successful,
            message: message.map(truncate_message),
        })
    }

    /// A successful result without feedback.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankName`] if `name` is blank.
    pub fn passed(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, true, None)
    }

    /// A failed result with the given feedback.
    ///
    /// # Errors
    /// See [`CheckerResult::new`].
    pub fn failed(
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, false, Some(message.into()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.successful
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn truncate_message(mut message: String) -> String {
    if let Some((cut, _)) = message.char_indices().nth(MAX_MESSAGE_LENGTH) {
        message.truncate(cut);
    }
    message
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
