mod dejagnu;
mod file_exists;
mod line_length;
mod main_method;
mod result;
mod simple_message;

pub use dejagnu::DejagnuLogChecker;
pub use file_exists::{FileExistsChecker, FileStatus};
pub use line_length::{FileLineLengthViolations, LineLengthChecker};
pub use main_method::{EntryPointCandidate, MainMethodChecker, main_class};
pub use result::{CheckerResult, MAX_MESSAGE_LENGTH, ValidationError};
pub use simple_message::SimpleMessageChecker;

use crate::error::Result;
use crate::scanner::DirectoryLister;

/// A single self-contained inspection producing one verdict.
pub trait Checker {
    /// Name the verdict is reported under.
    fn name(&self) -> &str;

    /// Run the inspection.
    ///
    /// A failed inspection is still `Ok`; `Err` means the inspection itself
    /// could not be carried out.
    ///
    /// # Errors
    /// Returns an error if required input cannot be read or is malformed.
    fn check(&self) -> Result<CheckerResult>;
}

/// Every checker the command line can run.
#[derive(Debug)]
pub enum AnyChecker {
    FileExists(FileExistsChecker),
    LineLength(LineLengthChecker<DirectoryLister>),
    Dejagnu(DejagnuLogChecker),
    MainMethod(MainMethodChecker<DirectoryLister>),
    SimpleMessage(SimpleMessageChecker),
}

impl AnyChecker {
    fn inner(&self) -> &dyn Checker {
        match self {
            Self::FileExists(c) => c,
            Self::LineLength(c) => c,
            Self::Dejagnu(c) => c,
            Self::MainMethod(c) => c,
            Self::SimpleMessage(c) => c,
        }
    }
}

impl Checker for AnyChecker {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn check(&self) -> Result<CheckerResult> {
        self.inner().check()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
