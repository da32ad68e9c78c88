pub mod checker;
pub mod classfile;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use error::{CheckerError, Result};

/// The check ran to completion, whatever its verdict.
pub const EXIT_SUCCESS: i32 = 0;
/// The checker could not inspect its input.
pub const EXIT_CHECKER_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
