//! Colored error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}`, then an optional `× {detail}` line and
//! an optional `help: {suggestion}` line.

use std::io::{IsTerminal, Write};

use crate::error::CheckerError;

use super::ColorMode;
use super::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Whether output is decorated with ANSI codes.
    #[must_use]
    pub const fn uses_colors(&self) -> bool {
        self.use_colors
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR disables color whatever its value (https://no-color.org).
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Print `error` with its cause and a hint, if there is one.
    pub fn report(&self, error: &CheckerError) {
        let mut stderr = std::io::stderr().lock();
        self.write_checker_error(&mut stderr, error);
    }

    pub fn write_checker_error<W: Write>(&self, w: &mut W, error: &CheckerError) {
        let detail = error.detail();
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            suggestion(error),
        );
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible is left to do if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

fn suggestion(error: &CheckerError) -> Option<&'static str> {
    match error {
        CheckerError::InvalidLog { .. } => {
            Some("A Dejagnu log needs a 'spawn' line and a '=== ... Summary ===' footer")
        }
        CheckerError::OutputDirectory { .. } => {
            Some("Remove the file or pass another --output-directory")
        }
        CheckerError::InvalidPattern { .. } => {
            Some("Exclude patterns use glob syntax relative to the scanned directory, e.g. 'generated/**'")
        }
        CheckerError::Config(_) | CheckerError::ConfigRead { .. } | CheckerError::TomlParse(_) => {
            Some("Fix .pipeline-helper.toml or run with --no-config")
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
