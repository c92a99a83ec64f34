//! Terminal presentation layer
//!
//! This module handles:
//! - Verbose diagnostics on stderr, gated by the global `--verbose` flag
//! - Styled rendering of kernels and retention plans on stdout

pub mod display;

use console::Style;

/// Verbose diagnostics sink
///
/// Normal command output goes to stdout. Everything reported here goes to
/// stderr, and only when verbose output was requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a diagnostic line when verbose
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    /// Print a highlighted diagnostic line when verbose
    pub fn warn(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!(
                "{} {}",
                Style::new().yellow().bold().apply_to("warning:"),
                message.as_ref()
            );
        }
    }
}
