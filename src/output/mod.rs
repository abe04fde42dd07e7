mod json;
mod summary;
mod text;

pub use json::JsonFormatter;
pub use summary::Summary;
pub use text::{log_result, log_results, result_line};

use clap::ValueEnum;

use crate::checker::CheckResult;
use crate::error::Result;

/// Trait for formatting check results into a report.
pub trait OutputFormatter {
    /// Format the check results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[CheckResult]) -> Result<String>;
}

/// How results are reported.
///
/// Text results are log lines on stderr; JSON adds a report on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
