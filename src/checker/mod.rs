mod result;
mod template;
mod year;

pub use result::{CheckResult, HeaderError};
pub use template::{
    HOLDER_PLACEHOLDER, HeaderTemplate, TemplateCache, TemplateError, TemplateSet,
    YEARS_PLACEHOLDER,
};
pub use year::{YearToken, validate_year};

use std::path::Path;

use tracing::debug;

use crate::comment::{Comment, CommentExtractor};
use crate::language::CommentSyntax;

/// Checks file headers against a template: missing, then structure, then year.
#[derive(Debug, Clone, Copy)]
pub struct HeaderChecker {
    bypass_year: bool,
    current_year: i32,
}

impl HeaderChecker {
    #[must_use]
    pub const fn new(bypass_year: bool, current_year: i32) -> Self {
        Self {
            bypass_year,
            current_year,
        }
    }

    /// Classify the first comment of a file against `template`.
    ///
    /// # Errors
    /// Returns the `HeaderError` of the first check that fails.
    pub fn evaluate(
        &self,
        comments: &[Comment],
        template: &HeaderTemplate,
    ) -> Result<(), HeaderError> {
        let header = match comments.first() {
            Some(comment) if !comment.is_blank() => comment,
            _ => return Err(HeaderError::Missing),
        };

        let years = template.match_header(header.text())?;
        validate_year(years, self.current_year, self.bypass_year)
    }

    #[must_use]
    pub fn check(&self, path: &Path, comments: &[Comment], template: &HeaderTemplate) -> CheckResult {
        CheckResult::from_outcome(path, self.evaluate(comments, template))
    }

    /// Extract the comments of `content` with `syntax` and check them.
    #[must_use]
    pub fn check_content(
        &self,
        path: &Path,
        content: &str,
        syntax: &CommentSyntax,
        template: &HeaderTemplate,
    ) -> CheckResult {
        let comments = CommentExtractor::new(syntax).extract(content);
        debug!(
            "{}: {} comment(s), header at line {}",
            path.display(),
            comments.len(),
            comments.first().map_or(0, Comment::line)
        );
        self.check(path, &comments, template)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
