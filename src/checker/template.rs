use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use regex::Regex;
use similar::{ChangeTag, TextDiff};
use thiserror::Error;

use super::{HeaderError, YearToken};
use crate::error::{CopyrightGuardError, Result};
use crate::language::FileCategory;

pub const YEARS_PLACEHOLDER: &str = "{years}";
pub const HOLDER_PLACEHOLDER: &str = "{holder}";

const YEARS_GROUP: &str = "years";
/// The first `{years}` site captures the token; later sites only have to match.
const YEARS_CAPTURE: &str = r"(?P<years>[0-9]{4}, [0-9]{4}|[0-9]{4})";
const YEARS_PATTERN: &str = r"(?:[0-9]{4}, [0-9]{4}|[0-9]{4})";
const HOLDER_PATTERN: &str = r"[\w\s.]+";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template is empty")]
    Empty,

    #[error("missing {{years}} placeholder")]
    MissingYears,

    #[error("pattern does not compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// A header template compiled into an anchored matcher.
#[derive(Debug)]
pub struct HeaderTemplate {
    source: String,
    pattern: Regex,
}

impl HeaderTemplate {
    /// Compile `template` into a prefix matcher.
    ///
    /// Surrounding whitespace is dropped. All literal text is
    /// escaped; `{years}` accepts `YYYY` or `YYYY, YYYY` and `{holder}`
    /// accepts word characters, whitespace and periods.
    ///
    /// # Errors
    /// Returns an error if the template is blank, has no `{years}`
    /// placeholder, or does not compile.
    pub fn compile(template: &str) -> std::result::Result<Self, TemplateError> {
        let source = template.replace("\r\n", "\n").trim().to_string();
        if source.is_empty() {
            return Err(TemplateError::Empty);
        }
        if !source.contains(YEARS_PLACEHOLDER) {
            return Err(TemplateError::MissingYears);
        }

        let escaped = regex::escape(&source);
        let escaped_years = regex::escape(YEARS_PLACEHOLDER);
        let escaped_holder = regex::escape(HOLDER_PLACEHOLDER);

        let body = escaped
            .replacen(&escaped_years, YEARS_CAPTURE, 1)
            .replace(&escaped_years, YEARS_PATTERN)
            .replace(&escaped_holder, HOLDER_PATTERN);

        let pattern = Regex::new(&format!(r"\A{body}"))?;

        Ok(Self { source, pattern })
    }

    /// The template text as matched, without surrounding whitespace.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Match `header` against the template, from its first non-whitespace
    /// character.
    ///
    /// On success returns the year token captured at the first `{years}`
    /// site.
    ///
    /// # Errors
    /// Returns `HeaderError::Incorrect` with a line diff between the template
    /// and the first lines of the header when the header does not match.
    pub fn match_header(&self, header: &str) -> std::result::Result<YearToken, HeaderError> {
        let normalized = header.replace("\r\n", "\n");
        let header = normalized.trim();

        self.pattern
            .captures(header)
            .and_then(|caps| caps.name(YEARS_GROUP))
            .and_then(|m| YearToken::parse(m.as_str()))
            .ok_or_else(|| HeaderError::Incorrect {
                diff: self.diff(header),
            })
    }

    /// Line diff between the template and the header truncated to the
    /// template's line count. Template-only lines start with `- `,
    /// header-only lines with `+ `.
    #[must_use]
    pub fn diff(&self, header: &str) -> String {
        let expected: Vec<&str> = self.source.lines().collect();
        let actual: Vec<&str> = header.lines().take(expected.len()).collect();

        let diff = TextDiff::from_slices(&expected, &actual);
        let mut out = String::new();
        for change in diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "- ",
                ChangeTag::Insert => "+ ",
                ChangeTag::Equal => "  ",
            };
            let _ = writeln!(out, "{sign}{}", change.value());
        }
        out.truncate(out.trim_end_matches('\n').len());
        out
    }
}

/// Compiled templates shared by every file checked in one run.
///
/// Identical template texts compile once and share the matcher.
#[derive(Debug, Default)]
pub struct TemplateCache {
    compiled: HashMap<String, Arc<HeaderTemplate>>,
}

impl TemplateCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled matcher for `template`, compiling it on first use.
    ///
    /// # Errors
    /// Returns the compile error of a malformed template.
    pub fn get_or_compile(
        &mut self,
        template: &str,
    ) -> std::result::Result<Arc<HeaderTemplate>, TemplateError> {
        if let Some(compiled) = self.compiled.get(template) {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(HeaderTemplate::compile(template)?);
        self.compiled
            .insert(template.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// The compiled template of each enabled category.
#[derive(Debug, Default)]
pub struct TemplateSet {
    templates: HashMap<FileCategory, Arc<HeaderTemplate>>,
}

impl TemplateSet {
    /// Compile every `(category, template)` entry.
    ///
    /// # Errors
    /// Returns `InvalidTemplate` naming the category of the first template
    /// that does not compile.
    pub fn compile<'a>(entries: impl IntoIterator<Item = (FileCategory, &'a str)>) -> Result<Self> {
        let mut cache = TemplateCache::new();
        let mut templates = HashMap::new();

        for (category, template) in entries {
            let compiled = cache.get_or_compile(template).map_err(|e| {
                CopyrightGuardError::InvalidTemplate {
                    category: category.to_string(),
                    reason: e.to_string(),
                }
            })?;
            templates.insert(category, compiled);
        }

        Ok(Self { templates })
    }

    #[must_use]
    pub fn get(&self, category: FileCategory) -> Option<&HeaderTemplate> {
        self.templates.get(&category).map(Arc::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
