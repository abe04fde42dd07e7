use std::fmt;

use serde::{Deserialize, Serialize};

/// File categories that can carry a header template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Java,
    Xml,
    C,
}

impl FileCategory {
    pub const ALL: [Self; 3] = [Self::Java, Self::Xml, Self::C];

    /// Suffix of the `template_<key>` configuration entry.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Xml => "xml",
            Self::C => "c",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Java => "text/x-java",
            Self::Xml => "text/xml",
            Self::C => "text/x-c",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<(String, String)>,
    /// Characters that open a string or char literal. Comment markers inside
    /// literals are not comments.
    pub string_delimiters: Vec<char>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(
        single_line: Vec<&str>,
        multi_line: Vec<(&str, &str)>,
        string_delimiters: Vec<char>,
    ) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
            string_delimiters,
        }
    }

    /// C-family syntax shared by Java and C.
    #[must_use]
    pub fn c_style() -> Self {
        Self::new(vec!["//"], vec![("/*", "*/")], vec!['"', '\''])
    }
}

/// A line prefix that identifies a category when sniffing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMarker {
    pub prefix: String,
    /// When set, the trimmed line must also end with this character.
    pub terminator: Option<char>,
    /// When set, the prefix must be followed by a name start character.
    pub named: bool,
}

impl LineMarker {
    #[must_use]
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            terminator: None,
            named: false,
        }
    }

    #[must_use]
    pub fn statement(prefix: &str, terminator: char) -> Self {
        Self {
            prefix: prefix.to_string(),
            terminator: Some(terminator),
            named: false,
        }
    }

    /// `prefix` directly followed by a name, as in `<project`.
    #[must_use]
    pub fn named(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            terminator: None,
            named: true,
        }
    }

    #[must_use]
    pub fn matches(&self, trimmed_line: &str) -> bool {
        let Some(rest) = trimmed_line.strip_prefix(self.prefix.as_str()) else {
            return false;
        };

        (!self.named
            || rest
                .chars()
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':'))
            && self
                .terminator
                .is_none_or(|t| trimmed_line.ends_with(t))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub category: FileCategory,
    pub name: String,
    pub comment_syntax: CommentSyntax,
    /// Markers checked against the first non-blank line only.
    pub leading_markers: Vec<LineMarker>,
    /// Markers checked against every code line.
    pub line_markers: Vec<LineMarker>,
}

impl Language {
    #[must_use]
    pub fn new(category: FileCategory, name: &str, comment_syntax: CommentSyntax) -> Self {
        Self {
            category,
            name: name.to_string(),
            comment_syntax,
            leading_markers: Vec::new(),
            line_markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_leading_markers(mut self, markers: Vec<LineMarker>) -> Self {
        self.leading_markers = markers;
        self
    }

    #[must_use]
    pub fn with_line_markers(mut self, markers: Vec<LineMarker>) -> Self {
        self.line_markers = markers;
        self
    }
}

/// Known languages in sniffing priority order.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    /// Register a language. A later registration for the same category
    /// replaces the earlier one but keeps its priority.
    pub fn register(&mut self, language: Language) {
        if let Some(existing) = self
            .languages
            .iter_mut()
            .find(|l| l.category == language.category)
        {
            *existing = language;
        } else {
            self.languages.push(language);
        }
    }

    #[must_use]
    pub fn get(&self, category: FileCategory) -> Option<&Language> {
        self.languages.iter().find(|l| l.category == category)
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(
            Language::new(
                FileCategory::Xml,
                "XML",
                CommentSyntax::new(vec![], vec![("<!--", "-->")], vec![]),
            )
            .with_leading_markers(vec![
                LineMarker::prefix("<?xml"),
                LineMarker::prefix("<!DOCTYPE"),
                LineMarker::prefix("<!--"),
                LineMarker::named("<"),
            ]),
        );

        registry.register(
            Language::new(FileCategory::Java, "Java", CommentSyntax::c_style()).with_line_markers(
                vec![
                    LineMarker::statement("package ", ';'),
                    LineMarker::statement("import ", ';'),
                    LineMarker::prefix("public class "),
                    LineMarker::prefix("public final class "),
                    LineMarker::prefix("public abstract class "),
                    LineMarker::prefix("public interface "),
                    LineMarker::prefix("public enum "),
                    LineMarker::prefix("public record "),
                    LineMarker::prefix("public @interface "),
                ],
            ),
        );

        registry.register(
            Language::new(FileCategory::C, "C", CommentSyntax::c_style()).with_line_markers(vec![
                LineMarker::prefix("#include"),
                LineMarker::prefix("#define "),
                LineMarker::prefix("#ifndef "),
                LineMarker::prefix("#ifdef "),
                LineMarker::prefix("#pragma "),
                LineMarker::prefix("int main("),
            ]),
        );

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
