use content_inspector::inspect;

use super::{Language, LanguageRegistry};

const BOM: char = '\u{feff}';

/// Line prefixes that start a comment in any supported category. Such lines
/// never count as code evidence while sniffing.
const COMMENT_LEADERS: [&str; 4] = ["//", "/*", "*", "<!--"];

impl LanguageRegistry {
    /// Detect the language of `content` by looking at what it contains,
    /// not at the file name.
    ///
    /// Binary content is never detected. Leading markers (such as an XML
    /// declaration) are tried first for every language, then statement
    /// markers on code lines, both in registration order.
    #[must_use]
    pub fn detect(&self, content: &[u8]) -> Option<&Language> {
        if inspect(content).is_binary() {
            return None;
        }

        let text = String::from_utf8_lossy(content);
        let text = text.trim_start_matches(BOM);

        let first_line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
        if let Some(language) = self
            .all()
            .iter()
            .find(|lang| lang.leading_markers.iter().any(|m| m.matches(first_line)))
        {
            return Some(language);
        }

        let code_lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !COMMENT_LEADERS.iter().any(|c| l.starts_with(c)))
            .collect();

        self.all().iter().find(|lang| {
            code_lines
                .iter()
                .any(|line| lang.line_markers.iter().any(|m| m.matches(line)))
        })
    }
}

#[cfg(test)]
#[path = "sniff_tests.rs"]
mod tests;
