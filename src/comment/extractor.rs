use std::borrow::Cow;

use crate::language::CommentSyntax;

/// A comment found in a source file, with its delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
    line: usize,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line on which the comment starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Consecutive single-line comments being merged into one comment.
struct LineRun {
    text: String,
    line: usize,
    /// Byte offset of the end of the last merged line.
    end: usize,
}

impl LineRun {
    /// A line comment continues the run when only whitespace and exactly one
    /// line break separate it from the previous one.
    fn continues_at(&self, content: &str, pos: usize) -> bool {
        let gap = &content[self.end..pos];
        gap.chars().all(char::is_whitespace) && gap.matches('\n').count() == 1
    }

    fn into_comment(self) -> Comment {
        Comment::new(self.text, self.line)
    }
}

pub struct CommentExtractor<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentExtractor<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    /// Extract every comment of `content` in file order.
    ///
    /// Block comments become one comment each. Runs of single-line comments
    /// on consecutive lines are merged, one line of text per source line.
    /// An unterminated block comment runs to the end of the file.
    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<Comment> {
        let content = normalize_newlines(content);
        let content = content.as_ref();

        let mut comments = Vec::new();
        let mut run: Option<LineRun> = None;
        let mut pos = 0;
        let mut line = 1;

        while pos < content.len() {
            let rest = &content[pos..];

            if let Some((start, end)) = self.block_start(rest) {
                if let Some(r) = run.take() {
                    comments.push(r.into_comment());
                }
                let body_start = pos + start.len();
                let (body_end, next) = content[body_start..]
                    .find(end)
                    .map_or((content.len(), content.len()), |off| {
                        (body_start + off, body_start + off + end.len())
                    });
                comments.push(Comment::new(&content[body_start..body_end], line));
                line += content[pos..next].matches('\n').count();
                pos = next;
            } else if let Some(prefix) = self.line_start(rest) {
                let body_start = pos + prefix.len();
                let eol = content[body_start..]
                    .find('\n')
                    .map_or(content.len(), |off| body_start + off);
                let text = &content[body_start..eol];

                match run.as_mut() {
                    Some(r) if r.continues_at(content, pos) => {
                        r.text.push('\n');
                        r.text.push_str(text);
                        r.end = eol;
                    }
                    _ => {
                        if let Some(r) = run.take() {
                            comments.push(r.into_comment());
                        }
                        run = Some(LineRun {
                            text: text.to_string(),
                            line,
                            end: eol,
                        });
                    }
                }
                pos = eol;
            } else if let Some(delimiter) = self.string_start(rest) {
                pos = skip_string_literal(content, pos, delimiter);
            } else {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                if ch == '\n' {
                    line += 1;
                }
                pos += ch.len_utf8();
            }
        }

        if let Some(r) = run {
            comments.push(r.into_comment());
        }

        comments
    }

    fn block_start(&self, rest: &str) -> Option<(&'a str, &'a str)> {
        let syntax: &'a CommentSyntax = self.syntax;
        syntax
            .multi_line
            .iter()
            .filter(|(start, end)| !start.is_empty() && !end.is_empty())
            .filter(|(start, _)| rest.starts_with(start.as_str()))
            .max_by_key(|(start, _)| start.len())
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    fn line_start(&self, rest: &str) -> Option<&'a str> {
        let syntax: &'a CommentSyntax = self.syntax;
        syntax
            .single_line
            .iter()
            .filter(|prefix| !prefix.is_empty() && rest.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len())
            .map(String::as_str)
    }

    fn string_start(&self, rest: &str) -> Option<char> {
        let first = rest.chars().next()?;
        self.syntax.string_delimiters.contains(&first).then_some(first)
    }
}

/// Return the byte offset just past the literal opened at `start`.
///
/// Literals never span lines: an unterminated literal stops before the line
/// break so line counting stays intact.
fn skip_string_literal(content: &str, start: usize, delimiter: char) -> usize {
    let body = start + delimiter.len_utf8();
    let mut chars = content[body..].char_indices();

    while let Some((off, ch)) = chars.next() {
        match ch {
            '\\' => {
                if let Some((_, '\n')) = chars.next() {
                    return body + off + 1;
                }
            }
            '\n' => return body + off,
            c if c == delimiter => return body + off + c.len_utf8(),
            _ => {}
        }
    }

    content.len()
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
