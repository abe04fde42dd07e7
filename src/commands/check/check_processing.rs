use std::path::Path;

use crate::checker::CheckResult;
use crate::commands::context::{CheckContext, FileSkipReason};

/// Result of processing one input path for the check command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFileResult {
    /// The header was checked.
    Checked(CheckResult),
    /// The file was not checked.
    Skipped(FileSkipReason),
}

/// Run one path through the pipeline: existence, file type and template,
/// ignore rules, then the header check.
pub fn process_file_for_check(file_path: &Path, ctx: &CheckContext) -> CheckFileResult {
    if !ctx.file_reader.is_file(file_path) {
        return CheckFileResult::Skipped(FileSkipReason::NotFound);
    }
    let Ok(content) = ctx.file_reader.read(file_path) else {
        return CheckFileResult::Skipped(FileSkipReason::NotFound);
    };

    let Some(language) = ctx.registry.detect(&content) else {
        return CheckFileResult::Skipped(FileSkipReason::UnsupportedType);
    };
    let Some(template) = ctx.templates.get(language.category) else {
        return CheckFileResult::Skipped(FileSkipReason::NoTemplate(language.category));
    };

    if !ctx.filter.should_include(file_path) {
        return CheckFileResult::Skipped(FileSkipReason::Ignored);
    }

    let text = String::from_utf8_lossy(&content);
    CheckFileResult::Checked(ctx.checker.check_content(
        file_path,
        &text,
        &language.comment_syntax,
        template,
    ))
}
