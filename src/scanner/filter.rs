use std::path::{Component, Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{CopyrightGuardError, Result};

/// Decides whether a candidate file is checked.
pub trait FileFilter: Send + Sync {
    fn should_include(&self, path: &Path) -> bool;
}

/// Ignore rules with `.gitignore` semantics, relative to `root`.
///
/// Later patterns override earlier ones, so `!pattern` re-includes a path
/// excluded before it. A file inside an ignored directory stays ignored.
#[derive(Debug)]
pub struct IgnoreFilter {
    root: PathBuf,
    rules: Gitignore,
}

impl IgnoreFilter {
    /// Build the filter from `patterns`, in order.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| CopyrightGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
        }
        let rules = builder
            .build()
            .map_err(|e| CopyrightGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            rules,
        })
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = self.relative(path);

        let ancestors: Vec<&Path> = relative
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty() && p.parent().is_some())
            .collect();
        if ancestors
            .iter()
            .rev()
            .any(|dir| self.rules.matched(dir, true).is_ignore())
        {
            return true;
        }

        self.rules.matched(&relative, false).is_ignore()
    }

    /// Path relative to the root, without `.` components.
    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

impl FileFilter for IgnoreFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_ignored(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
