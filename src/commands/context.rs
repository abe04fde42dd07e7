use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::checker::{HeaderChecker, TemplateSet};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::language::{FileCategory, LanguageRegistry};
use crate::scanner::{FileFilter, IgnoreFilter};

// =============================================================================
// File Processing Result Types
// =============================================================================

/// Reason a file was not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSkipReason {
    /// Not a regular file, or its contents could not be read.
    NotFound,
    /// Content sniffing found no supported file type.
    UnsupportedType,
    /// The file type has no configured template.
    NoTemplate(FileCategory),
    /// The file matches an ignore pattern.
    Ignored,
}

impl fmt::Display for FileSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::UnsupportedType => write!(f, "unsupported file type"),
            Self::NoTemplate(category) => {
                write!(f, "no template for file type ({})", category.mime_type())
            }
            Self::Ignored => write!(f, "ignored by configuration"),
        }
    }
}

// =============================================================================
// IO Abstraction Traits for Testability
// =============================================================================

/// Trait for reading candidate files (for testability).
pub trait FileReader: Send + Sync {
    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Load the configuration from `config_path`, or from the default location.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or configures no template.
pub(crate) fn load_config(config_path: Option<&Path>) -> crate::Result<Config> {
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

// =============================================================================
// Context Struct for Dependency Injection
// =============================================================================

/// Dependencies of one check run.
///
/// Production code builds it with `from_config()`; tests can use `new()` to
/// inject a custom reader or filter.
pub struct CheckContext {
    pub registry: LanguageRegistry,
    pub templates: TemplateSet,
    pub checker: HeaderChecker,
    pub filter: Box<dyn FileFilter>,
    pub file_reader: Box<dyn FileReader>,
}

impl CheckContext {
    #[must_use]
    pub fn new(
        registry: LanguageRegistry,
        templates: TemplateSet,
        checker: HeaderChecker,
        filter: Box<dyn FileFilter>,
        file_reader: Box<dyn FileReader>,
    ) -> Self {
        Self {
            registry,
            templates,
            checker,
            filter,
            file_reader,
        }
    }

    /// Create context from config (production factory).
    ///
    /// Ignore patterns are resolved against `root`.
    ///
    /// # Errors
    /// Returns an error if a template or an ignore pattern is invalid.
    pub fn from_config(config: &Config, root: &Path, current_year: i32) -> crate::Result<Self> {
        let templates = TemplateSet::compile(config.templates())?;
        let filter = IgnoreFilter::new(root, &config.ignore)?;

        Ok(Self::new(
            LanguageRegistry::default(),
            templates,
            HeaderChecker::new(config.bypass_year_check, current_year),
            Box::new(filter),
            Box::new(RealFileReader),
        ))
    }
}

/// Resolve the directory ignore patterns are relative to.
///
/// # Errors
/// Returns `CopyrightGuardError::Io` if the current directory cannot be determined.
pub(crate) fn resolve_project_root() -> crate::Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
