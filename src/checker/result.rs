use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file's header was rejected.
///
/// The diagnostic only exists on the variants that have one: a line diff for
/// `Incorrect`, the found and expected years for `Year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    Missing,
    Incorrect { diff: String },
    Year { found: i32, expected: i32 },
}

impl HeaderError {
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Missing => "header missing",
            Self::Incorrect { .. } => "header incorrect or missing",
            Self::Year { .. } => "year incorrect or missing",
        }
    }

    /// Stable machine-readable name, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "header_missing",
            Self::Incorrect { .. } => "header_incorrect",
            Self::Year { .. } => "year_incorrect",
        }
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Incorrect { diff } => Some(diff.clone()),
            Self::Year { found, expected } => Some(format!("found {found} expected {expected}")),
        }
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of checking one file's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed { path: PathBuf },
    Failed { path: PathBuf, error: HeaderError },
}

impl CheckResult {
    #[must_use]
    pub fn from_outcome(path: &Path, outcome: Result<(), HeaderError>) -> Self {
        let path = path.to_path_buf();
        match outcome {
            Ok(()) => Self::Passed { path },
            Err(error) => Self::Failed { path, error },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path } | Self::Failed { path, .. } => path,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&HeaderError> {
        match self {
            Self::Passed { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        self.error().and_then(HeaderError::diagnostic)
    }
}

/// Renders `OK` or `FAIL (reason: <message>)`, without the path.
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed { .. } => f.write_str("OK"),
            Self::Failed { error, .. } => write!(f, "FAIL (reason: {error})"),
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
