use std::fmt;

use serde::Serialize;

use crate::checker::CheckResult;

/// Counts over the examined files of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub examined: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        let failed = results.iter().filter(|r| !r.is_valid()).count();
        Self {
            examined: results.len(),
            failed,
        }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "found {}/{} invalid files", self.failed, self.examined)
    }
}
