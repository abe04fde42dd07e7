use tracing::{debug, error, info};

use crate::checker::CheckResult;

use super::Summary;

/// The status line for one examined file: `<path> - OK` or `<path> - FAIL (reason: ...)`.
#[must_use]
pub fn result_line(result: &CheckResult) -> String {
    format!("{} - {result}", result.path().display())
}

/// Log one result: passes at info, failures at error, the diagnostic at debug.
pub fn log_result(result: &CheckResult) {
    let line = result_line(result);
    if result.is_valid() {
        info!("{line}");
        return;
    }

    error!("{line}");
    if let Some(diagnostic) = result.diagnostic() {
        debug!("Issues for \"{}\":\n{diagnostic}", result.path().display());
    }
}

/// Log every result in order, followed by the run summary.
pub fn log_results(results: &[CheckResult]) -> Summary {
    for result in results {
        log_result(result);
    }

    let summary = Summary::from_results(results);
    if summary.has_failures() {
        let incorrect: Vec<String> = results
            .iter()
            .filter(|r| !r.is_valid())
            .map(|r| r.path().display().to_string())
            .collect();
        error!("Incorrect files: {}", incorrect.join(", "));
        error!("{summary}");
    } else {
        info!("{summary}");
    }
    summary
}
