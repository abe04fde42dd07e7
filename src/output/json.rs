use serde::Serialize;

use crate::checker::{CheckResult, HeaderError};
use crate::error::Result;

use super::{OutputFormatter, Summary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary::from_results(results),
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FileResult {
    let error = result.error();
    FileResult {
        path: result.path().display().to_string(),
        status: if result.is_valid() { "passed" } else { "failed" },
        kind: error.map(HeaderError::kind),
        reason: error.map(HeaderError::reason),
        diagnostic: result.diagnostic(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
