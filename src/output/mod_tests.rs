use std::path::PathBuf;

use super::*;
use crate::checker::HeaderError;

fn sample_results() -> Vec<CheckResult> {
    vec![
        CheckResult::Passed {
            path: PathBuf::from("src/Main.java"),
        },
        CheckResult::Failed {
            path: PathBuf::from("src/Old.java"),
            error: HeaderError::Year {
                found: 2019,
                expected: 2025,
            },
        },
        CheckResult::Failed {
            path: PathBuf::from("pom.xml"),
            error: HeaderError::Missing,
        },
    ]
}

#[test]
fn output_format_value_names() {
    assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
    assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
    assert!(OutputFormat::from_str("sarif", true).is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn summary_counts_failures() {
    let summary = Summary::from_results(&sample_results());

    assert_eq!(summary.examined, 3);
    assert_eq!(summary.failed, 2);
    assert!(summary.has_failures());
    assert_eq!(summary.to_string(), "found 2/3 invalid files");
}

#[test]
fn summary_of_no_results() {
    let summary = Summary::from_results(&[]);
    assert!(!summary.has_failures());
    assert_eq!(summary.to_string(), "found 0/0 invalid files");
}

#[test]
fn result_lines() {
    let results = sample_results();

    assert_eq!(result_line(&results[0]), "src/Main.java - OK");
    assert_eq!(
        result_line(&results[1]),
        "src/Old.java - FAIL (reason: year incorrect or missing)"
    );
    assert_eq!(result_line(&results[2]), "pom.xml - FAIL (reason: header missing)");
}

#[test]
fn log_results_returns_summary() {
    let summary = log_results(&sample_results());
    assert_eq!(summary, Summary { examined: 3, failed: 2 });
}
