use std::path::PathBuf;

use chrono::Datelike;
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::checker::CheckResult;
use crate::cli::Cli;
use crate::commands::context::{CheckContext, FileSkipReason, load_config, resolve_project_root};
use crate::config::Config;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, log_results};
use crate::{EXIT_CONFIG_ERROR, EXIT_HEADER_INVALID, EXIT_SUCCESS};

use super::check_processing::{CheckFileResult, process_file_for_check};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error!(error_type = e.error_type(), "{e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn run_check_impl(cli: &Cli) -> crate::Result<i32> {
    info!("Starting copyright header checker...");
    debug!("Arguments: {cli:?}");

    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref())?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);

    // 3. Build check context; ignore patterns are relative to the working directory
    let project_root = resolve_project_root()?;
    info!("Current working directory: {}", project_root.display());
    let current_year = chrono::Local::now().year();
    let ctx = CheckContext::from_config(&config, &project_root, current_year)?;

    // 4. Run check with context
    run_check_with_context(&cli.files, &ctx, cli.format)
}

pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.bypass_year {
        config.bypass_year_check = true;
    }
}

/// Check `paths` in parallel, then report in input order.
///
/// # Errors
/// Returns an error if the JSON report cannot be serialized.
pub fn run_check_with_context(
    paths: &[PathBuf],
    ctx: &CheckContext,
    format: OutputFormat,
) -> crate::Result<i32> {
    let processed: Vec<(&PathBuf, CheckFileResult)> = paths
        .par_iter()
        .map(|path| (path, process_file_for_check(path, ctx)))
        .collect();

    let results = collect_results(processed);
    let summary = log_results(&results);

    if format == OutputFormat::Json {
        println!("{}", JsonFormatter.format(&results)?);
    }

    Ok(if summary.has_failures() {
        EXIT_HEADER_INVALID
    } else {
        EXIT_SUCCESS
    })
}

/// Log skipped paths and keep the check results, preserving order.
fn collect_results(processed: Vec<(&PathBuf, CheckFileResult)>) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(processed.len());
    for (path, outcome) in processed {
        match outcome {
            CheckFileResult::Checked(result) => results.push(result),
            CheckFileResult::Skipped(FileSkipReason::NotFound) => {
                error!("File not found: {}", path.display());
            }
            CheckFileResult::Skipped(reason) => {
                debug!("Skipping {}: {reason}", path.display());
            }
        }
    }
    results
}
