mod check_processing;
mod runner;

pub use runner::run_check;

// Re-export internal items for tests
#[cfg(test)]
pub(crate) use check_processing::{CheckFileResult, process_file_for_check};
#[cfg(test)]
pub(crate) use runner::{apply_cli_overrides, run_check_impl, run_check_with_context};
