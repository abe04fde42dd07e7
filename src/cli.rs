use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "copyright-guard")]
#[command(author, version, about = "Copyright header guard - check license headers against templates")]
#[command(long_about = "Checks that each file starts with the copyright header configured for its \
    type, and that the header carries the current year.\n\n\
    Exit codes:\n  \
    0 - All checked files passed\n  \
    1 - Invalid headers found\n  \
    2 - Configuration or runtime error")]
#[command(after_help = "Example: copyright-guard -c .copyright-guard.toml $(git diff --name-only)")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print debug information (same as -v)
    #[arg(short, long)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Path to configuration file [default: ./.copyright-guard.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the check on the years in the header
    #[arg(long, alias = "bypass_year")]
    pub bypass_year: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// File(s) to check
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Default log filter directive for the requested verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match (self.verbose, self.debug) {
            (0, false) => "info",
            (0 | 1, _) => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
