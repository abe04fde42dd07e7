use std::io::IsTerminal;

use clap::Parser;
use tracing::debug;

use copyright_guard::cli::Cli;
use copyright_guard::commands::run_check;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    std::process::exit(run_check(&cli));
}

/// Log to stderr; `RUST_LOG` takes precedence over the command-line level.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {level}");
}
