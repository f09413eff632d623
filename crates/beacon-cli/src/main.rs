//! Beacon binary
//!
//! Assigns channels to the nodes in a CSV file and prints the result.

use beacon_cli::{execute, Cli};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon=info,beacon_cli=info,beacon_alloc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let run = match execute(&cli) {
        Ok(run) => run,
        Err(e) => {
            tracing::error!(error = %e, "allocation aborted");
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    match run.render(cli.format) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    }

    ExitCode::from(run.exit_code(cli.strict))
}
