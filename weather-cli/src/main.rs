//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting, including the trend chart

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod chart;
mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the config file.
    let _ = dotenvy::dotenv();

    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);
    cmd.run().await
}

/// Log to stderr so command output on stdout stays clean.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("{level},hyper=warn,reqwest=warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
