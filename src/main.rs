use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vibecheck::cli::Cli;
use vibecheck::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so --json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let root = match &cli.project {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    commands::run(cli.command, &root, cli.json, cli.api_url.as_deref())
}
