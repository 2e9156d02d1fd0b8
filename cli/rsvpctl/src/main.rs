//! rsvpctl - check proposed event changes offline.
//!
//! Runs the same authorization and validation gates the event repository
//! applies, against JSON event documents on disk.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Prefer RUST_LOG, fall back to RSVP_LOG_LEVEL. Logs go to stderr so
    // reports on stdout stay machine-readable.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if let Err(e) = cli.run(&config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
