//! CLI commands.

mod check;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rsvp_domain::{Clock, FixedClock, SystemClock};

use crate::config::Config;
use crate::output::OutputFormat;

/// rsvpctl - check event changes against the RSVP gates.
#[derive(Debug, Parser)]
#[command(name = "rsvpctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Authorize and validate a proposed event change.
    Check(check::CheckCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn run(self, config: &Config) -> Result<()> {
        let clock: Arc<dyn Clock> = match config.now {
            Some(now) => Arc::new(FixedClock(now)),
            None => Arc::new(SystemClock),
        };

        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
            clock,
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("rsvpctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared context for command execution.
pub struct CommandContext {
    pub format: OutputFormat,
    pub clock: Arc<dyn Clock>,
}
