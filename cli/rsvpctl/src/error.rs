//! Error handling and display for the CLI.

use colored::Colorize;
use rsvp_domain::Operation;
use thiserror::Error;

/// Outcomes that make the CLI exit non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{operation} is not authorized")]
    NotAuthorized { operation: Operation },

    #[error("{operation} failed validation with {violations} violation(s)")]
    Invalid {
        operation: Operation,
        violations: usize,
    },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NotAuthorized {
                operation: Operation::Delete,
            } => {
                eprintln!("\n{}", "Hint: Events cannot be deleted.".yellow());
            }
            CliError::NotAuthorized { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --user (or set RSVP_USER) as a member allowed to make this change."
                        .yellow()
                );
            }
            CliError::Invalid { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Fix every violation listed above and run the check again.".yellow()
                );
            }
        }
    }
}
