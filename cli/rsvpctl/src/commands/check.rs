//! `rsvpctl check`: run both gates against event documents on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use rsvp_domain::{Event, StaticUserAccessor, Transition, UserAccessor};
use rsvp_gate::{Authorize, EventGate, NotAuthorized, Validate, ValidationError};
use tracing::debug;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_report, GateRow, Report};

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Currently stored event (JSON). Omit to check a create.
    #[arg(long)]
    old: Option<PathBuf>,

    /// Proposed event (JSON). Omit to check a delete.
    #[arg(long)]
    new: Option<PathBuf>,

    /// Email of the acting user. Omit for an anonymous request.
    #[arg(long, env = "RSVP_USER")]
    user: Option<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let old = self.old.as_deref().map(read_event).transpose()?;
        let new = self.new.as_deref().map(read_event).transpose()?;
        let transition = Transition::between(old.as_ref(), new.as_ref())
            .context("pass --old, --new, or both")?;

        let users: Arc<dyn UserAccessor> = Arc::new(match self.user {
            Some(email) => StaticUserAccessor::user(email),
            None => StaticUserAccessor::anonymous(),
        });
        let gate = EventGate::builder(users).clock(ctx.clock.clone());

        // Both gates run so the report is complete; the repository chain
        // stops at the first refusal.
        let authorization = gate.authorizer().authorize(transition);
        let validation = gate.validator().validate_state(transition);
        debug!(
            operation = %transition.operation(),
            authorized = authorization.is_ok(),
            valid = validation.is_ok(),
            "check finished"
        );

        let report = build_report(transition, &authorization, &validation);
        print_report(&report, ctx.format);

        let operation = transition.operation();
        if authorization.is_err() {
            return Err(CliError::NotAuthorized { operation }.into());
        }
        if let Err(e) = validation {
            return Err(CliError::Invalid {
                operation,
                violations: e.messages.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn read_event(path: &Path) -> Result<Event> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a valid event", path.display()))
}

fn build_report(
    transition: Transition<'_, Event>,
    authorization: &Result<(), NotAuthorized>,
    validation: &Result<(), ValidationError>,
) -> Report {
    let mut gates = vec![match authorization {
        Ok(()) => GateRow {
            gate: "authorization",
            outcome: "granted",
            detail: String::new(),
        },
        Err(e) => GateRow {
            gate: "authorization",
            outcome: "denied",
            detail: e.to_string(),
        },
    }];

    match validation {
        Ok(()) => gates.push(GateRow {
            gate: "validation",
            outcome: "passed",
            detail: String::new(),
        }),
        Err(e) => gates.extend(e.messages.iter().map(|message| GateRow {
            gate: "validation",
            outcome: "failed",
            detail: message.clone(),
        })),
    }

    Report {
        operation: transition.operation().to_string(),
        accepted: authorization.is_ok() && validation.is_ok(),
        gates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_domain::{Member, Operation};
    use rstest::rstest;

    fn event() -> Event {
        Event::draft(Member::author("skip@example.com", "Skip"))
    }

    #[test]
    fn test_report_for_accepted_create() {
        let event = event();
        let report = build_report(Transition::Create { new: &event }, &Ok(()), &Ok(()));
        assert!(report.accepted);
        assert_eq!(report.operation, "create");
        assert_eq!(report.gates.len(), 2);
    }

    #[rstest]
    #[case(true, 1)]
    #[case(false, 2)]
    fn test_report_lists_each_violation(#[case] authorized: bool, #[case] violations: usize) {
        let event = event();
        let authorization = if authorized {
            Ok(())
        } else {
            Err(NotAuthorized::new("Event", Operation::Delete))
        };
        let validation = Err(ValidationError {
            entity: "Event",
            messages: (0..violations).map(|i| format!("rule {i}")).collect(),
        });

        let report = build_report(Transition::Delete { old: &event }, &authorization, &validation);
        assert!(!report.accepted);
        assert_eq!(report.gates.len(), 1 + violations);
        assert_eq!(report.gates[0].outcome, if authorized { "granted" } else { "denied" });
    }

    #[test]
    fn test_read_event_reports_path() {
        let err = read_event(Path::new("/nonexistent/event.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/event.json"));
    }
}
