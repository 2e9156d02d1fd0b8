//! Failure taxonomy for the gates and the repositories they wrap.
//!
//! [`ValidationError`] means "fix your input"; [`NotAuthorized`] means "you
//! may not do this". They are never conflated: a caller (for example a
//! transport layer) maps each to its own status.

use std::fmt;

use rsvp_domain::Operation;
use thiserror::Error;

/// A proposed state broke one or more rules.
///
/// Carries every violation found in the pass, not just the first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{entity} failed validation: {}", .messages.join(" "))]
pub struct ValidationError {
    pub entity: &'static str,
    pub messages: Vec<String>,
}

impl ValidationError {
    /// Returns true if any violation message equals `message`.
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

/// No policy granted the acting user permission for the transition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub struct NotAuthorized {
    pub entity: &'static str,
    pub operation: Option<Operation>,
}

impl NotAuthorized {
    pub fn new(entity: &'static str, operation: Operation) -> Self {
        Self {
            entity,
            operation: Some(operation),
        }
    }
}

impl fmt::Display for NotAuthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Some(operation) => write!(f, "not authorized to {operation} this {}", self.entity),
            None => write!(f, "not authorized to access this {}", self.entity),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by every [`Repository`](crate::Repository) layer.
///
/// Decorators add the validation and authorization variants; storage
/// failures from the base repository pass through unchanged.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Optimistic concurrency check failed.
    #[error("{entity} {id} was modified concurrently: expected version {expected}, found {actual}")]
    Conflict {
        entity: &'static str,
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotAuthorized(#[from] NotAuthorized),

    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_message() {
        let err = ValidationError {
            entity: "Event",
            messages: vec!["Form cannot be null.".into(), "Time Zone is required.".into()],
        };
        assert_eq!(
            err.to_string(),
            "Event failed validation: Form cannot be null. Time Zone is required."
        );
        assert!(err.contains("Form cannot be null."));
    }

    #[test]
    fn test_not_authorized_display() {
        assert_eq!(
            NotAuthorized::new("Event", Operation::Delete).to_string(),
            "not authorized to delete this Event"
        );
        let unspecified = NotAuthorized {
            entity: "Event",
            operation: None,
        };
        assert_eq!(unspecified.to_string(), "not authorized to access this Event");
    }

    #[test]
    fn test_repository_error_from_gate_errors() {
        let err: RepositoryError = NotAuthorized::new("Event", Operation::Update).into();
        assert!(matches!(err, RepositoryError::NotAuthorized(_)));
        assert!(!err.is_not_found());
        assert!(RepositoryError::not_found("Event", "evt_1").is_not_found());
    }
}
