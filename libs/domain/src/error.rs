use thiserror::Error;

/// Both the old and the new state were absent.
///
/// This is a caller error rather than a rule violation: there is nothing to
/// validate or authorize.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("a transition needs an old state, a new state, or both")]
pub struct EmptyTransition;
