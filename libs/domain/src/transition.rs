//! Proposed state changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EmptyTransition;

/// The kind of write a transition represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// A proposed move from an old state to a new state.
///
/// "Neither side present" cannot be represented; use
/// [`Transition::between`] to build one from two optional states.
#[derive(Debug)]
pub enum Transition<'a, T> {
    Create { new: &'a T },
    Update { old: &'a T, new: &'a T },
    Delete { old: &'a T },
}

// Manual impls: deriving would require `T: Clone`.
impl<T> Clone for Transition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Transition<'_, T> {}

impl<'a, T> Transition<'a, T> {
    /// Pairs two optional states.
    pub fn between(old: Option<&'a T>, new: Option<&'a T>) -> Result<Self, EmptyTransition> {
        match (old, new) {
            (None, Some(new)) => Ok(Transition::Create { new }),
            (Some(old), Some(new)) => Ok(Transition::Update { old, new }),
            (Some(old), None) => Ok(Transition::Delete { old }),
            (None, None) => Err(EmptyTransition),
        }
    }

    /// Saving `new` over whatever is currently stored.
    pub fn saving(current: Option<&'a T>, new: &'a T) -> Self {
        match current {
            Some(old) => Transition::Update { old, new },
            None => Transition::Create { new },
        }
    }

    /// The prior state, absent on create.
    pub fn before(&self) -> Option<&'a T> {
        match *self {
            Transition::Create { .. } => None,
            Transition::Update { old, .. } | Transition::Delete { old } => Some(old),
        }
    }

    /// The proposed state, absent on delete.
    pub fn after(&self) -> Option<&'a T> {
        match *self {
            Transition::Create { new } | Transition::Update { new, .. } => Some(new),
            Transition::Delete { .. } => None,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Transition::Create { .. } => Operation::Create,
            Transition::Update { .. } => Operation::Update,
            Transition::Delete { .. } => Operation::Delete,
        }
    }
}
