//! Authorization: may the acting user produce this transition?
//!
//! Each [`AuthorizationPolicy`] answers for one role. [`AuthorizeEvent`]
//! grants a transition if any policy does.

mod authorize_event;
mod policies;

pub use authorize_event::AuthorizeEvent;
pub use policies::{AttendeePolicy, AuthorPolicy, FrozenAttendeePolicy, OrganizerPolicy};

use rsvp_domain::{Entity, Transition, User};

use crate::error::NotAuthorized;

/// One role's permission check. Pure and side-effect-free.
pub trait AuthorizationPolicy<T>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn permits(&self, actor: &User, transition: Transition<'_, T>) -> bool;
}

/// Decides whether the current user may make a transition.
pub trait Authorize<T: Entity>: Send + Sync {
    fn authorize(&self, transition: Transition<'_, T>) -> Result<(), NotAuthorized>;
}
