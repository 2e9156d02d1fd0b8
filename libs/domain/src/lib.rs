//! # rsvp-domain
//!
//! The event aggregate and everything the validation and authorization gates
//! need to reason about it.
//!
//! ## Model
//!
//! - An [`Event`] is the aggregate root. It owns its roster of [`Member`]s
//!   and is validated and authorized as one unit.
//! - A [`Member`] is identified by its [`MemberId`]; the id is stable across
//!   edits, so old and new rosters are reconciled by id (see [`roster`]).
//! - A [`Transition`] is a proposed change: create, update or delete. It
//!   always has at least one side present.
//!
//! ## Collaborators
//!
//! - [`Clock`] supplies "now" so time-dependent rules are deterministic.
//! - [`UserAccessor`] resolves the acting [`User`], or nobody.

mod clock;
mod entity;
mod error;
mod event;
mod member;
pub mod roster;
mod transition;
mod user;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{Entity, Versioned};
pub use error::EmptyTransition;
pub use event::{Event, Form, FormPrompt};
pub use member::{FormResponse, Member};
pub use transition::{Operation, Transition};
pub use user::{StaticUserAccessor, User, UserAccessor};

pub use rsvp_id::{EventId, MemberId};
