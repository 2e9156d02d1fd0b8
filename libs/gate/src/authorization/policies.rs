//! Role policies for the event aggregate.
//!
//! The actor is linked to a roster member by email address. Policies that
//! look at roles use the prior state, so a proposed state cannot grant its
//! own author the right to write it.

use std::sync::Arc;

use rsvp_domain::{roster, Clock, Event, Member, Transition, User};

use super::AuthorizationPolicy;

/// The event's author may write it.
///
/// Creates are judged against the proposed state; updates and deletes
/// against the stored one. An author who changes their email address is
/// matched on the stored address for that save.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorPolicy;

impl AuthorizationPolicy<Event> for AuthorPolicy {
    fn name(&self) -> &'static str {
        "author"
    }

    fn permits(&self, actor: &User, transition: Transition<'_, Event>) -> bool {
        let authority = match transition {
            Transition::Create { new } => new,
            Transition::Update { old, .. } | Transition::Delete { old } => old,
        };
        authority
            .author()
            .is_some_and(|author| author.has_email(&actor.email_address))
    }
}

/// Organizers may edit an existing event, including other members' records.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizerPolicy;

impl AuthorizationPolicy<Event> for OrganizerPolicy {
    fn name(&self) -> &'static str {
        "organizer"
    }

    fn permits(&self, actor: &User, transition: Transition<'_, Event>) -> bool {
        let Transition::Update { old, .. } = transition else {
            return false;
        };
        old.member_by_email(&actor.email_address)
            .is_some_and(|member| member.is_organizer)
    }
}

/// While RSVP is open, an attendee may add or edit their own record and
/// nothing else.
#[derive(Clone)]
pub struct AttendeePolicy {
    clock: Arc<dyn Clock>,
}

impl AttendeePolicy {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl AuthorizationPolicy<Event> for AttendeePolicy {
    fn name(&self) -> &'static str {
        "attendee"
    }

    fn permits(&self, actor: &User, transition: Transition<'_, Event>) -> bool {
        let Transition::Update { old, new } = transition else {
            return false;
        };
        if old.is_rsvp_closed(self.clock.now()) || !old.same_details(new) {
            return false;
        }

        let email = actor.email_address.as_str();
        let before = old.member_by_email(email);
        let Some(own) = before.or_else(|| new.member_by_email(email)) else {
            return false;
        };
        // A first RSVP must be a new record, not an existing member's id.
        if before.is_none() && old.member(own.id).is_some() {
            return false;
        }
        let after = new.member(own.id);

        let attending = |m: Option<&Member>| m.is_some_and(|m| m.is_attending);
        if !attending(before) && !attending(after) {
            return false;
        }

        if let Some(after) = after {
            if !after.has_email(email) || !same_roles(before, after) {
                return false;
            }
        }

        roster::only_touches(&old.members, &new.members, own.id)
    }
}

/// After RSVP closes, an attendee is frozen: they may only withdraw.
///
/// Withdrawing means removing their own record, or clearing `is_attending`
/// with every other field of the record left as it was.
#[derive(Clone)]
pub struct FrozenAttendeePolicy {
    clock: Arc<dyn Clock>,
}

impl FrozenAttendeePolicy {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl AuthorizationPolicy<Event> for FrozenAttendeePolicy {
    fn name(&self) -> &'static str {
        "frozen_attendee"
    }

    fn permits(&self, actor: &User, transition: Transition<'_, Event>) -> bool {
        let Transition::Update { old, new } = transition else {
            return false;
        };
        if !old.is_rsvp_closed(self.clock.now()) || !old.same_details(new) {
            return false;
        }

        let Some(own) = old.member_by_email(&actor.email_address) else {
            return false;
        };
        if !own.is_attending || !roster::only_touches(&old.members, &new.members, own.id) {
            return false;
        }

        match new.member(own.id) {
            None => true,
            Some(after) => {
                *after
                    == Member {
                        is_attending: false,
                        ..own.clone()
                    }
            }
        }
    }
}

/// An attendee may not grant themselves roles they did not have.
fn same_roles(before: Option<&Member>, after: &Member) -> bool {
    let (was_author, was_organizer) =
        before.map_or((false, false), |m| (m.is_author, m.is_organizer));
    after.is_author == was_author && after.is_organizer == was_organizer
}
