use std::sync::Arc;

use rsvp_domain::{Clock, Entity, Event, Transition, UserAccessor};
use tracing::{debug, info};

use super::{
    AttendeePolicy, AuthorPolicy, AuthorizationPolicy, Authorize, FrozenAttendeePolicy,
    OrganizerPolicy,
};
use crate::error::NotAuthorized;

/// Combines the event policies into one decision per operation.
///
/// - anonymous actors are always denied
/// - deletes are always denied
/// - creates need the actor to be the author of the proposed event
/// - updates are granted if any policy grants them
pub struct AuthorizeEvent {
    users: Arc<dyn UserAccessor>,
    policies: Vec<Box<dyn AuthorizationPolicy<Event>>>,
}

impl AuthorizeEvent {
    /// A composer with no update policies; every update is denied until
    /// policies are added.
    pub fn new(users: Arc<dyn UserAccessor>) -> Self {
        Self {
            users,
            policies: Vec::new(),
        }
    }

    /// The author, organizer, attendee and frozen-attendee policies.
    pub fn standard(users: Arc<dyn UserAccessor>, clock: Arc<dyn Clock>) -> Self {
        Self::new(users)
            .with_policy(AuthorPolicy)
            .with_policy(OrganizerPolicy)
            .with_policy(AttendeePolicy::new(clock.clone()))
            .with_policy(FrozenAttendeePolicy::new(clock))
    }

    pub fn with_policy(mut self, policy: impl AuthorizationPolicy<Event> + 'static) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }
}

impl Authorize<Event> for AuthorizeEvent {
    fn authorize(&self, transition: Transition<'_, Event>) -> Result<(), NotAuthorized> {
        let operation = transition.operation();
        let denied = NotAuthorized::new(Event::TYPE_NAME, operation);

        let Some(actor) = self.users.current_user() else {
            info!(%operation, "anonymous write denied");
            return Err(denied);
        };

        let granted_by = match transition {
            Transition::Delete { .. } => None,
            Transition::Create { .. } => AuthorPolicy
                .permits(&actor, transition)
                .then(|| AuthorPolicy.name()),
            Transition::Update { .. } => self
                .policies
                .iter()
                .find(|policy| policy.permits(&actor, transition))
                .map(|policy| policy.name()),
        };

        match granted_by {
            Some(policy) => {
                debug!(%operation, user = %actor.email_address, policy, "write authorized");
                Ok(())
            }
            None => {
                info!(%operation, user = %actor.email_address, "write denied");
                Err(denied)
            }
        }
    }
}
