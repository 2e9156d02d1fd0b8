//! Wiring for the standard event chain.

use std::sync::Arc;

use rsvp_domain::{Clock, Event, SystemClock, UserAccessor};

use crate::authorization::AuthorizeEvent;
use crate::repository::{AuthorizingRepository, Repository, ValidatingRepository};
use crate::validation::{
    EmailValidator, KnownTimeZones, StandardEmailValidator, TimeZoneValidator, ValidateEvent,
    ValidateMember,
};

/// An event repository behind both gates: authorization, then validation,
/// then the base store `R`.
pub type GatedRepository<R> =
    AuthorizingRepository<ValidatingRepository<R, ValidateEvent>, AuthorizeEvent>;

/// Builds the validators, the composed authorizer and the decorator chain
/// from one set of collaborators.
///
/// ```ignore
/// let repo = EventGate::builder(users)
///     .clock(Arc::new(FixedClock(now)))
///     .wrap(InMemoryRepository::new());
/// ```
pub struct EventGate {
    users: Arc<dyn UserAccessor>,
    clock: Arc<dyn Clock>,
    email: Arc<dyn EmailValidator>,
    time_zones: Arc<dyn TimeZoneValidator>,
}

impl EventGate {
    /// Starts from the system clock, the standard email check and the known
    /// time zones.
    pub fn builder(users: Arc<dyn UserAccessor>) -> Self {
        Self {
            users,
            clock: Arc::new(SystemClock),
            email: Arc::new(StandardEmailValidator),
            time_zones: Arc::new(KnownTimeZones),
        }
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn email_validator(mut self, email: Arc<dyn EmailValidator>) -> Self {
        self.email = email;
        self
    }

    pub fn time_zones(mut self, time_zones: Arc<dyn TimeZoneValidator>) -> Self {
        self.time_zones = time_zones;
        self
    }

    pub fn validator(&self) -> ValidateEvent {
        ValidateEvent::new(
            self.clock.clone(),
            ValidateMember::new(self.email.clone()),
            self.time_zones.clone(),
        )
    }

    pub fn authorizer(&self) -> AuthorizeEvent {
        AuthorizeEvent::standard(self.users.clone(), self.clock.clone())
    }

    /// Wraps `base` in validation, then authorization.
    pub fn wrap<R: Repository<Event>>(self, base: R) -> GatedRepository<R> {
        let validated = ValidatingRepository::new(base, self.validator());
        AuthorizingRepository::new(validated, self.authorizer())
    }
}
