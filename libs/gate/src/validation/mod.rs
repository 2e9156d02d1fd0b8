//! State validation: is the proposed state internally consistent?

mod email;
mod event;
mod member;
mod time_zone;

pub use email::{EmailValidator, StandardEmailValidator};
pub use event::ValidateEvent;
pub use member::ValidateMember;
pub use time_zone::{KnownTimeZones, TimeZoneValidator};

use rsvp_domain::{Entity, Transition};

use crate::assertions::Assertions;
use crate::error::ValidationError;

/// Validates transitions of one entity type.
pub trait Validate<T: Entity>: Send + Sync {
    /// Records every rule `transition` breaks into `assert`.
    fn check(&self, transition: Transition<'_, T>, assert: &mut Assertions);

    /// Runs a full pass with a fresh collector.
    fn validate_state(&self, transition: Transition<'_, T>) -> Result<(), ValidationError> {
        let mut assert = Assertions::new(T::TYPE_NAME);
        self.check(transition, &mut assert);
        assert.finish()
    }
}
