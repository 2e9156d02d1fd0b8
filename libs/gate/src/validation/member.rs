use std::sync::Arc;

use rsvp_domain::{Member, Transition};

use super::{EmailValidator, Validate};
use crate::assertions::Assertions;

/// Rules for one member's insertion, removal or edit.
#[derive(Clone)]
pub struct ValidateMember {
    email: Arc<dyn EmailValidator>,
}

impl ValidateMember {
    pub fn new(email: Arc<dyn EmailValidator>) -> Self {
        Self { email }
    }
}

impl Validate<Member> for ValidateMember {
    fn check(&self, transition: Transition<'_, Member>, assert: &mut Assertions) {
        if let Some(new) = transition.after() {
            assert.record(
                self.email.is_valid(&new.email_address),
                format!("Email address '{}' is not valid.", new.email_address),
            );
            assert.record(!new.name.trim().is_empty(), "Member name cannot be empty.");
        }

        match transition {
            Transition::Update { old, new } => {
                assert.record(
                    old.is_author == new.is_author,
                    "A member's author status cannot be changed.",
                );
            }
            Transition::Delete { old } => {
                assert.record(!old.is_author, "The author cannot be removed from the event.");
            }
            Transition::Create { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::StandardEmailValidator;

    fn validator() -> ValidateMember {
        ValidateMember::new(Arc::new(StandardEmailValidator))
    }

    #[test]
    fn test_valid_insert() {
        let member = Member::attendee("fox@example.com", "Fox");
        assert!(validator()
            .validate_state(Transition::Create { new: &member })
            .is_ok());
    }

    #[test]
    fn test_invalid_email_and_blank_name_both_reported() {
        let member = Member::attendee("fox", "  ");
        let err = validator()
            .validate_state(Transition::Create { new: &member })
            .unwrap_err();
        assert_eq!(err.entity, "Member");
        assert_eq!(err.messages.len(), 2);
        assert!(err.contains("Member name cannot be empty."));
    }

    #[test]
    fn test_author_flag_is_immutable() {
        let old = Member::attendee("fox@example.com", "Fox");
        let mut new = old.clone();
        new.is_author = true;
        let err = validator()
            .validate_state(Transition::Update {
                old: &old,
                new: &new,
            })
            .unwrap_err();
        assert!(err.contains("A member's author status cannot be changed."));
    }

    #[test]
    fn test_author_cannot_be_removed() {
        let author = Member::author("skip@example.com", "Skip");
        let err = validator()
            .validate_state(Transition::Delete { old: &author })
            .unwrap_err();
        assert!(err.contains("The author cannot be removed from the event."));
    }

    #[test]
    fn test_attendee_can_be_removed() {
        let fox = Member::attendee("fox@example.com", "Fox");
        assert!(validator()
            .validate_state(Transition::Delete { old: &fox })
            .is_ok());
    }
}
