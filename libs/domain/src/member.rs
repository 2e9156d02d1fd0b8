//! Roster members.

use rsvp_id::MemberId;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// An answer to one prompt of the event's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub prompt_id: String,
    #[serde(default)]
    pub responses: Vec<String>,
}

/// A person on an event's roster.
///
/// A member is linked to a signed-in [`User`](crate::User) by email address,
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub email_address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_author: bool,
    #[serde(default)]
    pub is_organizer: bool,
    #[serde(default)]
    pub is_attending: bool,
    #[serde(default)]
    pub responses: Vec<FormResponse>,
}

impl Member {
    /// Creates an attending member with no other roles.
    pub fn attendee(email_address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            email_address: email_address.into(),
            name: name.into(),
            is_author: false,
            is_organizer: false,
            is_attending: true,
            responses: Vec::new(),
        }
    }

    /// Creates the event's author. Authors also organize and attend.
    pub fn author(email_address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_author: true,
            is_organizer: true,
            ..Self::attendee(email_address, name)
        }
    }

    /// Returns true if this member's email matches, ignoring case.
    pub fn has_email(&self, email_address: &str) -> bool {
        self.email_address.to_lowercase() == email_address.to_lowercase()
    }
}

impl Entity for Member {
    type Id = MemberId;

    const TYPE_NAME: &'static str = "Member";

    fn id(&self) -> MemberId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_email_ignores_case() {
        let member = Member::attendee("Fox@Example.com", "Fox");
        assert!(member.has_email("fox@example.com"));
        assert!(member.has_email("FOX@EXAMPLE.COM"));
        assert!(!member.has_email("wolf@example.com"));
    }

    #[test]
    fn test_author_constructor_sets_all_roles() {
        let member = Member::author("skip@example.com", "Skip");
        assert!(member.is_author && member.is_organizer && member.is_attending);
    }

    #[test]
    fn test_member_defaults_when_deserializing() {
        let json = format!(
            r#"{{"id":"{}","email_address":"a@example.com"}}"#,
            MemberId::new()
        );
        let member: Member = serde_json::from_str(&json).unwrap();
        assert!(!member.is_author);
        assert!(member.name.is_empty());
        assert!(member.responses.is_empty());
    }
}
