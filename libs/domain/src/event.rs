//! The event aggregate root.

use chrono::{DateTime, Utc};
use rsvp_id::{EventId, MemberId};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Versioned};
use crate::member::Member;

/// One question on the RSVP form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPrompt {
    pub id: String,
    pub prompt: String,
    /// How the prompt is answered, e.g. `text`, `checkboxes`, `dropdown`.
    pub behavior: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The RSVP form attendees fill in. Opaque to the gates beyond its presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub prompts: Vec<FormPrompt>,
}

/// An RSVP-style gathering and its roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Optimistic-concurrency version, owned by the repository.
    #[serde(default)]
    pub version: u64,
    pub members: Vec<Member>,
    #[serde(default)]
    pub form: Option<Form>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub other_details: String,
    #[serde(default)]
    pub rsvp_open: bool,
    #[serde(default)]
    pub rsvp_closes_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_zone_id: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl Event {
    /// Creates an unpublished event with RSVP closed, authored by `author`.
    pub fn draft(author: Member) -> Self {
        Self {
            id: EventId::new(),
            version: 0,
            members: vec![author],
            form: Some(Form::default()),
            name: String::new(),
            location: String::new(),
            other_details: String::new(),
            rsvp_open: false,
            rsvp_closes_at: None,
            starts_at: None,
            ends_at: None,
            time_zone_id: None,
            is_published: false,
        }
    }

    /// The first member flagged as author, if any.
    pub fn author(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_author)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// The member linked to `email_address`, compared case-insensitively.
    pub fn member_by_email(&self, email_address: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.has_email(email_address))
    }

    /// True once attendees can no longer RSVP or edit their answers.
    pub fn is_rsvp_closed(&self, now: DateTime<Utc>) -> bool {
        !self.rsvp_open || self.rsvp_closes_at.is_some_and(|closes| closes <= now)
    }

    /// Compares everything except the roster and the version.
    pub fn same_details(&self, other: &Event) -> bool {
        self.id == other.id
            && self.form == other.form
            && self.name == other.name
            && self.location == other.location
            && self.other_details == other.other_details
            && self.rsvp_open == other.rsvp_open
            && self.rsvp_closes_at == other.rsvp_closes_at
            && self.starts_at == other.starts_at
            && self.ends_at == other.ends_at
            && self.time_zone_id == other.time_zone_id
            && self.is_published == other.is_published
    }
}

impl Entity for Event {
    type Id = EventId;

    const TYPE_NAME: &'static str = "Event";

    fn id(&self) -> EventId {
        self.id
    }
}

impl Versioned for Event {
    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}
