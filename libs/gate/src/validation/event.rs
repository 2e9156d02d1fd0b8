use std::collections::HashSet;
use std::sync::Arc;

use rsvp_domain::{roster, Clock, Event, Transition};
use tracing::debug;

use super::{TimeZoneValidator, Validate, ValidateMember};
use crate::assertions::Assertions;

/// Rules every persisted [`Event`] state must satisfy, plus a member-level
/// pass over the reconciled roster.
#[derive(Clone)]
pub struct ValidateEvent {
    clock: Arc<dyn Clock>,
    members: ValidateMember,
    time_zones: Arc<dyn TimeZoneValidator>,
}

impl ValidateEvent {
    pub fn new(
        clock: Arc<dyn Clock>,
        members: ValidateMember,
        time_zones: Arc<dyn TimeZoneValidator>,
    ) -> Self {
        Self {
            clock,
            members,
            time_zones,
        }
    }

    fn check_roster(&self, new: &Event, assert: &mut Assertions) {
        assert.record(!new.members.is_empty(), "Members list cannot be empty.");

        let ids: HashSet<_> = new.members.iter().map(|m| m.id).collect();
        assert.record(
            ids.len() == new.members.len(),
            "Each member in list must have a unique id.",
        );

        let emails: HashSet<String> = new
            .members
            .iter()
            .map(|m| m.email_address.to_lowercase())
            .collect();
        assert.record(
            emails.len() == new.members.len(),
            "Each member in list must have a unique email address.",
        );

        let authors = new.members.iter().filter(|m| m.is_author).count();
        assert.record(
            authors == 1,
            "Members list must contain exactly one author of the event.",
        );
    }

    fn check_rsvp(&self, new: &Event, assert: &mut Assertions) {
        if new.rsvp_open {
            assert.record(
                new.rsvp_closes_at.is_some(),
                "RsvpClosesAt must be set if Rsvp is open.",
            );
        } else {
            assert.record(
                new.rsvp_closes_at.is_none(),
                "RsvpClosesAt cannot be set if Rsvp is closed.",
            );
        }
    }

    fn check_publication(&self, old: Option<&Event>, new: &Event, assert: &mut Assertions) {
        if !new.is_published {
            return;
        }

        assert.record(
            new.starts_at.is_some(),
            "Event must have a start date and time.",
        );
        assert.record(new.ends_at.is_some(), "Event must have an end date and time.");
        if let (Some(starts_at), Some(ends_at)) = (new.starts_at, new.ends_at) {
            assert.record(starts_at < ends_at, "Start time must be before End time.");
        }

        // Once published, the start time is no longer required to be in the future.
        let was_published = old.is_some_and(|old| old.is_published);
        if !was_published {
            if let Some(starts_at) = new.starts_at {
                assert.record(
                    starts_at > self.clock.now(),
                    "Start time must be in the future.",
                );
            }
        }

        match new.time_zone_id.as_deref() {
            Some(time_zone_id) => {
                assert.record(
                    self.time_zones.is_valid(time_zone_id),
                    format!("Time Zone '{time_zone_id}' is not valid."),
                );
            }
            None => {
                assert.record(false, "Time Zone is required.");
            }
        }
    }
}

impl Validate<Event> for ValidateEvent {
    fn check(&self, transition: Transition<'_, Event>, assert: &mut Assertions) {
        let old = transition.before();
        let new = transition.after();

        match new {
            Some(new) => {
                self.check_roster(new, assert);
                assert.record(new.form.is_some(), "Form cannot be null.");
                self.check_rsvp(new, assert);
                self.check_publication(old, new, assert);
            }
            None => {
                assert.record(false, "Deleting an Event is not allowed.");
            }
        }

        let old_members = old.map(|e| e.members.as_slice()).unwrap_or_default();
        let new_members = new.map(|e| e.members.as_slice()).unwrap_or_default();
        for pair in roster::reconcile(old_members, new_members) {
            self.members.check(pair, assert);
        }

        debug!(
            operation = %transition.operation(),
            violations = !assert.is_empty(),
            "event state checked"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{KnownTimeZones, StandardEmailValidator};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rsvp_domain::{FixedClock, Member};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn validator() -> ValidateEvent {
        ValidateEvent::new(
            Arc::new(FixedClock(now())),
            ValidateMember::new(Arc::new(StandardEmailValidator)),
            Arc::new(KnownTimeZones),
        )
    }

    fn published_event() -> Event {
        let mut event = Event::draft(Member::author("skip@example.com", "Skip"));
        event.members.push(Member::attendee("fox@example.com", "Fox"));
        event.rsvp_open = true;
        event.rsvp_closes_at = Some(now() + Duration::days(5));
        event.starts_at = Some(now() + Duration::days(7));
        event.ends_at = Some(now() + Duration::days(7) + Duration::hours(3));
        event.time_zone_id = Some("America/Chicago".to_string());
        event.is_published = true;
        event
    }

    fn create(event: &Event) -> Result<(), crate::ValidationError> {
        validator().validate_state(Transition::Create { new: event })
    }

    fn update(old: &Event, new: &Event) -> Result<(), crate::ValidationError> {
        validator().validate_state(Transition::Update { old, new })
    }

    #[test]
    fn test_valid_published_event_passes() {
        assert!(create(&published_event()).is_ok());
    }

    #[test]
    fn test_valid_draft_passes() {
        let event = Event::draft(Member::author("skip@example.com", "Skip"));
        assert!(create(&event).is_ok());
    }

    #[rstest]
    #[case::empty_roster(|e: &mut Event| e.members.clear(), "Members list cannot be empty.")]
    #[case::no_form(|e: &mut Event| e.form = None, "Form cannot be null.")]
    #[case::open_without_deadline(
        |e: &mut Event| e.rsvp_closes_at = None,
        "RsvpClosesAt must be set if Rsvp is open."
    )]
    #[case::closed_with_deadline(
        |e: &mut Event| e.rsvp_open = false,
        "RsvpClosesAt cannot be set if Rsvp is closed."
    )]
    #[case::no_start(|e: &mut Event| e.starts_at = None, "Event must have a start date and time.")]
    #[case::no_end(|e: &mut Event| e.ends_at = None, "Event must have an end date and time.")]
    #[case::ends_before_start(
        |e: &mut Event| e.ends_at = e.starts_at.map(|s| s - Duration::hours(1)),
        "Start time must be before End time."
    )]
    #[case::starts_in_past(
        |e: &mut Event| {
            e.starts_at = Some(now() - Duration::days(1));
            e.ends_at = Some(now() + Duration::days(1));
        },
        "Start time must be in the future."
    )]
    #[case::no_time_zone(|e: &mut Event| e.time_zone_id = None, "Time Zone is required.")]
    #[case::bad_time_zone(
        |e: &mut Event| e.time_zone_id = Some("Mars/Olympus_Mons".to_string()),
        "Time Zone 'Mars/Olympus_Mons' is not valid."
    )]
    fn test_single_violation_is_reported(
        #[case] break_rule: fn(&mut Event),
        #[case] expected: &str,
    ) {
        let mut event = published_event();
        break_rule(&mut event);
        let err = create(&event).unwrap_err();
        assert_eq!(err.entity, "Event");
        assert!(err.contains(expected), "missing {expected:?} in {err:?}");
    }

    #[test]
    fn test_duplicate_email_ignoring_case_fails() {
        let mut event = published_event();
        event.members.push(Member::attendee("FOX@example.com", "Other Fox"));
        let err = create(&event).unwrap_err();
        assert_eq!(
            err.messages,
            vec!["Each member in list must have a unique email address."]
        );
    }

    #[test]
    fn test_duplicate_member_id_fails() {
        let mut event = published_event();
        let mut twin = Member::attendee("twin@example.com", "Twin");
        twin.id = event.members[1].id;
        event.members.push(twin);
        assert!(create(&event)
            .unwrap_err()
            .contains("Each member in list must have a unique id."));
    }

    #[rstest]
    #[case::no_author(0)]
    #[case::two_authors(2)]
    fn test_author_count_must_be_one(#[case] authors: usize) {
        let mut event = Event::draft(Member::attendee("fox@example.com", "Fox"));
        event.members.clear();
        for i in 0..authors {
            event
                .members
                .push(Member::author(format!("author{i}@example.com"), "Author"));
        }
        event.members.push(Member::attendee("fox@example.com", "Fox"));
        assert!(create(&event)
            .unwrap_err()
            .contains("Members list must contain exactly one author of the event."));
    }

    #[rstest]
    #[case(false, false)]
    #[case(true, true)]
    fn test_compliant_rsvp_combinations_pass(#[case] open: bool, #[case] has_deadline: bool) {
        let mut event = Event::draft(Member::author("skip@example.com", "Skip"));
        event.rsvp_open = open;
        event.rsvp_closes_at = has_deadline.then(|| now() + Duration::days(1));
        assert!(create(&event).is_ok());
    }

    #[test]
    fn test_every_violation_is_collected() {
        let mut event = published_event();
        event.form = None;
        event.time_zone_id = None;
        event.members.push(Member::attendee("fox@example.com", ""));
        let err = create(&event).unwrap_err();
        assert!(err.contains("Form cannot be null."));
        assert!(err.contains("Time Zone is required."));
        assert!(err.contains("Each member in list must have a unique email address."));
        assert!(err.contains("Member name cannot be empty."));
    }

    #[test]
    fn test_publishing_with_past_start_fails() {
        let mut old = published_event();
        old.is_published = false;
        let mut new = old.clone();
        new.is_published = true;
        new.starts_at = Some(now() - Duration::hours(1));
        assert!(update(&old, &new)
            .unwrap_err()
            .contains("Start time must be in the future."));
    }

    #[test]
    fn test_publishing_with_future_start_passes() {
        let mut old = published_event();
        old.is_published = false;
        let new = published_event();
        assert!(update(&old, &new).is_ok());
    }

    #[test]
    fn test_resaving_published_event_skips_future_start_check() {
        let mut old = published_event();
        old.starts_at = Some(now() - Duration::days(2));
        old.ends_at = Some(now() - Duration::days(1));
        let mut new = old.clone();
        new.location = "Community Hall".to_string();
        assert!(update(&old, &new).is_ok());
    }

    #[test]
    fn test_moving_published_start_into_past_is_allowed() {
        let old = published_event();
        let mut new = old.clone();
        new.starts_at = Some(now() - Duration::days(1));
        assert!(update(&old, &new).is_ok());
    }

    #[test]
    fn test_delete_is_always_rejected() {
        let err = validator()
            .validate_state(Transition::Delete {
                old: &published_event(),
            })
            .unwrap_err();
        assert!(err.contains("Deleting an Event is not allowed."));
    }

    #[test]
    fn test_member_rules_run_for_every_reconciled_pair() {
        let old = published_event();
        let mut new = old.clone();
        // Remove the author and insert a member with a bad address.
        new.members.retain(|m| !m.is_author);
        new.members.push(Member::attendee("wolf", "Wolf"));
        let err = update(&old, &new).unwrap_err();
        assert!(err.contains("The author cannot be removed from the event."));
        assert!(err.contains("Email address 'wolf' is not valid."));
        assert!(err.contains("Members list must contain exactly one author of the event."));
        assert_eq!(err.entity, "Event");
    }

    proptest! {
        #[test]
        fn prop_duplicate_email_fails_in_any_case(
            upper in proptest::collection::vec(any::<bool>(), 15),
        ) {
            let variant: String = "fox@example.com"
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            let mut event = published_event();
            event.members.push(Member::attendee(variant, "Twin"));
            let err = create(&event).unwrap_err();
            prop_assert!(err.contains("Each member in list must have a unique email address."));
        }
    }
}
