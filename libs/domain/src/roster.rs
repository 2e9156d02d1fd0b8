//! Reconciling an old roster with a new one.
//!
//! Members keep their id across edits, so two rosters are paired by id as a
//! full outer join:
//!
//! - id only in the old roster: the member was removed
//! - id only in the new roster: the member was inserted
//! - id in both: the member was (possibly) edited
//!
//! Every id in either roster yields exactly one [`Transition`].

use std::collections::{BTreeMap, BTreeSet};

use rsvp_id::MemberId;

use crate::member::Member;
use crate::transition::Transition;

/// Pairs `old` and `new` members by id, ordered by id.
///
/// If a roster repeats an id, the last occurrence wins; duplicate ids are
/// reported separately by the event validator.
pub fn reconcile<'a>(old: &'a [Member], new: &'a [Member]) -> Vec<Transition<'a, Member>> {
    let old_by_id = index(old);
    let new_by_id = index(new);

    let ids: BTreeSet<MemberId> = old_by_id.keys().chain(new_by_id.keys()).copied().collect();

    ids.into_iter()
        .filter_map(|id| {
            // Each id came from at least one side.
            Transition::between(old_by_id.get(&id).copied(), new_by_id.get(&id).copied()).ok()
        })
        .collect()
}

/// Returns true if no member other than `except` was inserted, removed or edited.
pub fn only_touches(old: &[Member], new: &[Member], except: MemberId) -> bool {
    reconcile(old, new).into_iter().all(|pair| match pair {
        Transition::Update {
            old: before,
            new: after,
        } => before.id == except || before == after,
        Transition::Create { new: member } | Transition::Delete { old: member } => {
            member.id == except
        }
    })
}

fn index(members: &[Member]) -> BTreeMap<MemberId, &Member> {
    members.iter().map(|m| (m.id, m)).collect()
}
