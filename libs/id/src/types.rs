//! Id types for the event aggregate.

use crate::define_id;

define_id!(
    /// Identifies an event (the aggregate root).
    EventId,
    "evt"
);

define_id!(
    /// Identifies a member on an event's roster. Stable across edits.
    MemberId,
    "mbr"
);
