//! # rsvp-id
//!
//! Typed identifiers for the RSVP event aggregate.
//!
//! Every id is a ULID wrapped in a newtype and rendered as `{prefix}_{ulid}`:
//!
//! - `evt_01HV4Z2WQXKJNM8GPQY6VBKC3D` for an [`EventId`]
//! - `mbr_01HV4Z3MXNKPQR9HSTZ7WCLD4E` for a [`MemberId`]
//!
//! The prefix keeps an event id from being accepted where a member id is
//! expected, both in Rust and on the wire.

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;

/// Splits `{prefix}_{ulid}` and checks the prefix.
///
/// Shared by every id type generated with [`define_id!`].
pub fn parse_prefixed(expected: &'static str, s: &str) -> Result<Ulid, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }

    let Some((prefix, ulid_str)) = s.split_once('_') else {
        return Err(IdError::MissingSeparator);
    };

    if prefix != expected {
        return Err(IdError::InvalidPrefix {
            expected,
            actual: prefix.to_string(),
        });
    }

    ulid_str
        .parse::<Ulid>()
        .map_err(|e| IdError::InvalidUlid(e.to_string()))
}
