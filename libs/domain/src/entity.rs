//! Traits shared by everything the repositories store.

use std::fmt::{Debug, Display};

/// A value with a stable identity and a type name used in error reports.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Copy + Ord + Display + Debug + Send + Sync + 'static;

    /// Name reported in validation and authorization failures.
    const TYPE_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

/// An entity that carries an optimistic-concurrency version.
///
/// The version is owned by the repository: callers echo back the version they
/// loaded, and the store bumps it on every successful save.
pub trait Versioned: Entity {
    fn version(&self) -> u64;

    fn set_version(&mut self, version: u64);
}
