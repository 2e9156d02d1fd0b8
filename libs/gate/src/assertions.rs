//! Accumulate-then-raise rule checking.

use tracing::debug;

use crate::error::ValidationError;

/// Collects rule violations for one validation pass.
///
/// Each [`record`](Self::record) keeps going after a failure, so a single
/// pass reports every broken rule. Nested validators share the collector by
/// `&mut`; a new one is created per pass.
#[derive(Debug)]
pub struct Assertions {
    entity: &'static str,
    messages: Vec<String>,
}

impl Assertions {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            messages: Vec::new(),
        }
    }

    /// Records `message` if `condition` is false. Returns `condition`.
    pub fn record(&mut self, condition: bool, message: impl Into<String>) -> bool {
        if !condition {
            let message = message.into();
            debug!(entity = self.entity, %message, "rule violated");
            self.messages.push(message);
        }
        condition
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Fails with every recorded message, or succeeds if none were recorded.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            entity: self.entity,
            messages: self.messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_assertions_finish_ok() {
        let mut assert = Assertions::new("Event");
        assert!(assert.record(true, "never shown"));
        assert!(assert.is_empty());
        assert!(assert.finish().is_ok());
    }

    #[test]
    fn test_failures_accumulate_without_short_circuit() {
        let mut assert = Assertions::new("Event");
        assert!(!assert.record(false, "first"));
        assert.record(true, "skipped");
        assert.record(false, "second");

        let err = assert.finish().unwrap_err();
        assert_eq!(err.entity, "Event");
        assert_eq!(err.messages, vec!["first", "second"]);
    }
}
