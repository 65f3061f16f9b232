//! Player-facing event log.
//!
//! A bounded list of the most recent messages, newest first. This is the
//! text the presentation layer shows; diagnostics go through the `log`
//! crate instead.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Bounded, newest-first message log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl EventLog {
    /// Create an empty log holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Event log must hold at least 1 message");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a message as the newest entry, dropping the oldest past capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_front(message.into());
        self.entries.truncate(self.capacity);
    }

    /// Newest message.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Messages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Copy of the messages, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = EventLog::new(5);
        log.push("first");
        log.push("second");

        assert_eq!(log.latest(), Some("second"));
        assert_eq!(log.to_vec(), vec!["second", "first"]);
    }

    #[test]
    fn test_bounded() {
        let mut log = EventLog::new(3);
        for i in 0..10 {
            log.push(format!("msg {}", i));
        }

        assert_eq!(log.len(), 3);
        let entries: Vec<_> = log.iter().collect();
        assert_eq!(entries, vec!["msg 9", "msg 8", "msg 7"]);
    }

    #[test]
    fn test_empty() {
        let log = EventLog::new(5);
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
        assert_eq!(log.capacity(), 5);
    }
}
