//! Engine configuration.
//!
//! `EngineConfig` holds the numbers that shape a session: how many starter
//! copies make up the opening deck, how many cards a turn draws, and how many
//! event log messages are kept. It can be built in code or deserialized
//! (missing fields fall back to the defaults).

use serde::{Deserialize, Serialize};

/// Default number of starter copies in the opening deck.
pub const DEFAULT_STARTER_COPIES: usize = 10;

/// Default cards drawn at game start and at each turn end.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Default number of event log messages retained.
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// Default first event log message.
pub const DEFAULT_WELCOME: &str = "Game Start! Build your AWS architecture.";

/// Session configuration.
///
/// ## Example
///
/// ```
/// use builder_cards::core::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_starter_copies(12)
///     .with_hand_size(6);
///
/// assert_eq!(config.starter_copies, 12);
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.log_capacity, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starter cards in the opening deck.
    pub starter_copies: usize,

    /// Cards drawn for the opening hand and at every turn end.
    pub hand_size: usize,

    /// Maximum event log length.
    pub log_capacity: usize,

    /// Message the event log starts with.
    pub welcome_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starter_copies: DEFAULT_STARTER_COPIES,
            hand_size: DEFAULT_HAND_SIZE,
            log_capacity: DEFAULT_LOG_CAPACITY,
            welcome_message: DEFAULT_WELCOME.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of starter copies.
    #[must_use]
    pub fn with_starter_copies(mut self, copies: usize) -> Self {
        self.starter_copies = copies;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the event log capacity.
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Event log must hold at least 1 message");
        self.log_capacity = capacity;
        self
    }

    /// Set the welcome message.
    #[must_use]
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.starter_copies, 10);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.log_capacity, 5);
        assert_eq!(config.welcome_message, "Game Start! Build your AWS architecture.");
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_starter_copies(3)
            .with_hand_size(2)
            .with_log_capacity(8)
            .with_welcome_message("hello");

        assert_eq!(config.starter_copies, 3);
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.log_capacity, 8);
        assert_eq!(config.welcome_message, "hello");
    }

    #[test]
    #[should_panic(expected = "at least 1 message")]
    fn test_zero_log_capacity() {
        let _ = EngineConfig::new().with_log_capacity(0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "hand_size": 7 }"#).unwrap();

        assert_eq!(config.hand_size, 7);
        assert_eq!(config.starter_copies, DEFAULT_STARTER_COPIES);
        assert_eq!(config.log_capacity, DEFAULT_LOG_CAPACITY);
    }
}
