//! Player actions.
//!
//! The presentation layer drives a session by dispatching `Action`s. Each
//! successful action is kept in the state's history as an `ActionRecord`
//! so a game can be replayed against the same shuffle sequence.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use builder_cards::core::Action;
/// use builder_cards::cards::CardId;
///
/// let play = Action::Play { hand_index: 0 };
/// let buy = Action::Buy { card: CardId::new("lambda") };
///
/// assert!(play.is_play());
/// assert!(!buy.is_play());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Draw cards into the hand.
    Draw { count: usize },
    /// Play the card at this hand position.
    Play { hand_index: usize },
    /// Buy a market card.
    Buy { card: CardId },
    /// Discard everything and draw a new hand.
    EndTurn,
}

impl Action {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play { .. })
    }

    #[must_use]
    pub fn is_buy(&self) -> bool {
        matches!(self, Action::Buy { .. })
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kinds() {
        assert!(Action::Play { hand_index: 2 }.is_play());
        assert!(Action::Buy { card: CardId::new("s3") }.is_buy());
        assert!(!Action::EndTurn.is_play());
        assert!(!Action::Draw { count: 1 }.is_buy());
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&Action::Buy { card: CardId::new("wa1") }).unwrap();
        assert_eq!(json, r#"{"action":"buy","card":"wa1"}"#);

        let json = serde_json::to_string(&Action::EndTurn).unwrap();
        assert_eq!(json, r#"{"action":"end_turn"}"#);

        let parsed: Action = serde_json::from_str(r#"{"action":"play","hand_index":3}"#).unwrap();
        assert_eq!(parsed, Action::Play { hand_index: 3 });
    }

    #[test]
    fn test_action_record() {
        let action = Action::Play { hand_index: 1 };
        let record = ActionRecord::new(action.clone(), 3, 5);

        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::Draw { count: 2 }, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
