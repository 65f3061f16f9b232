//! Card instances - one physical copy of a card.
//!
//! A starter deck of 10 holds 10 `CardInstance`s sharing one `CardId`
//! but each carrying its own `EntityId`. Instances are immutable; moving
//! between piles is the zone manager's job.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::entity::EntityId;

/// A single card copy in a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this copy.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(entity_id: EntityId, card_id: CardId) -> Self {
        Self { entity_id, card_id }
    }

    /// Is this a copy of `card`?
    #[must_use]
    pub fn is(&self, card: &CardId) -> bool {
        &self.card_id == card
    }
}
