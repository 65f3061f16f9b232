//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the four piles of a session and is the only
//! place card instances move between them. It supports:
//! - Ordered piles with top-of-deck at the end of the sequence
//! - Moving by position (hand to play area)
//! - Whole-pile transfers (discard to deck, hand and play area to discard)
//! - Shuffling through an injected `Shuffler`
//!
//! Every instance lives in exactly one zone, so the sum of zone sizes only
//! changes when a new instance is added.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};
use crate::core::rng::Shuffler;

/// The four piles of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile. The last card is the top.
    Deck,
    /// Cards available to play this turn.
    Hand,
    /// Cards played this turn.
    PlayArea,
    /// Spent and bought cards, reshuffled into the deck when it runs out.
    Discard,
}

impl Zone {
    /// All zones, in index order.
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::PlayArea, Zone::Discard];

    const fn index(self) -> usize {
        match self {
            Zone::Deck => 0,
            Zone::Hand => 1,
            Zone::PlayArea => 2,
            Zone::Discard => 3,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::PlayArea => "play area",
            Zone::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// Manages card locations across the four piles.
///
/// Piles are persistent vectors, so cloning the manager (or any pile) for a
/// snapshot is O(1).
///
/// ## Usage
///
/// ```
/// use builder_cards::cards::{CardId, CardInstance};
/// use builder_cards::core::EntityId;
/// use builder_cards::zones::{Zone, ZoneManager};
///
/// let mut zones = ZoneManager::new();
///
/// zones.add_to_zone(CardInstance::new(EntityId(0), CardId::new("starter")), Zone::Deck);
/// zones.add_to_zone(CardInstance::new(EntityId(1), CardId::new("starter")), Zone::Deck);
///
/// // Top of the deck is the most recently added card
/// let drawn = zones.pop_top(Zone::Deck).unwrap();
/// assert_eq!(drawn.entity_id, EntityId(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    piles: [Vector<CardInstance>; 4],
}

impl ZoneManager {
    /// Create an empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn pile(&self, zone: Zone) -> &Vector<CardInstance> {
        &self.piles[zone.index()]
    }

    fn pile_mut(&mut self, zone: Zone) -> &mut Vector<CardInstance> {
        &mut self.piles[zone.index()]
    }

    /// Add a card to the top of a zone.
    ///
    /// Panics if the instance is already tracked.
    pub fn add_to_zone(&mut self, card: CardInstance, zone: Zone) {
        if self.contains(&card) {
            panic!("Entity {} already exists in zone manager", card.entity_id);
        }

        self.pile_mut(zone).push_back(card);
    }

    /// Remove the card at `index` of `from` and put it on top of `to`.
    ///
    /// Returns the moved card, or `None` if `index` is out of range.
    pub fn move_at(&mut self, from: Zone, index: usize, to: Zone) -> Option<CardInstance> {
        if index >= self.zone_size(from) {
            return None;
        }

        let card = self.pile_mut(from).remove(index);
        trace!(target: "zones", "{} {} -> {}", card.entity_id, from, to);

        self.pile_mut(to).push_back(card.clone());
        Some(card)
    }

    /// Move every card of `from` onto the top of `to`, keeping their order.
    ///
    /// Returns the number of cards moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        if from == to {
            return 0;
        }

        let moved = std::mem::take(self.pile_mut(from));
        let count = moved.len();
        self.pile_mut(to).append(moved);

        if count > 0 {
            trace!(target: "zones", "moved {} cards {} -> {}", count, from, to);
        }
        count
    }

    /// Remove and return the top card of a zone.
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardInstance> {
        self.pile_mut(zone).pop_back()
    }

    /// Shuffle a zone.
    pub fn shuffle_zone<S: Shuffler>(&mut self, zone: Zone, shuffler: &mut S) {
        debug!(target: "zones", "shuffling {} ({} cards)", zone, self.zone_size(zone));
        shuffler.shuffle(self.pile_mut(zone));
    }

    /// Cards in a zone, bottom to top.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &Vector<CardInstance> {
        self.pile(zone)
    }

    /// Card at `index` of a zone.
    #[must_use]
    pub fn get(&self, zone: Zone, index: usize) -> Option<&CardInstance> {
        self.pile(zone).get(index)
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.pile(zone).len()
    }

    /// Is a copy of `card` in the zone?
    #[must_use]
    pub fn zone_has_card(&self, zone: Zone, card: &CardId) -> bool {
        self.pile(zone).iter().any(|c| c.is(card))
    }

    /// Get the zone an instance is in.
    #[must_use]
    pub fn find(&self, card: &CardInstance) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.pile(zone).iter().any(|c| c.entity_id == card.entity_id))
    }

    /// Check if the manager tracks an instance.
    #[must_use]
    pub fn contains(&self, card: &CardInstance) -> bool {
        self.find(card).is_some()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Vector::len).sum()
    }
}
