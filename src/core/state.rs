//! Session state and read-only snapshots.
//!
//! ## GameState
//!
//! Everything a session owns:
//! - The four piles (via `ZoneManager`)
//! - Credits (spendable this turn) and points (persistent score)
//! - Turn counter and action history
//! - The player-facing event log
//!
//! ## Snapshot
//!
//! What the presentation layer reads: pile sizes for deck and discard, the
//! hand and play area in order, totals, and the log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::entity::{EntityAllocator, EntityId};
use super::event_log::EventLog;
use crate::cards::{CardId, CardInstance};
use crate::zones::{Zone, ZoneManager};

/// Complete session state.
///
/// Uses `im` persistent data structures so snapshots and clones are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Card locations.
    pub zones: ZoneManager,

    /// Credits available this turn. Reset to 0 at turn end.
    pub credits: u32,

    /// Score. Never decreases.
    pub points: u32,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Successful actions, oldest first.
    pub action_history: Vector<ActionRecord>,

    /// Player-facing messages, newest first.
    pub log: EventLog,

    entities: EntityAllocator,
}

impl GameState {
    /// Create an empty state with a log of the given capacity.
    ///
    /// A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(log_capacity: usize) -> Self {
        Self {
            zones: ZoneManager::new(),
            credits: 0,
            points: 0,
            turn_number: 1,
            action_sequence: 0,
            action_history: Vector::new(),
            log: EventLog::new(log_capacity.max(1)),
            entities: EntityAllocator::default(),
        }
    }

    // === Entity Management ===

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        self.entities.next_id()
    }

    /// Create a fresh copy of `card_id` and place it in `zone`.
    pub fn create_card(&mut self, card_id: CardId, zone: Zone) -> CardInstance {
        let card = CardInstance::new(self.alloc_entity(), card_id);
        self.zones.add_to_zone(card.clone(), zone);
        card
    }

    /// Number of card instances ever created in this session.
    #[must_use]
    pub fn instances_created(&self) -> usize {
        self.entities.allocated()
    }

    // === Turn Advancement ===

    /// Advance to next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    // === Views ===

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck_size: self.zones.zone_size(Zone::Deck),
            discard_size: self.zones.zone_size(Zone::Discard),
            hand: self.zones.cards_in_zone(Zone::Hand).clone(),
            play_area: self.zones.cards_in_zone(Zone::PlayArea).clone(),
            credits: self.credits,
            points: self.points,
            turn: self.turn_number,
            log: self.log.to_vec(),
        }
    }
}

/// Read-only session view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub deck_size: usize,
    pub discard_size: usize,
    /// Hand in draw order (most recent last).
    pub hand: Vector<CardInstance>,
    /// Play area in play order.
    pub play_area: Vector<CardInstance>,
    pub credits: u32,
    pub points: u32,
    pub turn: u32,
    /// Event log, newest first.
    pub log: Vec<String>,
}
