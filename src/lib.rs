//! # builder-cards
//!
//! Deck/turn engine for a single-player cloud architecture deckbuilder.
//!
//! Draw a hand, play cards for credits, spend credits on new cards or on
//! points, then cycle everything into the discard pile and draw again.
//!
//! ## Design Principles
//!
//! 1. **One owner**: A session is a single `DeckEngine` value. The
//!    presentation layer reads `Snapshot`s and dispatches actions.
//!
//! 2. **Data-driven cards**: Card synergies are declared on the card
//!    definition (`condition` + `bonus_draw`) and interpreted generically.
//!
//! 3. **Injectable randomness**: Every shuffle goes through a `Shuffler`,
//!    so tests can fix the deck order.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, RNG, configuration, actions, state, event log
//! - `zones`: Deck, hand, play area, and discard piles
//! - `cards`: Card definitions, instances, registry, and market catalog
//! - `rules`: The deck/turn engine
//! - `games`: The shipped cloud game
//! - `error`: Engine and catalog errors

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineConfig, EntityId, EventLog, GameRng, GameState, PermutationFn,
    Shuffler, Snapshot, Unshuffled,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry, MarketCatalog};

pub use crate::rules::{ActionOutcome, DeckEngine, DrawnCards, Played, Purchase};

pub use crate::error::{CatalogError, EngineError};
