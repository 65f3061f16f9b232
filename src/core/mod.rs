//! Core engine types: entities, RNG, configuration, actions, state, event log.
//!
//! These are the building blocks the deck engine is assembled from. The
//! card catalog lives in `cards`; the rules live in `rules`.

pub mod action;
pub mod config;
pub mod entity;
pub mod event_log;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::EngineConfig;
pub use entity::{EntityAllocator, EntityId};
pub use event_log::EventLog;
pub use rng::{GameRng, PermutationFn, Shuffler, Unshuffled};
pub use state::{GameState, Snapshot};
