//! Game rules: the deck/turn engine and its operation outcomes.

pub mod engine;

pub use engine::{ActionOutcome, DeckEngine, DrawnCards, Played, Purchase};
