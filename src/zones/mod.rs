//! Zone system for card locations.
//!
//! A session has four piles: deck, hand, play area, and discard. The market
//! is not a zone; it is a catalog of templates that never runs out.
//!
//! ## Key Types
//!
//! - `Zone`: Pile identifier
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{Zone, ZoneManager};
