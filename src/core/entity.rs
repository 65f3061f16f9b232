//! Card instance identification.
//!
//! Every physical card in a session (each starter copy, each purchased
//! service card) gets its own `EntityId`. Two instances of the same card
//! definition share a `CardId` but never an `EntityId`.
//!
//! ## Usage
//!
//! ```
//! use builder_cards::core::EntityId;
//!
//! let mut ids = EntityId::allocator();
//! let first = ids.next_id();
//! let second = ids.next_id();
//!
//! assert_ne!(first, second);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a single card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new allocator starting at zero.
    #[must_use]
    pub const fn allocator() -> EntityAllocator {
        EntityAllocator { next: 0 }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic `EntityId` source.
///
/// The number of ids handed out equals the number of card instances ever
/// created in the session, which is what the zone conservation check
/// compares against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Hand out the next unused id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids allocated so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}
