//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a session knows about.
//! It provides fast lookup by `CardId` and keeps registration order for
//! iteration.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::CatalogError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use builder_cards::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
///
/// registry
///     .register(CardDefinition::service("ec2", "Amazon EC2", "Compute", 0, 1))
///     .unwrap();
///
/// let found = registry.get(&CardId::new("ec2")).unwrap();
/// assert_eq!(found.name, "Amazon EC2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        self.order.push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();

        let card = CardDefinition::service("s3", "Amazon S3", "Storage", 0, 1);
        registry.register(card).unwrap();

        let found = registry.get(&CardId::new("s3"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Amazon S3");

        assert!(registry.get(&CardId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();

        let card1 = CardDefinition::service("ec2", "Card A", "Compute", 0, 1);
        let card2 = CardDefinition::service("ec2", "Card B", "Compute", 1, 1);

        registry.register(card1).unwrap();
        let err = registry.register(card2).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == CardId::new("ec2")));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&CardId::new("ec2")).unwrap().name, "Card A");
    }

    #[test]
    fn test_iteration_order() {
        let mut registry = CardRegistry::new();

        registry.register(CardDefinition::service("b", "B", "X", 0, 1)).unwrap();
        registry.register(CardDefinition::service("a", "A", "X", 0, 1)).unwrap();
        registry.register(CardDefinition::scoring("c", "C", "X", 3, 1)).unwrap();

        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_contains() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        registry.register(CardDefinition::service("x", "Test", "X", 0, 1)).unwrap();

        assert!(registry.contains(&CardId::new("x")));
        assert!(!registry.contains(&CardId::new("y")));
    }
}
