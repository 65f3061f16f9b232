//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! For example, "Amazon RDS" costs 5 and grants 2 credits when played -
//! these are part of the definition.
//!
//! Which pile a physical copy sits in is tracked separately via
//! `CardInstance` and the zone manager.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., `"ec2"`),
/// not a specific copy in a game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_bonus_draw() -> u32 {
    1
}

/// Static card definition.
///
/// A card either produces credits when played (`credit`) or is a scoring
/// card that awards `points` when bought. Scoring cards never enter a pile.
///
/// `condition` names another card; if a copy of it is already in the play
/// area when this card is played, `bonus_draw` extra cards are drawn.
///
/// ## Example
///
/// ```
/// use builder_cards::cards::{CardDefinition, CardId};
///
/// let asg = CardDefinition::service("asg", "EC2 Auto Scaling", "Compute", 3, 1)
///     .with_effect("Draw +1 card")
///     .with_condition("ec2", 1);
///
/// assert_eq!(asg.synergy(), Some((&CardId::new("ec2"), 1)));
/// assert!(!asg.is_scoring());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    /// Credits required to buy.
    #[serde(default)]
    pub cost: u32,

    /// Credits granted when played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<u32>,

    /// Points granted when bought. Marks a scoring card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,

    /// Display category.
    #[serde(rename = "type", default)]
    pub card_type: String,

    /// Human-readable effect text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,

    /// Card that must already be in the play area to trigger the bonus draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<CardId>,

    /// Extra cards drawn when `condition` is met.
    #[serde(default = "default_bonus_draw")]
    pub bonus_draw: u32,
}

impl CardDefinition {
    /// Create a card that grants `credit` when played.
    #[must_use]
    pub fn service(
        id: impl Into<CardId>,
        name: impl Into<String>,
        card_type: impl Into<String>,
        cost: u32,
        credit: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            credit: Some(credit),
            points: None,
            card_type: card_type.into(),
            effect: None,
            condition: None,
            bonus_draw: default_bonus_draw(),
        }
    }

    /// Create a scoring card worth `points`.
    #[must_use]
    pub fn scoring(
        id: impl Into<CardId>,
        name: impl Into<String>,
        card_type: impl Into<String>,
        cost: u32,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            credit: None,
            points: Some(points),
            card_type: card_type.into(),
            effect: None,
            condition: None,
            bonus_draw: default_bonus_draw(),
        }
    }

    /// Set the effect text.
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Require `card` in the play area for a bonus draw of `bonus_draw`.
    #[must_use]
    pub fn with_condition(mut self, card: impl Into<CardId>, bonus_draw: u32) -> Self {
        self.condition = Some(card.into());
        self.bonus_draw = bonus_draw;
        self
    }

    /// Credits granted when played (0 if none).
    #[must_use]
    pub fn credit(&self) -> u32 {
        self.credit.unwrap_or(0)
    }

    /// Is this a scoring card?
    #[must_use]
    pub fn is_scoring(&self) -> bool {
        self.points.is_some()
    }

    /// The prerequisite card and bonus draw count, if any.
    #[must_use]
    pub fn synergy(&self) -> Option<(&CardId, u32)> {
        self.condition.as_ref().map(|c| (c, self.bonus_draw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("ec2");
        assert_eq!(id.as_str(), "ec2");
        assert_eq!(format!("{}", id), "ec2");
        assert_eq!(CardId::from("ec2"), id);
    }

    #[test]
    fn test_service_card() {
        let card = CardDefinition::service("lambda", "AWS Lambda", "Serverless", 4, 2);

        assert_eq!(card.id, CardId::new("lambda"));
        assert_eq!(card.cost, 4);
        assert_eq!(card.credit(), 2);
        assert!(!card.is_scoring());
        assert!(card.synergy().is_none());
    }

    #[test]
    fn test_scoring_card() {
        let card = CardDefinition::scoring("wa1", "Well-Architected (Small)", "Well-Architected", 3, 1);

        assert!(card.is_scoring());
        assert_eq!(card.points, Some(1));
        assert_eq!(card.credit(), 0);
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{
            "id": "asg",
            "name": "EC2 Auto Scaling",
            "cost": 3,
            "credit": 1,
            "type": "Compute",
            "effect": "Draw +1 card",
            "condition": "ec2"
        }"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.card_type, "Compute");
        assert_eq!(card.synergy(), Some((&CardId::new("ec2"), 1)));
        assert_eq!(card.effect.as_deref(), Some("Draw +1 card"));
    }

    #[test]
    fn test_missing_credit_is_zero() {
        let card: CardDefinition =
            serde_json::from_str(r#"{ "id": "x", "name": "X", "cost": 1 }"#).unwrap();

        assert_eq!(card.credit, None);
        assert_eq!(card.credit(), 0);
        assert_eq!(card.card_type, "");
    }
}
