//! Market catalog: the fixed set of cards a session can start with or buy.
//!
//! The catalog is configuration. It names one starter card (the opening
//! deck is made of copies of it), the service cards for sale, and the
//! scoring cards for sale. Supply is unlimited; buying only gates on credits.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "starter": { "id": "starter", "name": "Starter Card", "cost": 0, "credit": 1, "type": "Starter" },
//!   "services": [ { "id": "ec2", "name": "Amazon EC2", "cost": 0, "credit": 1, "type": "Compute" } ],
//!   "scoring": [ { "id": "wa1", "name": "Well-Architected (Small)", "cost": 3, "points": 1 } ]
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use super::registry::CardRegistry;
use crate::error::CatalogError;

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    starter: CardDefinition,
    #[serde(default)]
    services: Vec<CardDefinition>,
    #[serde(default)]
    scoring: Vec<CardDefinition>,
}

/// Validated set of card definitions with market sections.
///
/// ## Example
///
/// ```
/// use builder_cards::cards::{CardDefinition, CardId, MarketCatalog};
///
/// let catalog = MarketCatalog::new(
///     CardDefinition::service("starter", "Starter Card", "Starter", 0, 1),
///     vec![CardDefinition::service("ec2", "Amazon EC2", "Compute", 0, 1)],
///     vec![CardDefinition::scoring("wa1", "Well-Architected (Small)", "Well-Architected", 3, 1)],
/// )
/// .unwrap();
///
/// assert!(catalog.offers(&CardId::new("ec2")));
/// assert!(!catalog.offers(&CardId::new("starter")));
/// ```
#[derive(Clone, Debug)]
pub struct MarketCatalog {
    registry: CardRegistry,
    starter: CardDefinition,
    services: Vec<CardId>,
    scoring: Vec<CardId>,
}

impl MarketCatalog {
    /// Build and validate a catalog.
    pub fn new(
        starter: CardDefinition,
        services: impl IntoIterator<Item = CardDefinition>,
        scoring: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut registry = CardRegistry::new();

        check_card(&starter)?;
        if starter.is_scoring() {
            return Err(CatalogError::ScoringStarter(starter.id));
        }
        registry.register(starter.clone())?;

        let mut service_ids = Vec::new();
        for card in services {
            check_card(&card)?;
            if card.is_scoring() {
                return Err(CatalogError::WrongSection(card.id));
            }
            service_ids.push(card.id.clone());
            registry.register(card)?;
        }

        let mut scoring_ids = Vec::new();
        for card in scoring {
            check_card(&card)?;
            if !card.is_scoring() {
                return Err(CatalogError::WrongSection(card.id));
            }
            scoring_ids.push(card.id.clone());
            registry.register(card)?;
        }

        // Conditions may point at any card, including ones listed later.
        for card in registry.iter() {
            if let Some(condition) = &card.condition {
                if !registry.contains(condition) {
                    return Err(CatalogError::UnknownCondition {
                        card: card.id.clone(),
                        condition: condition.clone(),
                    });
                }
            }
        }

        debug!(
            target: "catalog",
            "Catalog ready: starter {}, {} services, {} scoring cards",
            starter.id,
            service_ids.len(),
            scoring_ids.len()
        );

        Ok(Self {
            registry,
            starter,
            services: service_ids,
            scoring: scoring_ids,
        })
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.starter, file.services, file.scoring)
    }

    /// Serialize the catalog back to JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            starter: self.starter().clone(),
            services: self.services().cloned().collect(),
            scoring: self.scoring().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Look up any card in the catalog, including the starter.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.registry.get(id)
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The card the opening deck is built from.
    #[must_use]
    pub fn starter(&self) -> &CardDefinition {
        &self.starter
    }

    /// Service cards for sale, in catalog order.
    pub fn services(&self) -> impl Iterator<Item = &CardDefinition> {
        self.services.iter().filter_map(move |id| self.registry.get(id))
    }

    /// Scoring cards for sale, in catalog order.
    pub fn scoring(&self) -> impl Iterator<Item = &CardDefinition> {
        self.scoring.iter().filter_map(move |id| self.registry.get(id))
    }

    /// Everything for sale: services, then scoring cards.
    pub fn market(&self) -> impl Iterator<Item = &CardDefinition> {
        self.services().chain(self.scoring())
    }

    /// Is this card for sale?
    #[must_use]
    pub fn offers(&self, id: &CardId) -> bool {
        self.services.contains(id) || self.scoring.contains(id)
    }

    /// Market cards whose cost is within `credits`.
    pub fn affordable(&self, credits: u32) -> impl Iterator<Item = &CardDefinition> {
        self.market().filter(move |c| c.cost <= credits)
    }
}

fn check_card(card: &CardDefinition) -> Result<(), CatalogError> {
    if card.credit.is_some() && card.points.is_some() {
        return Err(CatalogError::CreditAndPoints(card.id.clone()));
    }
    if card.points == Some(0) {
        return Err(CatalogError::ZeroPoints(card.id.clone()));
    }
    if card.condition.is_some() && card.bonus_draw == 0 {
        return Err(CatalogError::ZeroBonusDraw { card: card.id.clone() });
    }
    Ok(())
}
