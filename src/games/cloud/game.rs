//! Cloud game setup.

use log::debug;

use crate::cards::MarketCatalog;
use crate::core::{EngineConfig, GameRng, Shuffler};
use crate::rules::DeckEngine;

/// The shipped card data.
pub const CATALOG_JSON: &str = include_str!("catalog.json");

/// The shipped market catalog.
///
/// Panics only if `catalog.json` is broken, which the tests rule out.
#[must_use]
pub fn catalog() -> MarketCatalog {
    MarketCatalog::from_json(CATALOG_JSON).expect("built-in catalog must be valid")
}

/// Builder for a cloud game session.
///
/// ## Example
///
/// ```
/// use builder_cards::games::cloud::CloudGameBuilder;
///
/// let engine = CloudGameBuilder::new().seed(7).build();
/// let snap = engine.snapshot();
///
/// assert_eq!(snap.hand.len(), 5);
/// assert_eq!(snap.deck_size, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CloudGameBuilder {
    config: EngineConfig,
    seed: Option<u64>,
    catalog: Option<MarketCatalog>,
}

impl CloudGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starter_copies(mut self, copies: usize) -> Self {
        self.config.starter_copies = copies;
        self
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    #[must_use]
    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_log_capacity(capacity);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the shuffle seed for a reproducible game.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the shipped catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: MarketCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the game with a seeded (or entropy-seeded) RNG.
    #[must_use]
    pub fn build(self) -> DeckEngine<GameRng> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(target: "engine", "Cloud game seed {}", rng.seed());
        self.build_with(rng)
    }

    /// Build the game with a custom shuffler.
    #[must_use]
    pub fn build_with<S: Shuffler>(self, shuffler: S) -> DeckEngine<S> {
        let market = self.catalog.unwrap_or_else(catalog);
        DeckEngine::new(market, self.config, shuffler)
    }
}
