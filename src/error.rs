//! Error types.
//!
//! Only caller mistakes and bad configuration are errors. Running out of
//! cards or credits is ordinary play and is reported through operation
//! outcomes instead.

use thiserror::Error;

use crate::cards::CardId;

/// Caller errors from engine operations.
///
/// These indicate the presentation layer and the engine disagree about the
/// session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The hand has no card at this position.
    #[error("hand index {index} out of range (hand holds {len} cards)")]
    HandIndexOutOfRange { index: usize, len: usize },

    /// The card is not offered by the market.
    #[error("card {0} is not sold in the market")]
    NotInMarket(CardId),

    /// A card instance references a definition the catalog lacks.
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),
}

/// Errors building or loading a market catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card id {0} is defined more than once")]
    DuplicateId(CardId),

    #[error("card {card} requires unknown card {condition}")]
    UnknownCondition { card: CardId, condition: CardId },

    #[error("card {card} has a condition with a bonus draw of 0")]
    ZeroBonusDraw { card: CardId },

    #[error("scoring card {0} must award at least 1 point")]
    ZeroPoints(CardId),

    #[error("card {0} declares both credit and points")]
    CreditAndPoints(CardId),

    #[error("starter card {0} cannot be a scoring card")]
    ScoringStarter(CardId),

    #[error("card {0} is listed in the wrong market section")]
    WrongSection(CardId),
}
