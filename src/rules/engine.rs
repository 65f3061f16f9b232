//! The deck/turn engine.
//!
//! `DeckEngine` owns a session and is the only way to change it. Four
//! operations drive play:
//! - `draw_cards`: move cards from deck to hand, reshuffling the discard
//!   pile into the deck whenever the deck runs out
//! - `play_card`: move a hand card to the play area, gain its credits, and
//!   fire its synergy bonus draw if the prerequisite card is already in play
//! - `buy_card`: spend credits on a market card (a new copy goes to the
//!   discard pile, or a scoring card adds points)
//! - `end_turn`: discard hand and play area, reset credits, draw a new hand
//!
//! `apply` dispatches an `Action` to the same operations.

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::cards::{CardId, CardInstance, MarketCatalog};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::EngineConfig;
use crate::core::rng::{GameRng, Shuffler};
use crate::core::state::{GameState, Snapshot};
use crate::error::EngineError;
use crate::zones::Zone;

/// Cards drawn by a single operation, in draw order.
pub type DrawnCards = SmallVec<[CardInstance; 5]>;

/// Result of playing a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Played {
    /// The card moved to the play area.
    pub card: CardInstance,
    /// Credits gained.
    pub credit: u32,
    /// Cards drawn by the synergy bonus (empty if it did not fire).
    pub bonus_drawn: DrawnCards,
}

impl Played {
    /// Did the synergy bonus draw anything?
    #[must_use]
    pub fn triggered(&self) -> bool {
        !self.bonus_drawn.is_empty()
    }
}

/// Result of a purchase attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Purchase {
    /// A new copy was put in the discard pile.
    Acquired(CardInstance),
    /// A scoring card added points.
    Scored { points: u32 },
    /// Not enough credits; nothing changed.
    Rejected { cost: u32, credits: u32 },
}

impl Purchase {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Purchase::Rejected { .. })
    }
}

/// Result of `DeckEngine::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Drew(DrawnCards),
    Played(Played),
    Bought(Purchase),
    TurnEnded(DrawnCards),
}

/// Single-player deck/turn engine.
///
/// Generic over the shuffle source so tests can pin the deck order.
///
/// ## Example
///
/// ```
/// use builder_cards::core::{EngineConfig, Unshuffled};
/// use builder_cards::games::cloud;
/// use builder_cards::rules::DeckEngine;
///
/// let mut engine = DeckEngine::new(cloud::catalog(), EngineConfig::default(), Unshuffled);
/// assert_eq!(engine.snapshot().hand.len(), 5);
///
/// let played = engine.play_card(0).unwrap();
/// assert_eq!(played.credit, 1);
/// assert_eq!(engine.state().credits, 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeckEngine<S: Shuffler = GameRng> {
    catalog: MarketCatalog,
    config: EngineConfig,
    state: GameState,
    shuffler: S,
}

impl<S: Shuffler> DeckEngine<S> {
    /// Start a session: build the starter deck, shuffle it, and draw the
    /// opening hand.
    ///
    /// A `log_capacity` of 0 is treated as 1. Panics if `shuffler` returns
    /// something other than a permutation.
    pub fn new(catalog: MarketCatalog, config: EngineConfig, shuffler: S) -> Self {
        let mut state = GameState::new(config.log_capacity);
        state.log.push(config.welcome_message.clone());

        let starter = catalog.starter().id.clone();
        for _ in 0..config.starter_copies {
            state.create_card(starter.clone(), Zone::Deck);
        }

        let mut engine = Self {
            catalog,
            config,
            state,
            shuffler,
        };

        engine.state.zones.shuffle_zone(Zone::Deck, &mut engine.shuffler);
        let hand = engine.draw(engine.config.hand_size);

        info!(
            target: "engine",
            "New game: {} x {}, opening hand of {}",
            engine.config.starter_copies,
            starter,
            hand.len()
        );

        engine
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &MarketCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Cards across deck, hand, play area, and discard.
    #[must_use]
    pub fn total_instances(&self) -> usize {
        self.state.zones.total_cards()
    }

    /// Card instances ever created: starters plus purchased service cards.
    #[must_use]
    pub fn instances_created(&self) -> usize {
        self.state.instances_created()
    }

    /// Is this card for sale, and do the current credits cover its cost?
    #[must_use]
    pub fn can_afford(&self, card: &CardId) -> bool {
        self.catalog.offers(card)
            && self
                .catalog
                .get(card)
                .is_some_and(|def| def.cost <= self.state.credits)
    }

    // === Operations ===

    /// Draw up to `count` cards into the hand.
    ///
    /// Returns fewer cards than requested when deck and discard are both
    /// empty.
    pub fn draw_cards(&mut self, count: usize) -> DrawnCards {
        let turn = self.state.turn_number;
        let sequence = self.state.next_sequence();

        let drawn = self.draw(count);
        self.record(Action::Draw { count }, turn, sequence);
        drawn
    }

    /// Play the card at `hand_index`.
    ///
    /// Only the indexed copy moves, even if the hand holds duplicates.
    pub fn play_card(&mut self, hand_index: usize) -> Result<Played, EngineError> {
        let hand_len = self.state.zones.zone_size(Zone::Hand);
        let card = self
            .state
            .zones
            .get(Zone::Hand, hand_index)
            .cloned()
            .ok_or(EngineError::HandIndexOutOfRange {
                index: hand_index,
                len: hand_len,
            })?;

        let def = self
            .catalog
            .get(&card.card_id)
            .ok_or_else(|| EngineError::UnknownCard(card.card_id.clone()))?;

        let credit = def.credit();
        let name = def.name.clone();

        // The prerequisite must be in play before this card joins it.
        let bonus = def
            .synergy()
            .filter(|(required, _)| self.state.zones.zone_has_card(Zone::PlayArea, required))
            .map(|(_, count)| count as usize);

        let turn = self.state.turn_number;
        let sequence = self.state.next_sequence();

        self.state.zones.move_at(Zone::Hand, hand_index, Zone::PlayArea);
        self.state.credits = self.state.credits.saturating_add(credit);

        debug!(
            target: "engine",
            "Played {} (+{} credits, {} total)",
            card.card_id,
            credit,
            self.state.credits
        );

        let bonus_drawn = match bonus {
            Some(count) => {
                self.state.log.push(format!(
                    "{} effect triggered: Draw {} card{}!",
                    name,
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                debug!(target: "engine", "{} synergy fired, drawing {}", card.card_id, count);
                self.draw(count)
            }
            None => DrawnCards::new(),
        };

        self.record(Action::Play { hand_index }, turn, sequence);

        Ok(Played {
            card,
            credit,
            bonus_drawn,
        })
    }

    /// Buy a market card.
    ///
    /// With too few credits this returns `Purchase::Rejected` and changes
    /// nothing. Scoring cards can be bought any number of times.
    pub fn buy_card(&mut self, card: &CardId) -> Result<Purchase, EngineError> {
        if !self.catalog.offers(card) {
            return Err(EngineError::NotInMarket(card.clone()));
        }
        let def = self
            .catalog
            .get(card)
            .ok_or_else(|| EngineError::UnknownCard(card.clone()))?;

        let cost = def.cost;
        let credits = self.state.credits;
        if credits < cost {
            debug!(
                target: "engine",
                "Cannot buy {}: costs {}, have {}",
                card,
                cost,
                credits
            );
            return Ok(Purchase::Rejected { cost, credits });
        }

        let name = def.name.clone();
        let points = def.points;

        let turn = self.state.turn_number;
        let sequence = self.state.next_sequence();

        self.state.credits -= cost;

        let purchase = match points {
            Some(points) => {
                self.state.points = self.state.points.saturating_add(points);
                self.state.log.push(format!("Achieved {}! +{}pt", name, points));
                info!(
                    target: "engine",
                    "Achieved {} for {} credits (+{} points, {} total)",
                    card,
                    cost,
                    points,
                    self.state.points
                );
                Purchase::Scored { points }
            }
            None => {
                let copy = self.state.create_card(card.clone(), Zone::Discard);
                self.state.log.push(format!("Bought {}", name));
                info!(target: "engine", "Bought {} for {} credits", card, cost);
                Purchase::Acquired(copy)
            }
        };

        self.record(Action::Buy { card: card.clone() }, turn, sequence);
        Ok(purchase)
    }

    /// End the turn: discard play area and hand, reset credits, draw a new
    /// hand.
    ///
    /// Unplayed hand cards are discarded without refund.
    pub fn end_turn(&mut self) -> DrawnCards {
        let turn = self.state.turn_number;
        let sequence = self.state.next_sequence();

        let played = self.state.zones.move_all(Zone::PlayArea, Zone::Discard);
        let unplayed = self.state.zones.move_all(Zone::Hand, Zone::Discard);
        let unspent = std::mem::take(&mut self.state.credits);

        let hand = self.draw(self.config.hand_size);
        self.state.log.push("Turn ended. Next phase.");

        info!(
            target: "engine",
            "Turn {} ended: {} played, {} unplayed, {} credits unspent; drew {}",
            turn,
            played,
            unplayed,
            unspent,
            hand.len()
        );

        self.record(Action::EndTurn, turn, sequence);
        self.state.advance_turn();
        hand
    }

    /// Dispatch an action to the matching operation.
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome, EngineError> {
        let outcome = match action {
            Action::Draw { count } => ActionOutcome::Drew(self.draw_cards(*count)),
            Action::Play { hand_index } => ActionOutcome::Played(self.play_card(*hand_index)?),
            Action::Buy { card } => ActionOutcome::Bought(self.buy_card(card)?),
            Action::EndTurn => ActionOutcome::TurnEnded(self.end_turn()),
        };
        Ok(outcome)
    }

    /// Actions the presentation layer can offer right now.
    ///
    /// One `Play` per hand position, one `Buy` per affordable market card,
    /// and `EndTurn`.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let hand_len = self.state.zones.zone_size(Zone::Hand);

        (0..hand_len)
            .map(|hand_index| Action::Play { hand_index })
            .chain(
                self.catalog
                    .affordable(self.state.credits)
                    .map(|def| Action::Buy { card: def.id.clone() }),
            )
            .chain(std::iter::once(Action::EndTurn))
            .collect()
    }

    // === Internals ===

    fn draw(&mut self, count: usize) -> DrawnCards {
        let mut drawn = DrawnCards::new();

        for _ in 0..count {
            if self.state.zones.zone_size(Zone::Deck) == 0 {
                let refilled = self.state.zones.move_all(Zone::Discard, Zone::Deck);
                if refilled > 0 {
                    self.state.zones.shuffle_zone(Zone::Deck, &mut self.shuffler);
                    debug!(target: "engine", "Deck empty, reshuffled {} discards", refilled);
                }
            }

            let Some(card) = self.state.zones.pop_top(Zone::Deck) else {
                debug!(
                    target: "engine",
                    "No cards left to draw ({} of {} drawn)",
                    drawn.len(),
                    count
                );
                break;
            };

            trace!(target: "engine", "Drew {} ({})", card.card_id, card.entity_id);
            self.state.zones.add_to_zone(card.clone(), Zone::Hand);
            drawn.push(card);
        }

        drawn
    }

    fn record(&mut self, action: Action, turn: u32, sequence: u32) {
        self.state
            .record_action(ActionRecord::new(action, turn, sequence));
    }
}
