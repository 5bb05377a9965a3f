//! Game state.
//!
//! ## GameState
//!
//! Everything one game needs:
//! - Card arena (identity, orientation, per-card history)
//! - Pile manager (card locations and order)
//! - Score, move counter, undo bookkeeping
//! - Log of accepted actions
//!
//! The state is a plain value owned by the host. Engine operations take it
//! by `&mut` and either apply a whole action or leave it untouched, so a
//! reader holding `&GameState` never sees a half-applied move. Hosts that
//! share a game across threads wrap the whole state in one mutex.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::{PileId, Scoring, DECK_SIZE, PILE_COUNT};
use super::entity::CardId;
use crate::cards::{Card, Face, Rank, Suit};
use crate::zones::{Pile, PileManager, PilePosition};

/// Card description used by [`GameState::from_layout`].
pub type CardSpec = (Suit, Rank, Face);

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Cards by id.
    pub(crate) cards: Vec<Card>,

    /// Card locations.
    pub(crate) piles: PileManager,

    /// Score and reward deltas.
    pub(crate) scoring: Scoring,

    /// Player-facing score.
    pub(crate) score: i64,

    /// Index the next mutation is recorded under. Starts at 0.
    pub(crate) move_count: u32,

    /// Consecutive undos since the last move or deal. `None` = no chain.
    pub(crate) undo_cursor: Option<u32>,

    /// Move indices that an undo can still revert, oldest first.
    pub(crate) undoable: Vec<u32>,

    pub(crate) game_over: bool,

    /// Seed used to shuffle the deal, if it was shuffled.
    pub(crate) deal_seed: Option<u64>,

    /// Accepted actions, oldest first.
    pub(crate) action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state with the given cards all in the stock, face-down.
    ///
    /// Cards get ids in iteration order.
    pub(crate) fn with_stock(scoring: Scoring, cards: impl IntoIterator<Item = (Suit, Rank)>) -> Self {
        let mut state = Self::empty(scoring);
        for (suit, rank) in cards {
            let id = state.alloc_card(suit, rank);
            state.piles.add_to_pile(id, PileId::STOCK, PilePosition::Top);
        }
        state
    }

    /// Build a state from explicit pile contents.
    ///
    /// `piles[i]` lists the cards of pile `i` bottom to top; missing piles
    /// are empty. Cards get ids in layout order. Useful for puzzles and for
    /// setting up exact positions in tests.
    ///
    /// Panics if more than twelve piles are given.
    #[must_use]
    pub fn from_layout(scoring: Scoring, piles: &[Vec<CardSpec>]) -> Self {
        assert!(
            piles.len() <= PILE_COUNT,
            "layout has {} piles, at most {} supported",
            piles.len(),
            PILE_COUNT
        );

        let mut state = Self::empty(scoring);
        for (index, pile) in piles.iter().enumerate() {
            let pile_id = PileId::new(index as u8);
            for &(suit, rank, face) in pile {
                let id = state.alloc_card(suit, rank);
                state.cards[id.index()].set_face(face);
                state.piles.add_to_pile(id, pile_id, PilePosition::Top);
            }
        }
        state.refresh_game_over();
        state
    }

    fn empty(scoring: Scoring) -> Self {
        Self {
            cards: Vec::with_capacity(DECK_SIZE),
            piles: PileManager::new(),
            scoring,
            score: scoring.starting_score,
            move_count: 0,
            undo_cursor: None,
            undoable: Vec::new(),
            game_over: false,
            deal_seed: None,
            action_history: Vector::new(),
        }
    }

    fn alloc_card(&mut self, suit: Suit, rank: Rank) -> CardId {
        let id = CardId::new(self.cards.len() as u16);
        self.cards.push(Card::new(id, suit, rank));
        id
    }

    // === Cards ===

    /// Get a card.
    ///
    /// Panics on an id from another game.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// All cards by id.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards in this game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    // === Piles ===

    /// Card locations.
    #[must_use]
    pub fn piles(&self) -> &PileManager {
        &self.piles
    }

    /// Get a pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        self.piles.pile(id)
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.piles.top_card(pile).map(|id| self.card(id))
    }

    /// Cards left in the stock.
    #[must_use]
    pub fn stock_remaining(&self) -> usize {
        self.piles.pile_size(PileId::STOCK)
    }

    /// Completed runs moved to the foundation.
    #[must_use]
    pub fn completed_runs(&self) -> usize {
        self.piles.pile_size(PileId::FOUNDATION) / crate::core::config::RUN_LENGTH
    }

    // === Scoring ===

    #[must_use]
    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    // === Progress ===

    /// Index the next mutation will be recorded under.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Consecutive undos since the last move or deal.
    #[must_use]
    pub fn undo_cursor(&self) -> Option<u32> {
        self.undo_cursor
    }

    /// Is there a move an undo can revert?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undoable.is_empty()
    }

    /// True iff the foundation holds every card of a full deal.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Seed of the shuffled deal, `None` for fixed or layout games.
    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn action_history(&self) -> &Vector<ActionRecord> {
        &self.action_history
    }

    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Close a mutation: advance the move index and refresh `game_over`.
    pub(crate) fn finish_move(&mut self) {
        self.move_count += 1;
        self.refresh_game_over();
        debug_assert_eq!(self.piles.cards_in_piles(), self.cards.len());
    }

    pub(crate) fn refresh_game_over(&mut self) {
        self.game_over = self.piles.pile_size(PileId::FOUNDATION) == DECK_SIZE;
    }

    /// Panic if any card is missing from, or duplicated across, the piles.
    pub fn assert_consistent(&self) {
        assert_eq!(
            self.piles.total_cards(),
            self.cards.len(),
            "pile index tracks {} cards, game has {}",
            self.piles.total_cards(),
            self.cards.len()
        );
        assert_eq!(
            self.piles.cards_in_piles(),
            self.cards.len(),
            "piles hold {} cards, game has {}",
            self.piles.cards_in_piles(),
            self.cards.len()
        );
        for pile in self.piles.piles() {
            for &id in pile.cards() {
                assert_eq!(
                    self.piles.pile_of(id),
                    Some(pile.id()),
                    "{} found in {} but indexed elsewhere",
                    id,
                    pile.id()
                );
            }
        }
    }
}
