//! Pile manager for card locations and movement.
//!
//! The `PileManager` owns the twelve piles and an index from card to pile.
//! Every card is in exactly one pile; the manager panics if asked to add a
//! card it already tracks or to move one it does not.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pile::Pile;
use crate::core::config::PileId;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilePosition {
    /// On top (exposed).
    Top,
    /// Under everything else.
    Bottom,
    /// Insert at a specific index (0 = bottom), clamped to the pile length.
    Index(usize),
}

/// A run of cards lifted from a pile top, bottom card first.
pub type Run = SmallVec<[CardId; 13]>;

/// Manages card locations across the twelve piles.
///
/// ```
/// use rust_spider::core::{CardId, PileId};
/// use rust_spider::zones::{PileManager, PilePosition};
///
/// let mut manager = PileManager::new();
///
/// manager.add_to_pile(CardId(10), PileId::STOCK, PilePosition::Top);
/// manager.add_to_pile(CardId(11), PileId::STOCK, PilePosition::Top);
///
/// manager.move_to_pile(CardId(11), PileId(0), PilePosition::Top);
///
/// assert_eq!(manager.pile_of(CardId(11)), Some(PileId(0)));
/// assert_eq!(manager.pile(PileId::STOCK).cards(), &[CardId(10)]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PileManager {
    /// Card locations: card -> pile
    locations: FxHashMap<CardId, PileId>,

    /// Piles by index.
    piles: Vec<Pile>,
}

impl Default for PileManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PileManager {
    /// Create twelve empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locations: FxHashMap::default(),
            piles: PileId::all().map(Pile::new).collect(),
        }
    }

    /// Get a pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// All piles in index order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Add a card that is not yet on the table.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_pile(&mut self, card: CardId, pile: PileId, position: PilePosition) {
        if self.locations.contains_key(&card) {
            panic!("{} already exists in pile manager", card);
        }
        self.locations.insert(card, pile);
        Self::place(&mut self.piles[pile.index()], card, position);
    }

    /// Move a card to another pile.
    ///
    /// Returns the pile and position the card left. Panics if the card is
    /// not tracked, or if the index disagrees with the pile contents.
    pub fn move_to_pile(
        &mut self,
        card: CardId,
        new_pile: PileId,
        position: PilePosition,
    ) -> (PileId, usize) {
        let old_pile = match self.locations.get(&card) {
            Some(&pile) => pile,
            None => panic!("{} is not in any pile", card),
        };
        let old_position = match self.piles[old_pile.index()].remove(card) {
            Some(index) => index,
            None => panic!("{} is indexed in {} but not found there", card, old_pile),
        };

        self.locations.insert(card, new_pile);
        Self::place(&mut self.piles[new_pile.index()], card, position);

        (old_pile, old_position)
    }

    /// Lift the cards from `start` to the top of `from` and append them to
    /// `to`, keeping their order. Returns the moved cards, bottom first.
    pub fn move_run(&mut self, from: PileId, start: usize, to: PileId) -> Run {
        let run: Run = self.piles[from.index()].cards_mut().drain(start..).collect();
        for &card in &run {
            self.locations.insert(card, to);
            self.piles[to.index()].push(card);
        }
        run
    }

    /// Remove a card from the table, returning the pile and position it left.
    ///
    /// The card must be put back with `add_to_pile`. Panics if the card is
    /// not tracked.
    pub fn take(&mut self, card: CardId) -> (PileId, usize) {
        let pile = match self.locations.remove(&card) {
            Some(pile) => pile,
            None => panic!("{} is not in any pile", card),
        };
        match self.piles[pile.index()].remove(card) {
            Some(position) => (pile, position),
            None => panic!("{} is indexed in {} but not found there", card, pile),
        }
    }

    fn place(pile: &mut Pile, card: CardId, position: PilePosition) {
        match position {
            PilePosition::Top => pile.push(card),
            PilePosition::Bottom => pile.insert(0, card),
            PilePosition::Index(i) => pile.insert(i, card),
        }
    }

    /// Get the pile a card is in.
    #[must_use]
    pub fn pile_of(&self, card: CardId) -> Option<PileId> {
        self.locations.get(&card).copied()
    }

    /// Get a card's pile and index within it.
    #[must_use]
    pub fn location_of(&self, card: CardId) -> Option<(PileId, usize)> {
        let pile = self.pile_of(card)?;
        let position = self.piles[pile.index()].position(card)?;
        Some((pile, position))
    }

    /// Get the top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<CardId> {
        self.piles[pile.index()].top()
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn pile_size(&self, pile: PileId) -> usize {
        self.piles[pile.index()].len()
    }

    /// Shuffle a pile in place.
    pub fn shuffle_pile(&mut self, pile: PileId, rng: &mut GameRng) {
        rng.shuffle(self.piles[pile.index()].cards_mut());
    }

    /// Total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Sum of pile lengths; equals `total_cards` while the index is sound.
    #[must_use]
    pub fn cards_in_piles(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(cards: &[(u16, PileId)]) -> PileManager {
        let mut manager = PileManager::new();
        for &(id, pile) in cards {
            manager.add_to_pile(CardId(id), pile, PilePosition::Top);
        }
        manager
    }

    #[test]
    fn test_new_has_twelve_empty_piles() {
        let manager = PileManager::new();
        assert_eq!(manager.piles().count(), 12);
        assert_eq!(manager.total_cards(), 0);
        for pile in manager.piles() {
            assert!(pile.is_empty());
        }
    }

    #[test]
    fn test_add_and_locate() {
        let manager = manager_with(&[(10, PileId(0)), (11, PileId(0)), (12, PileId::STOCK)]);

        assert_eq!(manager.pile_of(CardId(10)), Some(PileId(0)));
        assert_eq!(manager.location_of(CardId(11)), Some((PileId(0), 1)));
        assert_eq!(manager.location_of(CardId(12)), Some((PileId::STOCK, 0)));
        assert_eq!(manager.pile_of(CardId(99)), None);
        assert_eq!(manager.top_card(PileId(0)), Some(CardId(11)));
    }

    #[test]
    fn test_positions() {
        let mut manager = PileManager::new();
        let pile = PileId(3);

        manager.add_to_pile(CardId(10), pile, PilePosition::Top);
        manager.add_to_pile(CardId(11), pile, PilePosition::Bottom);
        manager.add_to_pile(CardId(12), pile, PilePosition::Index(1));

        assert_eq!(manager.pile(pile).cards(), &[CardId(11), CardId(12), CardId(10)]);
    }

    #[test]
    fn test_move_to_pile_reports_origin() {
        let mut manager = manager_with(&[(10, PileId(0)), (11, PileId(0))]);

        let origin = manager.move_to_pile(CardId(10), PileId(5), PilePosition::Top);

        assert_eq!(origin, (PileId(0), 0));
        assert_eq!(manager.pile_of(CardId(10)), Some(PileId(5)));
        assert_eq!(manager.pile(PileId(0)).cards(), &[CardId(11)]);
        assert_eq!(manager.total_cards(), 2);
    }

    #[test]
    fn test_move_run() {
        let mut manager = manager_with(&[
            (1, PileId(0)),
            (2, PileId(0)),
            (3, PileId(0)),
            (4, PileId(1)),
        ]);

        let run = manager.move_run(PileId(0), 1, PileId(1));

        assert_eq!(run.as_slice(), &[CardId(2), CardId(3)]);
        assert_eq!(manager.pile(PileId(0)).cards(), &[CardId(1)]);
        assert_eq!(manager.pile(PileId(1)).cards(), &[CardId(4), CardId(2), CardId(3)]);
        assert_eq!(manager.pile_of(CardId(3)), Some(PileId(1)));
        assert_eq!(manager.cards_in_piles(), manager.total_cards());
    }

    #[test]
    fn test_take_and_restore() {
        let mut manager = manager_with(&[(1, PileId(0)), (2, PileId(0)), (3, PileId(0))]);

        assert_eq!(manager.take(CardId(2)), (PileId(0), 1));
        assert!(!manager.contains(CardId(2)));
        assert_eq!(manager.pile(PileId(0)).cards(), &[CardId(1), CardId(3)]);

        manager.add_to_pile(CardId(2), PileId(0), PilePosition::Index(1));
        assert_eq!(manager.pile(PileId(0)).cards(), &[CardId(1), CardId(2), CardId(3)]);
    }

    #[test]
    fn test_shuffle() {
        let mut manager = PileManager::new();
        for i in 0..30 {
            manager.add_to_pile(CardId(i), PileId::STOCK, PilePosition::Top);
        }
        let before = manager.pile(PileId::STOCK).cards().to_vec();

        let mut rng = GameRng::new(42);
        manager.shuffle_pile(PileId::STOCK, &mut rng);

        let after = manager.pile(PileId::STOCK).cards().to_vec();
        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
        assert_eq!(manager.pile_of(after[0]), Some(PileId::STOCK));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_card_panics() {
        let mut manager = PileManager::new();
        manager.add_to_pile(CardId(10), PileId(0), PilePosition::Top);
        manager.add_to_pile(CardId(10), PileId(1), PilePosition::Top);
    }

    #[test]
    #[should_panic(expected = "not in any pile")]
    fn test_move_untracked_panics() {
        let mut manager = PileManager::new();
        manager.move_to_pile(CardId(3), PileId(0), PilePosition::Top);
    }
}
