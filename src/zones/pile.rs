//! An ordered pile of cards.

use serde::{Deserialize, Serialize};

use crate::core::config::PileId;
use crate::core::entity::CardId;

/// Ordered card ids, bottom to top. The last element is the exposed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<CardId>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The exposed card.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Index of a card in this pile.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    pub(crate) fn insert(&mut self, index: usize, card: CardId) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    pub(crate) fn remove(&mut self, card: CardId) -> Option<usize> {
        let index = self.position(card)?;
        self.cards.remove(index);
        Some(index)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<CardId> {
        &mut self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_top() {
        let mut pile = Pile::new(PileId(0));
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push(CardId(4));
        pile.push(CardId(9));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(CardId(9)));
        assert_eq!(pile.get(0), Some(CardId(4)));
        assert_eq!(pile.position(CardId(9)), Some(1));
    }

    #[test]
    fn test_insert_clamps() {
        let mut pile = Pile::new(PileId(0));
        pile.push(CardId(1));
        pile.insert(10, CardId(2));
        pile.insert(0, CardId(3));

        assert_eq!(pile.cards(), &[CardId(3), CardId(1), CardId(2)]);
    }

    #[test]
    fn test_remove() {
        let mut pile = Pile::new(PileId(2));
        pile.push(CardId(1));
        pile.push(CardId(2));

        assert_eq!(pile.remove(CardId(1)), Some(0));
        assert_eq!(pile.remove(CardId(1)), None);
        assert_eq!(pile.cards(), &[CardId(2)]);
    }
}
