//! Card identification.
//!
//! Every one of the 104 cards in a game has a unique `CardId`. The two
//! copies of a (suit, rank) pair from the two decks are distinct cards with
//! distinct ids; rules never compare cards by value to decide identity.
//!
//! ## ID Layout
//!
//! Ids are dense indices into the card arena held by `GameState`:
//! - Dealt games: `0..104`, in deck construction order
//! - Layout games: `0..n`, in layout order (pile by pile, bottom to top)
//!
//! ```
//! use rust_spider::core::CardId;
//!
//! let first = CardId::new(0);
//! let last = CardId::new(103);
//!
//! assert!(first < last);
//! assert_eq!(last.index(), 103);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a card id from its arena index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Arena index for this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_index() {
        assert_eq!(CardId::new(0).index(), 0);
        assert_eq!(CardId::new(57).index(), 57);
        assert_eq!(CardId::new(57).raw(), 57);
    }

    #[test]
    fn test_card_id_ordering() {
        let mut ids = vec![CardId(5), CardId(1), CardId(3)];
        ids.sort();
        assert_eq!(ids, vec![CardId(1), CardId(3), CardId(5)]);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId(12).to_string(), "Card(12)");
    }

    #[test]
    fn test_card_id_serialization() {
        let id = CardId(42);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
