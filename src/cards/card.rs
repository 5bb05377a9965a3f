//! Cards: immutable identity plus mutable orientation and history.
//!
//! A `Card` knows its suit and rank, whether it is face-up, and the log of
//! every move that touched it. Which pile holds it is tracked by the
//! `PileManager`, never by the card.

use serde::{Deserialize, Serialize};

use super::history::{CardHistory, HistoryEntry};
use crate::core::entity::CardId;

/// Card suit, in deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits in construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// Observation encoding: Clubs 1, Hearts 2, Spades 3, Diamonds 4.
    #[must_use]
    pub const fn encoded(self) -> u8 {
        self as u8 + 1
    }

    /// Short symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }
}

/// Card rank, ordered A, 2, ..., 10, J, Q, K.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 0-based position in the rank order (Ace = 0, King = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Observation encoding: Ace 1 through King 13.
    #[must_use]
    pub const fn encoded(self) -> u8 {
        self as u8 + 1
    }

    /// Rank from its 0-based index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    #[default]
    Down,
}

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id for this card.
    pub id: CardId,

    pub suit: Suit,

    pub rank: Rank,

    face: Face,

    history: CardHistory,
}

impl Card {
    /// Create a face-down card with an empty history.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            face: Face::Down,
            history: CardHistory::default(),
        }
    }

    /// Current orientation.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face == Face::Up
    }

    /// Turn the card face-up.
    pub fn face_up(&mut self) {
        self.face = Face::Up;
    }

    /// Turn the card face-down.
    pub fn face_down(&mut self) {
        self.face = Face::Down;
    }

    pub(crate) fn set_face(&mut self, face: Face) {
        self.face = face;
    }

    /// 0-based rank position.
    #[must_use]
    pub fn rank_index(&self) -> u8 {
        self.rank.index()
    }

    /// Does `next` continue a run on top of this card?
    ///
    /// True when `next` is exactly one rank lower and of the same suit.
    #[must_use]
    pub fn continues_with(&self, next: &Card) -> bool {
        self.suit == next.suit && self.rank_index() == next.rank_index() + 1
    }

    /// Can `moving` be placed directly on this card? Rank only.
    #[must_use]
    pub fn accepts(&self, moving: &Card) -> bool {
        self.rank_index() == moving.rank_index() + 1
    }

    /// The move log of this card.
    #[must_use]
    pub fn history(&self) -> &CardHistory {
        &self.history
    }

    /// Append (or merge into) the history entry for a move.
    pub fn record(&mut self, entry: HistoryEntry) {
        tracing::trace!(card = %self.id, move_index = entry.move_index, "history entry");
        self.history.record(entry);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u16, suit: Suit, rank: Rank) -> Card {
        Card::new(CardId(id), suit, rank)
    }

    #[test]
    fn test_new_card_is_face_down() {
        let c = card(0, Suit::Hearts, Rank::Seven);
        assert_eq!(c.face(), Face::Down);
        assert!(!c.is_face_up());
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_flip() {
        let mut c = card(0, Suit::Hearts, Rank::Seven);
        c.face_up();
        assert!(c.is_face_up());
        c.face_down();
        assert!(!c.is_face_up());
    }

    #[test]
    fn test_encodings() {
        assert_eq!(Rank::Ace.encoded(), 1);
        assert_eq!(Rank::Ten.encoded(), 10);
        assert_eq!(Rank::King.encoded(), 13);
        assert_eq!(Suit::Clubs.encoded(), 1);
        assert_eq!(Suit::Hearts.encoded(), 2);
        assert_eq!(Suit::Spades.encoded(), 3);
        assert_eq!(Suit::Diamonds.encoded(), 4);
    }

    #[test]
    fn test_rank_index_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_index(rank.index()), Some(rank));
        }
        assert_eq!(Rank::from_index(13), None);
    }

    #[test]
    fn test_continues_with() {
        let eight = card(0, Suit::Spades, Rank::Eight);
        assert!(eight.continues_with(&card(1, Suit::Spades, Rank::Seven)));
        assert!(!eight.continues_with(&card(2, Suit::Hearts, Rank::Seven)));
        assert!(!eight.continues_with(&card(3, Suit::Spades, Rank::Six)));
        assert!(!eight.continues_with(&card(4, Suit::Spades, Rank::Nine)));
    }

    #[test]
    fn test_accepts_ignores_suit() {
        let eight = card(0, Suit::Spades, Rank::Eight);
        assert!(eight.accepts(&card(1, Suit::Hearts, Rank::Seven)));
        assert!(eight.accepts(&card(2, Suit::Spades, Rank::Seven)));
        assert!(!eight.accepts(&card(3, Suit::Spades, Rank::Eight)));
    }

    #[test]
    fn test_display() {
        assert_eq!(card(0, Suit::Diamonds, Rank::Ten).to_string(), "10D");
        assert_eq!(card(0, Suit::Clubs, Rank::Ace).to_string(), "AC");
    }

    #[test]
    fn test_duplicate_cards_are_distinct() {
        let a = card(3, Suit::Hearts, Rank::Queen);
        let b = card(55, Suit::Hearts, Rank::Queen);
        assert_ne!(a, b);
        assert_eq!((a.suit, a.rank), (b.suit, b.rank));
    }
}
