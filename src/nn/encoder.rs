//! Observation encoders.
//!
//! Both encoders lay the table out as one row per pile (12 rows) and one
//! column per card slot (104 columns, bottom card first). Slots past the end
//! of a pile are `EMPTY`, face-down cards are `FACE_DOWN`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, PileId, ACTION_SPACE_SIZE, DECK_SIZE, PILE_COUNT};
use crate::nn::traits::{EncodedState, StateEncoder, FACE_DOWN};

/// Which encoder an environment uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationEncoding {
    /// `[12, 104]`, one code per card.
    #[default]
    Flat,
    /// `[12, 104, 2]`, rank and suit per card.
    Pairs,
}

impl ObservationEncoding {
    /// Build the encoder for this encoding.
    #[must_use]
    pub fn encoder(self) -> Box<dyn StateEncoder> {
        match self {
            ObservationEncoding::Flat => Box::new(FlatEncoder),
            ObservationEncoding::Pairs => Box::new(PairEncoder),
        }
    }
}

/// One cell per card: `(suit - 1) * 13 + rank`, so 1..=52.
///
/// Suits are encoded Clubs 1, Hearts 2, Spades 3, Diamonds 4 and ranks Ace
/// 1 through King 13. The two copies of a card share a code.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatEncoder;

impl FlatEncoder {
    /// Code of a face-up card.
    #[must_use]
    pub fn card_code(card: &Card) -> f32 {
        f32::from((card.suit.encoded() - 1) * 13 + card.rank.encoded())
    }
}

impl StateEncoder for FlatEncoder {
    fn encode(&self, state: &GameState) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for pile in PileId::all() {
            let row = pile.index() * DECK_SIZE;
            for (slot, &id) in state.pile(pile).cards().iter().enumerate() {
                let card = state.card(id);
                encoded.tensor[row + slot] = if card.is_face_up() {
                    Self::card_code(card)
                } else {
                    FACE_DOWN
                };
            }
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PILE_COUNT, DECK_SIZE]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

/// Two cells per card: encoded rank (1..=13) then encoded suit (1..=4).
#[derive(Clone, Copy, Debug, Default)]
pub struct PairEncoder;

impl StateEncoder for PairEncoder {
    fn encode(&self, state: &GameState) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for pile in PileId::all() {
            let row = pile.index() * DECK_SIZE * 2;
            for (slot, &id) in state.pile(pile).cards().iter().enumerate() {
                let card = state.card(id);
                let cell = row + slot * 2;
                let (rank, suit) = if card.is_face_up() {
                    (f32::from(card.rank.encoded()), f32::from(card.suit.encoded()))
                } else {
                    (FACE_DOWN, FACE_DOWN)
                };
                encoded.tensor[cell] = rank;
                encoded.tensor[cell + 1] = suit;
            }
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PILE_COUNT, DECK_SIZE, 2]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}
