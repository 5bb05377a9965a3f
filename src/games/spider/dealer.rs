//! Building and distributing the two-deck set.

use tracing::info;

use crate::cards::{Rank, Suit};
use crate::core::{DealOrder, GameRng, GameState, PileId, Scoring, DEAL_PLAN};
use crate::zones::PilePosition;

/// Number of full 52-card decks.
pub const DECKS: usize = 2;

/// Cards in construction order: deck by deck, suit by suit, Ace to King.
pub fn deck_order() -> impl Iterator<Item = (Suit, Rank)> {
    (0..DECKS).flat_map(|_| {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| (suit, rank)))
    })
}

/// Deal a new game.
///
/// All 104 cards start face-down in the stock in construction order, the
/// last card on top. `Fixed` keeps that order; the other orders shuffle the
/// stock with a seeded ChaCha8 stream. Cards are then popped from the top
/// of the stock: six each onto piles 0-3, five each onto piles 4-9. The top
/// card of every tableau pile is turned face-up.
#[must_use]
pub fn deal(scoring: Scoring, order: DealOrder) -> GameState {
    let mut state = GameState::with_stock(scoring, deck_order());

    let seed = match order {
        DealOrder::Fixed => None,
        DealOrder::Seeded(seed) => Some(seed),
        DealOrder::Random => Some(GameRng::from_entropy().seed()),
    };
    if let Some(seed) = seed {
        let mut rng = GameRng::new(seed).for_context("deal");
        state.piles.shuffle_pile(PileId::STOCK, &mut rng);
        state.deal_seed = Some(seed);
    }

    for (pile, &count) in PileId::tableaus().zip(DEAL_PLAN.iter()) {
        for _ in 0..count {
            let card = match state.piles.top_card(PileId::STOCK) {
                Some(card) => card,
                None => panic!("stock exhausted while dealing {}", pile),
            };
            state.piles.move_to_pile(card, pile, PilePosition::Top);
        }
        if let Some(top) = state.piles.top_card(pile) {
            state.card_mut(top).face_up();
        }
    }

    state.assert_consistent();
    info!(?order, seed = ?state.deal_seed, "new game dealt");
    state
}
