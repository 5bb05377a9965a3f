//! Dealing one stock card onto each tableau pile.

use smallvec::SmallVec;
use tracing::info;

use super::completion::settle;
use super::outcome::MoveOutcome;
use crate::cards::HistoryEntry;
use crate::core::{Action, ActionRecord, GameState, MoveError, PileId, TABLEAU_COUNT};
use crate::zones::PilePosition;

/// Deal the top stock card face-up onto every non-empty tableau pile, in
/// pile order.
///
/// The deal cost is charged on every call, even when the stock is already
/// empty and nothing moves. Empty tableau piles are skipped. If the stock
/// runs out mid-pass the remaining piles get nothing. Each pile that got a
/// card is then checked for a completed run.
pub fn deal_from_stock(state: &mut GameState) -> Result<MoveOutcome, MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }

    let move_index = state.move_count;
    let mut outcome = MoveOutcome::new(move_index);
    let scoring = state.scoring;
    outcome.credit(state, -scoring.deal_reward_cost, -scoring.deal_score_cost);

    let mut received: SmallVec<[PileId; TABLEAU_COUNT]> = SmallVec::new();
    for pile in PileId::tableaus() {
        if state.pile(pile).is_empty() {
            continue;
        }
        let Some(card) = state.piles.top_card(PileId::STOCK) else {
            break;
        };

        let (from, position) = state.piles.move_to_pile(card, pile, PilePosition::Top);
        let dealt = state.card_mut(card);
        dealt.face_up();
        dealt.record(HistoryEntry::moved_and_flipped(move_index, from, position));

        outcome.moved.push(card);
        outcome.flipped.push(card);
        received.push(pile);
    }

    for &pile in &received {
        settle(state, pile, &mut outcome);
    }

    if !received.is_empty() {
        state.undoable.push(move_index);
    }
    state.undo_cursor = None;
    state.finish_move();

    if state.is_game_over() {
        outcome.reward += state.scoring.win_bonus;
        outcome.won = true;
    }

    info!(
        dealt = received.len(),
        stock_remaining = state.stock_remaining(),
        move_index,
        "dealt from stock"
    );
    state.record_action(ActionRecord::new(Action::deal(), move_index, outcome.reward));
    Ok(outcome)
}
