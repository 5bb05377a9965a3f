//! Reverting the most recent move or deal from per-card history.
//!
//! Undoable move indices sit on a stack in `GameState`. An undo pops the
//! newest one, finds every face-up card with a history entry for it, puts
//! those cards back where they were and turns flipped ones face-down again.
//! The undo runs under its own move index; the entries it writes are marked
//! as reversals so a later undo walks past them to the move before.

use tracing::{debug, info};

use super::outcome::MoveOutcome;
use crate::cards::HistoryEntry;
use crate::core::{Action, ActionRecord, CardId, GameState, MoveError, PileId};
use crate::zones::PilePosition;

/// A card touched by the move being reverted.
struct Touched {
    card: CardId,
    pile: PileId,
    position: usize,
    entry: HistoryEntry,
}

/// Revert the most recent move or deal that has not been undone yet.
///
/// Each card turned back face-down costs `flip_bonus` in reward. The score
/// is left alone, so the reverted move's score changes stand.
pub fn undo(state: &mut GameState) -> Result<MoveOutcome, MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    let Some(target) = state.undoable.pop() else {
        debug!("undo rejected: nothing to undo");
        return Err(MoveError::NothingToUndo);
    };

    let move_index = state.move_count;
    let mut outcome = MoveOutcome::new(move_index);
    let touched = collect_touched(state, target);

    for t in &touched {
        let card = state.card_mut(t.card);
        card.record(HistoryEntry::reversal(move_index, t.pile, t.position));
        if t.entry.flipped {
            card.face_down();
        }
    }

    let penalty = state.scoring.flip_bonus;
    for t in touched.iter().filter(|t| t.entry.flipped) {
        outcome.flipped.push(t.card);
        outcome.credit(state, -penalty, 0);
    }

    restore_locations(state, &touched, &mut outcome);

    state.undo_cursor = Some(state.undo_cursor.map_or(1, |n| n + 1));
    state.finish_move();

    info!(target, move_index, cards = outcome.moved.len(), "move undone");
    state.record_action(ActionRecord::new(Action::undo(), move_index, outcome.reward));
    Ok(outcome)
}

/// Face-up cards with an entry for `target`, in pile then position order.
fn collect_touched(state: &GameState, target: u32) -> Vec<Touched> {
    let mut touched = Vec::new();
    for pile in state.piles().piles() {
        for (position, &id) in pile.cards().iter().enumerate() {
            let card = state.card(id);
            if !card.is_face_up() {
                continue;
            }
            if let Some(entry) = card.history().get(target) {
                touched.push(Touched {
                    card: id,
                    pile: pile.id(),
                    position,
                    entry: *entry,
                });
            }
        }
    }
    touched
}

/// Lift every relocated card off the table, then put each back at its
/// recorded position, lowest position first so indices line up.
fn restore_locations(state: &mut GameState, touched: &[Touched], outcome: &mut MoveOutcome) {
    let mut returns: Vec<(PileId, usize, CardId)> = touched
        .iter()
        .filter_map(|t| {
            let (pile, position) = t.entry.prior_location()?;
            Some((pile, position, t.card))
        })
        .collect();

    for &(_, _, card) in &returns {
        state.piles.take(card);
    }

    returns.sort_unstable();
    for &(pile, position, card) in &returns {
        debug_assert!(
            position <= state.pile(pile).len(),
            "{} returns to {} at {} past its end ({})",
            card,
            pile,
            position,
            state.pile(pile).len()
        );
        state
            .piles
            .add_to_pile(card, pile, PilePosition::Index(position));
        outcome.moved.push(card);
    }
}
