//! Run detection, placement legality and committing moves between
//! tableau piles.
//!
//! ## Key Functions
//!
//! - `movable_sequence`: the run that travels with a selected card
//! - `is_placeable`: can a run whose lowest card is `moving` land on a pile
//! - `apply_move`: move the longest run at the top of one pile onto another
//! - `apply_selection`: move the run anchored at a chosen card
//! - `playable_cards` / `possible_moves`: hint queries for hosts

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::completion::{expose, settle};
use super::outcome::MoveOutcome;
use crate::cards::HistoryEntry;
use crate::core::{Action, ActionRecord, CardId, GameState, MoveError, PileId};
use crate::zones::Run;

/// Cards a movable card could be dropped onto.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHint {
    /// The deepest card of a movable run.
    pub card: CardId,

    /// Pile the run sits in.
    pub source: PileId,

    /// Top cards of other piles that accept the run.
    pub onto: Vec<(PileId, CardId)>,
}

/// The run that moves together with the card at `start` in `pile`.
///
/// Walks upward from `start` while each card is face-up, one rank lower
/// and of the same suit as the card beneath it. Always holds at least the
/// starting card. The run stops at the first break, so it may end below
/// the pile top.
pub fn movable_sequence(state: &GameState, pile: PileId, start: usize) -> Result<Run, MoveError> {
    let cards = state.pile(pile).cards();
    let Some(&first) = cards.get(start) else {
        return Err(MoveError::IndexOutOfRange { pile, index: start });
    };
    if !state.card(first).is_face_up() {
        return Err(MoveError::FaceDown);
    }

    let mut run = Run::new();
    run.push(first);
    for &id in &cards[start + 1..] {
        let below = state.card(run[run.len() - 1]);
        let card = state.card(id);
        if !card.is_face_up() || !below.continues_with(card) {
            break;
        }
        run.push(id);
    }
    Ok(run)
}

/// Index of the deepest card of the longest run ending at the top of `pile`.
///
/// `None` if the pile is empty or its top card is face-down.
#[must_use]
pub fn top_run_start(state: &GameState, pile: PileId) -> Option<usize> {
    let cards = state.pile(pile).cards();
    let top = cards.len().checked_sub(1)?;
    if !state.card(cards[top]).is_face_up() {
        return None;
    }

    let mut start = top;
    while start > 0 {
        let below = state.card(cards[start - 1]);
        if !below.is_face_up() || !below.continues_with(state.card(cards[start])) {
            break;
        }
        start -= 1;
    }
    Some(start)
}

/// Can a run whose lowest card is `moving` be dropped on `dest`?
///
/// Any run fits an empty pile. Otherwise the top card of `dest` must be
/// exactly one rank higher; suits do not matter.
#[must_use]
pub fn is_placeable(state: &GameState, dest: PileId, moving: CardId) -> bool {
    match state.top_card(dest) {
        None => true,
        Some(top) => top.accepts(state.card(moving)),
    }
}

/// The deepest card of the top run of every non-empty tableau pile.
#[must_use]
pub fn playable_cards(state: &GameState) -> Vec<CardId> {
    PileId::tableaus()
        .filter_map(|pile| {
            let start = top_run_start(state, pile)?;
            Some(state.pile(pile).cards()[start])
        })
        .collect()
}

/// For every playable card, the top cards of other tableau piles it could
/// land on. A card with nowhere to go still gets an entry with no targets.
/// Empty piles are not listed as targets.
#[must_use]
pub fn possible_moves(state: &GameState) -> Vec<MoveHint> {
    let mut hints = Vec::new();

    for source in PileId::tableaus() {
        let Some(start) = top_run_start(state, source) else {
            continue;
        };
        let card = state.pile(source).cards()[start];

        let onto: Vec<(PileId, CardId)> = PileId::tableaus()
            .filter(|&dest| dest != source)
            .filter_map(|dest| {
                let top = state.top_card(dest)?;
                (top.is_face_up() && top.accepts(state.card(card))).then_some((dest, top.id))
            })
            .collect();

        hints.push(MoveHint { card, source, onto });
    }

    hints
}

/// Check a `MOVE` without applying it. Returns the start index of the run
/// that would move.
pub fn check_move(state: &GameState, source: PileId, dest: PileId) -> Result<usize, MoveError> {
    check_piles(state, source, dest)?;
    let start = top_run_start(state, source).ok_or(MoveError::EmptySource(source))?;
    let moving = state.pile(source).cards()[start];
    if !is_placeable(state, dest, moving) {
        return Err(MoveError::NotPlaceable { from: source, to: dest });
    }
    Ok(start)
}

/// All `(source, destination)` pairs `apply_move` would accept.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<(PileId, PileId)> {
    PileId::tableaus()
        .flat_map(|source| PileId::tableaus().map(move |dest| (source, dest)))
        .filter(|&(source, dest)| check_move(state, source, dest).is_ok())
        .collect()
}

/// Move the longest run at the top of `source` onto `dest`.
///
/// On success the source's new top is turned face-up, a completed run on
/// `dest` goes to the foundation, and the move index advances. On error
/// the state is unchanged.
pub fn apply_move(
    state: &mut GameState,
    source: PileId,
    dest: PileId,
) -> Result<MoveOutcome, MoveError> {
    let start = check_move(state, source, dest).map_err(|err| {
        debug!(%source, %dest, %err, "move rejected");
        err
    })?;
    Ok(commit_run(state, source, start, dest))
}

/// Move the run anchored at the card at `start` in `source` onto `dest`.
///
/// The cards from `start` to the top must form a run.
pub fn apply_selection(
    state: &mut GameState,
    source: PileId,
    start: usize,
    dest: PileId,
) -> Result<MoveOutcome, MoveError> {
    let checked = check_piles(state, source, dest)
        .and_then(|()| check_selection(state, source, start))
        .and_then(|()| {
            let moving = state.pile(source).cards()[start];
            if is_placeable(state, dest, moving) {
                Ok(())
            } else {
                Err(MoveError::NotPlaceable { from: source, to: dest })
            }
        });

    if let Err(err) = checked {
        debug!(%source, start, %dest, %err, "selection rejected");
        return Err(err);
    }
    Ok(commit_run(state, source, start, dest))
}

/// Check that the card at `start` can be picked up from `source`.
pub(crate) fn check_selection(
    state: &GameState,
    source: PileId,
    start: usize,
) -> Result<(), MoveError> {
    if !source.is_tableau() {
        return Err(MoveError::NotTableau(source));
    }
    let run = movable_sequence(state, source, start)?;
    if start + run.len() != state.pile(source).len() {
        return Err(MoveError::NotMovable);
    }
    Ok(())
}

fn check_piles(state: &GameState, source: PileId, dest: PileId) -> Result<(), MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    if !source.is_tableau() {
        return Err(MoveError::NotTableau(source));
    }
    if !dest.is_tableau() {
        return Err(MoveError::NotTableau(dest));
    }
    if source == dest {
        return Err(MoveError::SamePile);
    }
    if state.pile(source).is_empty() {
        return Err(MoveError::EmptySource(source));
    }
    Ok(())
}

/// Apply a checked move. Never fails.
fn commit_run(state: &mut GameState, source: PileId, start: usize, dest: PileId) -> MoveOutcome {
    let move_index = state.move_count;
    let mut outcome = MoveOutcome::new(move_index);

    let run = state.piles.move_run(source, start, dest);
    for (offset, &id) in run.iter().enumerate() {
        state
            .card_mut(id)
            .record(HistoryEntry::moved(move_index, source, start + offset));
    }
    outcome.moved.extend_from_slice(&run);
    let reward = state.scoring.move_reward;
    outcome.credit(state, reward, 0);

    expose(state, source, &mut outcome);
    settle(state, dest, &mut outcome);

    state.undoable.push(move_index);
    state.undo_cursor = None;
    state.finish_move();

    if state.is_game_over() {
        outcome.reward += state.scoring.win_bonus;
        outcome.won = true;
    }

    debug!(
        %source,
        %dest,
        cards = run.len(),
        reward = outcome.reward,
        move_index,
        "move applied"
    );
    state.record_action(ActionRecord::new(
        Action::move_run(source, dest),
        move_index,
        outcome.reward,
    ));
    outcome
}
