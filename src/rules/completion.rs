//! Completed-run detection and removal, and exposure flips.

use tracing::info;

use super::outcome::MoveOutcome;
use crate::cards::{HistoryEntry, Rank};
use crate::core::{CardId, GameState, PileId, RUN_LENGTH};
use crate::zones::{PilePosition, Run};

/// The completed run at the top of a pile, if any.
///
/// Scans face-up cards from the top downward. The top card must be an Ace;
/// each card below must be one rank higher and of the same suit. Returns
/// the 13 cards top first (A, 2, ..., K) once the King is reached, and an
/// empty run if the chain breaks, hits a face-down card, or runs out.
#[must_use]
pub fn stack_completed(state: &GameState, pile: PileId) -> Run {
    let mut run = Run::new();

    for &id in state.pile(pile).cards().iter().rev() {
        let card = state.card(id);
        if !card.is_face_up() {
            break;
        }

        let extends = match run.last() {
            None => card.rank == Rank::Ace,
            Some(&above) => card.continues_with(state.card(above)),
        };
        if !extends {
            return Run::new();
        }

        run.push(id);
        if run.len() == RUN_LENGTH {
            return run;
        }
    }

    Run::new()
}

/// Move a completed run to the foundation, top card first.
///
/// Each card gets a history entry under `move_index` recording the pile
/// and position it left.
pub fn remove_stack(state: &mut GameState, run: &[CardId], move_index: u32) {
    for &id in run {
        let (pile, position) = state
            .piles
            .move_to_pile(id, PileId::FOUNDATION, PilePosition::Top);
        state
            .card_mut(id)
            .record(HistoryEntry::moved(move_index, pile, position));
    }
}

/// Turn the top card of a tableau pile face-up if it is face-down.
pub(crate) fn expose(state: &mut GameState, pile: PileId, outcome: &mut MoveOutcome) {
    if !pile.is_tableau() {
        return;
    }
    let Some(top) = state.piles.top_card(pile) else {
        return;
    };
    if state.card(top).is_face_up() {
        return;
    }

    let move_index = outcome.move_index;
    let card = state.card_mut(top);
    card.face_up();
    card.record(HistoryEntry::flipped(move_index));

    outcome.flipped.push(top);
    let bonus = state.scoring.flip_bonus;
    outcome.credit(state, bonus, bonus);
}

/// Remove a completed run from `pile` if there is one, then expose the new top.
pub(crate) fn settle(state: &mut GameState, pile: PileId, outcome: &mut MoveOutcome) {
    let run = stack_completed(state, pile);
    if run.is_empty() {
        return;
    }

    info!(pile = %pile, move_index = outcome.move_index, "run completed");
    remove_stack(state, &run, outcome.move_index);
    outcome.moved.extend_from_slice(&run);
    outcome.completed_runs += 1;
    let bonus = state.scoring.run_bonus;
    outcome.credit(state, bonus, bonus);

    expose(state, pile, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};
    use crate::core::{CardSpec, Scoring};

    fn descending(suit: Suit, from: Rank, to: Rank) -> Vec<CardSpec> {
        (to.index()..=from.index())
            .rev()
            .map(|i| (suit, Rank::from_index(i).unwrap(), Face::Up))
            .collect()
    }

    #[test]
    fn test_full_run_is_completed() {
        let state = GameState::from_layout(
            Scoring::default(),
            &[descending(Suit::Hearts, Rank::King, Rank::Ace)],
        );

        let run = stack_completed(&state, PileId(0));
        assert_eq!(run.len(), 13);
        assert_eq!(state.card(run[0]).rank, Rank::Ace);
        assert_eq!(state.card(run[12]).rank, Rank::King);
    }

    #[test]
    fn test_run_with_cards_below() {
        let mut pile = vec![
            (Suit::Spades, Rank::Four, Face::Down),
            (Suit::Clubs, Rank::Nine, Face::Up),
        ];
        pile.extend(descending(Suit::Diamonds, Rank::King, Rank::Ace));
        let state = GameState::from_layout(Scoring::default(), &[pile]);

        assert_eq!(stack_completed(&state, PileId(0)).len(), 13);
    }

    #[test]
    fn test_wrong_suit_breaks_run() {
        let mut pile = descending(Suit::Hearts, Rank::King, Rank::Eight);
        pile.push((Suit::Spades, Rank::Seven, Face::Up));
        pile.extend(descending(Suit::Hearts, Rank::Six, Rank::Ace));
        let state = GameState::from_layout(Scoring::default(), &[pile]);

        assert!(stack_completed(&state, PileId(0)).is_empty());
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut pile = descending(Suit::Hearts, Rank::King, Rank::Six);
        pile.extend(descending(Suit::Hearts, Rank::Four, Rank::Ace));
        let state = GameState::from_layout(Scoring::default(), &[pile]);

        assert!(stack_completed(&state, PileId(0)).is_empty());
    }

    #[test]
    fn test_top_must_be_ace() {
        let mut pile = descending(Suit::Hearts, Rank::King, Rank::Ace);
        pile.push((Suit::Clubs, Rank::Five, Face::Up));
        let state = GameState::from_layout(Scoring::default(), &[pile]);

        assert!(stack_completed(&state, PileId(0)).is_empty());
    }

    #[test]
    fn test_face_down_king_stops_run() {
        let mut pile = vec![(Suit::Hearts, Rank::King, Face::Down)];
        pile.extend(descending(Suit::Hearts, Rank::Queen, Rank::Ace));
        let state = GameState::from_layout(Scoring::default(), &[pile]);

        assert!(stack_completed(&state, PileId(0)).is_empty());
    }

    #[test]
    fn test_remove_stack_records_history() {
        let mut pile = vec![(Suit::Clubs, Rank::Two, Face::Down)];
        pile.extend(descending(Suit::Hearts, Rank::King, Rank::Ace));
        let mut state = GameState::from_layout(Scoring::default(), &[pile]);

        let run = stack_completed(&state, PileId(0));
        remove_stack(&mut state, &run, 3);

        assert_eq!(state.pile(PileId(0)).len(), 1);
        assert_eq!(state.pile(PileId::FOUNDATION).len(), 13);
        assert_eq!(state.top_card(PileId::FOUNDATION).unwrap().rank, Rank::King);

        let ace = state.card(run[0]);
        assert_eq!(ace.history().get(3).unwrap().prior_location(), Some((PileId(0), 13)));
        state.assert_consistent();
    }

    #[test]
    fn test_settle_removes_and_exposes() {
        let mut pile = vec![(Suit::Clubs, Rank::Two, Face::Down)];
        pile.extend(descending(Suit::Hearts, Rank::King, Rank::Ace));
        let mut state = GameState::from_layout(Scoring::default(), &[pile]);
        let mut outcome = MoveOutcome::new(0);

        settle(&mut state, PileId(0), &mut outcome);

        assert_eq!(outcome.completed_runs, 1);
        assert_eq!(outcome.flipped.len(), 1);
        assert_eq!(outcome.reward, 140);
        assert_eq!(state.score(), 640);
        assert!(state.top_card(PileId(0)).unwrap().is_face_up());
    }
}
