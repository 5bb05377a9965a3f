//! Pick-and-drop selection for interactive hosts.
//!
//! A host translating clicks or drags holds one `Selection`. Picking a card
//! lifts the run above it (logically only; the piles are not touched), and
//! dropping it either commits the move or puts everything back.
//!
//! ```text
//! Idle --pick--> Selecting --drop ok--> Committed --> Idle
//!                Selecting --drop err-> Reverted  --> Idle
//!                Selecting --cancel---> Reverted  --> Idle
//! ```
//!
//! `Committed` and `Reverted` are not stored: `drop_on` and `cancel` return
//! them as a [`SelectionEvent`] and the selection is `Idle` again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::moves::{apply_selection, check_selection};
use super::outcome::MoveOutcome;
use crate::core::{CardId, GameState, MoveError, PileId};

/// Current phase of a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing held.
    #[default]
    Idle,
    /// Holding the run from `start` to the top of `source`.
    Selecting { source: PileId, start: usize },
}

/// How a held selection ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The run was moved.
    Committed(MoveOutcome),
    /// The run went back where it was: the rejected drop, or `None` for a cancel.
    Reverted(Option<MoveError>),
}

/// Selection state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    phase: SelectionPhase,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, SelectionPhase::Selecting { .. })
    }

    /// The held cards, bottom first. Empty when idle.
    #[must_use]
    pub fn held(&self, state: &GameState) -> Vec<CardId> {
        match self.phase {
            SelectionPhase::Idle => Vec::new(),
            SelectionPhase::Selecting { source, start } => state
                .pile(source)
                .cards()
                .get(start..)
                .map_or_else(Vec::new, <[CardId]>::to_vec),
        }
    }

    /// Pick up the card at `index` in `pile` together with every card above it.
    ///
    /// The card must be face-up and the cards above it must form a run.
    /// Picking while already selecting replaces the held run; a failed pick
    /// leaves the selection idle.
    pub fn pick(&mut self, state: &GameState, pile: PileId, index: usize) -> Result<(), MoveError> {
        if state.is_game_over() {
            self.phase = SelectionPhase::Idle;
            return Err(MoveError::GameOver);
        }
        match check_selection(state, pile, index) {
            Ok(()) => {
                self.phase = SelectionPhase::Selecting { source: pile, start: index };
                Ok(())
            }
            Err(err) => {
                debug!(%pile, index, %err, "pick rejected");
                self.phase = SelectionPhase::Idle;
                Err(err)
            }
        }
    }

    /// Drop the held run on `dest`.
    ///
    /// Returns `Err(NotSelecting)` if nothing is held; otherwise the event
    /// that ended the selection.
    pub fn drop_on(
        &mut self,
        state: &mut GameState,
        dest: PileId,
    ) -> Result<SelectionEvent, MoveError> {
        let SelectionPhase::Selecting { source, start } = self.phase else {
            return Err(MoveError::NotSelecting);
        };
        self.phase = SelectionPhase::Idle;

        Ok(match apply_selection(state, source, start, dest) {
            Ok(outcome) => SelectionEvent::Committed(outcome),
            Err(err) => SelectionEvent::Reverted(Some(err)),
        })
    }

    /// Put the held run back.
    pub fn cancel(&mut self) -> Result<SelectionEvent, MoveError> {
        if !self.is_selecting() {
            return Err(MoveError::NotSelecting);
        }
        self.phase = SelectionPhase::Idle;
        Ok(SelectionEvent::Reverted(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Rank, Suit};
    use crate::core::Scoring;

    fn state() -> GameState {
        GameState::from_layout(
            Scoring::default(),
            &[
                vec![
                    (Suit::Clubs, Rank::Two, Face::Down),
                    (Suit::Hearts, Rank::Nine, Face::Up),
                    (Suit::Hearts, Rank::Eight, Face::Up),
                ],
                vec![(Suit::Spades, Rank::Ten, Face::Up)],
                vec![(Suit::Spades, Rank::Four, Face::Up)],
            ],
        )
    }

    #[test]
    fn test_pick_and_commit() {
        let mut state = state();
        let mut selection = Selection::new();

        selection.pick(&state, PileId(0), 1).unwrap();
        assert_eq!(selection.phase(), SelectionPhase::Selecting { source: PileId(0), start: 1 });
        assert_eq!(selection.held(&state), vec![CardId(1), CardId(2)]);

        let event = selection.drop_on(&mut state, PileId(1)).unwrap();
        let SelectionEvent::Committed(outcome) = event else {
            panic!("expected a committed move, got {:?}", event);
        };
        assert_eq!(outcome.moved, vec![CardId(1), CardId(2)]);
        assert_eq!(selection.phase(), SelectionPhase::Idle);
        assert_eq!(state.pile(PileId(1)).len(), 3);
    }

    #[test]
    fn test_bad_drop_reverts() {
        let mut state = state();
        let mut selection = Selection::new();

        selection.pick(&state, PileId(0), 2).unwrap();
        let event = selection.drop_on(&mut state, PileId(2)).unwrap();

        assert_eq!(
            event,
            SelectionEvent::Reverted(Some(MoveError::NotPlaceable { from: PileId(0), to: PileId(2) }))
        );
        assert!(!selection.is_selecting());
        assert_eq!(state.pile(PileId(0)).len(), 3);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_pick_face_down_stays_idle() {
        let state = state();
        let mut selection = Selection::new();

        assert_eq!(selection.pick(&state, PileId(0), 0), Err(MoveError::FaceDown));
        assert_eq!(selection.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_repick_replaces_held_run() {
        let state = state();
        let mut selection = Selection::new();

        selection.pick(&state, PileId(0), 1).unwrap();
        selection.pick(&state, PileId(2), 0).unwrap();
        assert_eq!(selection.held(&state), vec![CardId(4)]);
    }

    #[test]
    fn test_cancel_and_idle_errors() {
        let mut state = state();
        let mut selection = Selection::new();

        assert_eq!(selection.cancel(), Err(MoveError::NotSelecting));
        assert_eq!(selection.drop_on(&mut state, PileId(1)), Err(MoveError::NotSelecting));

        selection.pick(&state, PileId(1), 0).unwrap();
        assert_eq!(selection.cancel(), Ok(SelectionEvent::Reverted(None)));
        assert!(!selection.is_selecting());
    }
}
