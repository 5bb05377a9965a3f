use thiserror::Error;

use super::config::PileId;

/// Reasons an engine command was rejected.
///
/// A rejected command never changes the game state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("{0} is not a tableau pile")]
    NotTableau(PileId),
    #[error("source and destination are the same pile")]
    SamePile,
    #[error("{0} has no cards to move")]
    EmptySource(PileId),
    #[error("card index {index} is out of range for {pile}")]
    IndexOutOfRange { pile: PileId, index: usize },
    #[error("selected card is face-down")]
    FaceDown,
    #[error("cards above the selection do not form a run")]
    NotMovable,
    #[error("run from {from} cannot be placed on {to}")]
    NotPlaceable { from: PileId, to: PileId },
    #[error("no move to undo")]
    NothingToUndo,
    #[error("no cards are selected")]
    NotSelecting,
    #[error("game is already over")]
    GameOver,
}

/// Malformed RL actions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("verb {0} is not one of 0 (move), 1 (deal), 2 (undo)")]
    UnknownVerb(i64),
    #[error("pile {0} is out of range for an action")]
    PileOutOfRange(i64),
    #[error("flat action index {0} is out of range")]
    IndexOutOfRange(usize),
}
