//! Result of an accepted engine command.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameState};

/// What an accepted move, deal or undo did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Move index the command was recorded under.
    pub move_index: u32,

    /// Cards that changed pile, in the order they moved.
    pub moved: Vec<CardId>,

    /// Cards turned face-up (or, for an undo, turned back down).
    pub flipped: Vec<CardId>,

    /// Runs moved to the foundation.
    pub completed_runs: usize,

    /// Reward produced by the command.
    pub reward: i64,

    /// Change in score.
    pub score_delta: i64,

    /// The command finished the game.
    pub won: bool,
}

impl MoveOutcome {
    pub(crate) fn new(move_index: u32) -> Self {
        Self {
            move_index,
            ..Self::default()
        }
    }

    /// Add a reward and score delta, applying the score to the state.
    pub(crate) fn credit(&mut self, state: &mut GameState, reward: i64, score: i64) {
        self.reward += reward;
        self.score_delta += score;
        state.score += score;
    }
}
