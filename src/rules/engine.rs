//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a game is dealt
//! - What actions are legal
//! - How actions modify state
//! - When the game is over

use crate::core::{Action, DealOrder, GameState, MoveError, Scoring};

use super::outcome::MoveOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every card reached the foundation.
    Won {
        /// Score when the last run was completed.
        score: i64,
    },
}

impl GameResult {
    /// Final score.
    #[must_use]
    pub fn score(&self) -> i64 {
        match self {
            GameResult::Won { score } => *score,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `new_game`: Must be deterministic for every order but `Random`
/// - `apply_action`: On `Err` the state must be unchanged
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Score and reward deltas used by this game.
    fn scoring(&self) -> &Scoring;

    /// Deal a new game.
    fn new_game(&self, order: DealOrder) -> GameState;

    /// Actions `apply_action` would accept right now.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action.
    fn apply_action(&self, state: &mut GameState, action: &Action)
        -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_score() {
        let result = GameResult::Won { score: 1234 };
        assert_eq!(result.score(), 1234);
    }
}
