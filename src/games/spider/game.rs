//! Spider rules implementation.

use crate::core::{Action, DealOrder, GameState, MoveError, Scoring, Verb};
use crate::rules::{self, GameResult, MoveOutcome, RulesEngine};

use super::dealer;

/// Two-deck Spider.
#[derive(Clone, Debug, Default)]
pub struct SpiderRules {
    scoring: Scoring,
}

/// Builder for creating `SpiderRules`.
#[derive(Clone, Debug, Default)]
pub struct SpiderRulesBuilder {
    scoring: Scoring,
}

impl SpiderRulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all score and reward deltas.
    pub fn scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn starting_score(mut self, score: i64) -> Self {
        self.scoring = self.scoring.with_starting_score(score);
        self
    }

    pub fn win_bonus(mut self, bonus: i64) -> Self {
        self.scoring = self.scoring.with_win_bonus(bonus);
        self
    }

    pub fn build(self) -> SpiderRules {
        SpiderRules {
            scoring: self.scoring,
        }
    }
}

impl SpiderRules {
    #[must_use]
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    /// Deal a game from the boolean flag hosts pass around: `true` for the
    /// fixed construction order, `false` for a random shuffle.
    #[must_use]
    pub fn deal(&self, seeded: bool) -> GameState {
        self.new_game(DealOrder::from_seeded(seeded))
    }
}

impl RulesEngine for SpiderRules {
    fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    fn new_game(&self, order: DealOrder) -> GameState {
        dealer::deal(self.scoring, order)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_game_over() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = rules::legal_moves(state)
            .into_iter()
            .map(|(source, dest)| Action::move_run(source, dest))
            .collect();

        if state.stock_remaining() > 0 {
            actions.push(Action::deal());
        }
        if state.can_undo() {
            actions.push(Action::undo());
        }

        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<MoveOutcome, MoveError> {
        match action.verb {
            Verb::Move => rules::apply_move(state, action.source, action.destination),
            Verb::Deal => rules::deal_from_stock(state),
            Verb::Undo => rules::undo(state),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_game_over().then(|| GameResult::Won {
            score: state.score(),
        })
    }
}
