//! Step/reset environment over a single Spider game.

use thiserror::Error;
use tracing::{debug, info};

use super::config::EnvConfig;
use crate::core::{
    Action, ActionError, CardId, DealOrder, GameState, MoveError, ACTION_SPACE_SIZE,
};
use crate::games::SpiderRules;
use crate::nn::{EncodedState, StateEncoder};
use crate::rules::{self, MoveHint, RulesEngine};

/// Why a step had no effect.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Metadata reported with every step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// The action was accepted.
    pub valid: bool,
    /// Why it was not.
    pub error: Option<StepError>,
    pub score: i64,
    pub move_count: u32,
    pub stock_remaining: usize,
    pub completed_runs: usize,
}

/// Outcome from applying one action.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub observation: EncodedState,
    pub reward: f32,
    /// The game is won.
    pub terminated: bool,
    /// The step limit was reached first.
    pub truncated: bool,
    pub info: StepInfo,
}

/// A Spider game behind a reset/step interface.
///
/// Actions are `(verb, source, destination)` triples or flat indices in
/// `0..300`. Rejected actions never raise: they produce zero reward and
/// `info.valid == false`.
pub struct SpiderEnv {
    rules: SpiderRules,
    state: GameState,
    encoder: Box<dyn StateEncoder>,
    config: EnvConfig,
    steps: u32,
}

impl SpiderEnv {
    /// Create an environment and deal its first game.
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        let rules = SpiderRules::new(config.scoring);
        let state = rules.new_game(config.deal_order);
        Self {
            rules,
            state,
            encoder: config.encoding.encoder(),
            config,
            steps: 0,
        }
    }

    /// Deal a new game with the configured order and return its observation.
    pub fn reset(&mut self) -> EncodedState {
        self.reset_with(self.config.deal_order)
    }

    /// Deal a new game with a specific order.
    pub fn reset_with(&mut self, order: DealOrder) -> EncodedState {
        self.state = self.rules.new_game(order);
        self.steps = 0;
        info!(?order, seed = ?self.state.deal_seed(), "environment reset");
        self.observe()
    }

    /// Apply an action.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        let result = self.rules.apply_action(&mut self.state, &action);
        match result {
            Ok(outcome) => self.finish_step(outcome.reward as f32, None),
            Err(err) => {
                debug!(%action, %err, "step rejected");
                self.finish_step(0.0, Some(err.into()))
            }
        }
    }

    /// Apply a raw `(verb, source, destination)` triple.
    pub fn step_raw(&mut self, verb: i64, source: i64, destination: i64) -> StepOutcome {
        match Action::from_triple(verb, source, destination) {
            Ok(action) => self.step(action),
            Err(err) => self.reject(err),
        }
    }

    /// Apply a flat action index.
    pub fn step_index(&mut self, index: usize) -> StepOutcome {
        match Action::from_index(index) {
            Ok(action) => self.step(action),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: ActionError) -> StepOutcome {
        debug!(%err, "malformed action");
        self.finish_step(0.0, Some(err.into()))
    }

    fn finish_step(&mut self, reward: f32, error: Option<StepError>) -> StepOutcome {
        self.steps += 1;
        let terminated = self.state.is_game_over();
        let truncated = !terminated && self.config.max_steps.is_some_and(|max| self.steps >= max);
        if terminated && error.is_none() {
            info!(score = self.state.score(), steps = self.steps, "game won");
        }

        StepOutcome {
            observation: self.observe(),
            reward,
            terminated,
            truncated,
            info: StepInfo {
                valid: error.is_none(),
                error,
                score: self.state.score(),
                move_count: self.state.move_count(),
                stock_remaining: self.state.stock_remaining(),
                completed_runs: self.state.completed_runs(),
            },
        }
    }

    /// Encode the current state.
    #[must_use]
    pub fn observe(&self) -> EncodedState {
        self.encoder.encode(&self.state)
    }

    /// Flat action indices that would be accepted right now.
    ///
    /// `DEAL` and `UNDO` are marked at their `source = destination = 0`
    /// index only.
    #[must_use]
    pub fn action_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; ACTION_SPACE_SIZE];
        for action in self.rules.legal_actions(&self.state) {
            mask[action.to_index()] = true;
        }
        mask
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The deepest card of the top run of every non-empty tableau pile.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardId> {
        rules::playable_cards(&self.state)
    }

    /// Hint data: where each playable card could land.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<MoveHint> {
        rules::possible_moves(&self.state)
    }

    /// Observation shape.
    #[must_use]
    pub fn observation_shape(&self) -> Vec<usize> {
        self.encoder.output_shape()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &SpiderRules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

impl Default for SpiderEnv {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}
