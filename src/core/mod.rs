//! Core engine types: card ids, piles, configuration, actions, errors,
//! RNG and state.
//!
//! Rules live in `rules`; this module only holds the data they act on.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Verb, ACTION_SPACE_SIZE};
pub use config::{
    DealOrder, PileId, Scoring, DEAL_PLAN, DECK_SIZE, PILE_COUNT, RUN_LENGTH, TABLEAU_COUNT,
};
pub use entity::CardId;
pub use error::{ActionError, MoveError};
pub use rng::GameRng;
pub use state::{CardSpec, GameState};
