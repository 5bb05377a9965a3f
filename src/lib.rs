//! # rust-spider
//!
//! A two-deck Spider solitaire engine with a reinforcement-learning
//! environment on top.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A game is one `GameState` value owned by the host.
//!    Engine operations borrow it mutably and either apply a whole action
//!    or return an error with the state unchanged.
//!
//! 2. **Logical Piles Only**: Pile membership and order are the sole source
//!    of truth. Screen positions are a host concern.
//!
//! 3. **Move-Indexed History**: Every mutation runs under a move index and
//!    each touched card logs its prior pile and position under that index.
//!    Undo replays the log backward.
//!
//! ## Architecture
//!
//! - **Stable Card Ids**: 104 cards in an arena, referenced by `CardId`;
//!   the two copies of a card are distinct entities.
//!
//! - **Persistent Action Log**: `im::Vector` keeps cloning a state cheap.
//!
//! - **Deterministic Deals**: ChaCha8 shuffles from a recorded seed.
//!
//! ## Modules
//!
//! - `core`: Card ids, pile ids, configuration, actions, errors, RNG, state
//! - `cards`: Suits, ranks, cards and per-card history
//! - `zones`: The twelve piles and card locations
//! - `rules`: Moves, completed runs, stock deals, undo, selection
//! - `games`: The Spider dealer and `RulesEngine` implementation
//! - `nn`: Observation encoders
//! - `env`: Reset/step environment
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod games;
pub mod nn;
pub mod env;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, PileId,
    GameRng,
    Scoring, DealOrder,
    Action, ActionRecord, Verb,
    ActionError, MoveError,
    GameState,
};

pub use crate::zones::{PileManager, PilePosition, Pile};

pub use crate::cards::{Card, CardHistory, Face, HistoryEntry, Rank, Suit};

pub use crate::rules::{
    GameResult, MoveHint, MoveOutcome, RulesEngine, Selection, SelectionEvent, SelectionPhase,
};

pub use crate::games::{SpiderRules, SpiderRulesBuilder};

pub use crate::nn::{EncodedState, FlatEncoder, ObservationEncoding, PairEncoder, StateEncoder};

pub use crate::env::{EnvConfig, SpiderEnv, StepError, StepInfo, StepOutcome};
