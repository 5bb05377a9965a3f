//! Spider rules: moves, completed runs, dealing from the stock and undo.
//!
//! Every command takes the `GameState` by `&mut` and either applies fully
//! or returns a `MoveError` with the state untouched. Accepted commands
//! return a `MoveOutcome` with the reward they produced.
//!
//! ## Key Types
//!
//! - `RulesEngine`: trait a game implements; `SpiderRules` is the one game
//! - `MoveOutcome`: what an accepted command did
//! - `Selection`: pick-and-drop state machine for interactive hosts
//! - `MoveHint`: hint data from `possible_moves`

pub mod completion;
pub mod engine;
pub mod moves;
pub mod outcome;
pub mod selection;
pub mod stock;
pub mod undo;

pub use completion::{remove_stack, stack_completed};
pub use engine::{GameResult, RulesEngine};
pub use moves::{
    apply_move, apply_selection, check_move, is_placeable, legal_moves, movable_sequence,
    playable_cards, possible_moves, top_run_start, MoveHint,
};
pub use outcome::MoveOutcome;
pub use selection::{Selection, SelectionEvent, SelectionPhase};
pub use stock::deal_from_stock;
pub use undo::undo;
