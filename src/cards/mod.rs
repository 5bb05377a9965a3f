//! Card system: identity, orientation and per-card history.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Face`: card values and orientation
//! - `Card`: one of the 104 cards, with its move log
//! - `HistoryEntry`, `CardHistory`: per-move records used by undo

pub mod card;
pub mod history;

pub use card::{Card, Face, Rank, Suit};
pub use history::{CardHistory, HistoryEntry};
