//! Two-deck Spider solitaire.
//!
//! - 104 cards: two full decks, all four suits
//! - Ten tableau piles, a stock and a foundation
//! - Runs of one suit from King down to Ace go to the foundation
//! - The game is won when all eight runs are complete

pub mod dealer;
mod game;

pub use dealer::{deal, deck_order};
pub use game::{SpiderRules, SpiderRulesBuilder};
