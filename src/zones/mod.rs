//! Pile system for card locations.
//!
//! The table has twelve piles: ten tableau piles, the stock and the
//! foundation. Rules consult pile membership and order only; any on-screen
//! position is a projection of (pile, index) computed by the host.
//!
//! ## Key Types
//!
//! - `PileId`: Pile identifier (from `core::config`)
//! - `Pile`: Ordered card ids, bottom to top
//! - `PileManager`: Card location tracking and movement
//! - `PilePosition`: Position specifier for inserts

pub mod manager;
pub mod pile;

pub use manager::{PileManager, PilePosition, Run};
pub use pile::Pile;

// Re-export pile id from core for convenience
pub use crate::core::config::PileId;
