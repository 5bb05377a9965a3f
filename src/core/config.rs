//! Game configuration types.
//!
//! - `PileId`: The twelve piles of the table
//! - `Scoring`: Score and reward deltas for every rule event
//! - `DealOrder`: How the 104 cards are ordered before distribution
//!
//! The deal plan itself (how many cards each tableau pile receives) is
//! fixed by the variant and exposed as constants.

use serde::{Deserialize, Serialize};

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 10;

/// Total piles: ten tableau piles, the stock and the foundation.
pub const PILE_COUNT: usize = 12;

/// Cards in a two-deck game.
pub const DECK_SIZE: usize = 104;

/// Cards in a completed run (A..K of one suit).
pub const RUN_LENGTH: usize = 13;

/// Cards dealt to each tableau pile at game start, bottom to top.
pub const DEAL_PLAN: [usize; TABLEAU_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Pile identifier.
///
/// `0..10` are tableau piles, `10` is the stock and `11` the foundation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u8);

impl PileId {
    /// The face-down reserve dealt onto the tableau.
    pub const STOCK: PileId = PileId(10);

    /// Destination for completed runs.
    pub const FOUNDATION: PileId = PileId(11);

    /// Create a pile id from its raw index.
    ///
    /// Panics if `index >= PILE_COUNT`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PILE_COUNT, "pile index out of range");
        Self(index)
    }

    /// Tableau pile by index, `None` if `index >= 10`.
    #[must_use]
    pub const fn tableau(index: usize) -> Option<Self> {
        if index < TABLEAU_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Iterate over the ten tableau piles in order.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT as u8).map(PileId)
    }

    /// Iterate over all twelve piles in index order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT as u8).map(PileId)
    }

    /// Is this one of the ten tableau piles?
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        (self.0 as usize) < TABLEAU_COUNT
    }

    /// Index into per-pile arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PileId::STOCK => write!(f, "Stock"),
            PileId::FOUNDATION => write!(f, "Foundation"),
            PileId(i) => write!(f, "Tableau({})", i),
        }
    }
}

/// Score and reward deltas.
///
/// The score is the player-facing number shown by a host; the reward is the
/// per-step scalar reported to an RL driver. Most events move both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Score at the start of a game.
    pub starting_score: i64,

    /// Reward for any accepted move.
    pub move_reward: i64,

    /// Score and reward for turning a face-down card up.
    pub flip_bonus: i64,

    /// Score and reward for moving a completed run to the foundation.
    pub run_bonus: i64,

    /// Score cost of dealing from the stock.
    pub deal_score_cost: i64,

    /// Reward cost of dealing from the stock.
    pub deal_reward_cost: i64,

    /// Reward added on the step that wins the game.
    pub win_bonus: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            starting_score: 500,
            move_reward: 1,
            flip_bonus: 10,
            run_bonus: 130,
            deal_score_cost: 10,
            deal_reward_cost: 5,
            win_bonus: 1_000_000,
        }
    }
}

impl Scoring {
    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }

    /// Set the flip bonus.
    #[must_use]
    pub fn with_flip_bonus(mut self, bonus: i64) -> Self {
        self.flip_bonus = bonus;
        self
    }

    /// Set the completed-run bonus.
    #[must_use]
    pub fn with_run_bonus(mut self, bonus: i64) -> Self {
        self.run_bonus = bonus;
        self
    }

    /// Set the win bonus.
    #[must_use]
    pub fn with_win_bonus(mut self, bonus: i64) -> Self {
        self.win_bonus = bonus;
        self
    }
}

/// How the 104 cards are ordered before distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOrder {
    /// Construction order, no shuffle. Reproducible without a seed.
    Fixed,
    /// Fisher-Yates shuffle from the given seed.
    Seeded(u64),
    /// Fisher-Yates shuffle from an entropy-drawn seed.
    #[default]
    Random,
}

impl DealOrder {
    /// Map the boolean deal flag: `true` keeps construction order,
    /// `false` shuffles randomly.
    #[must_use]
    pub fn from_seeded(seeded: bool) -> Self {
        if seeded {
            DealOrder::Fixed
        } else {
            DealOrder::Random
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_plan_totals() {
        assert_eq!(DEAL_PLAN.iter().sum::<usize>(), 54);
        assert_eq!(DECK_SIZE - DEAL_PLAN.iter().sum::<usize>(), 50);
    }

    #[test]
    fn test_pile_ids() {
        assert!(PileId::new(0).is_tableau());
        assert!(PileId::new(9).is_tableau());
        assert!(!PileId::STOCK.is_tableau());
        assert!(!PileId::FOUNDATION.is_tableau());

        assert_eq!(PileId::tableau(3), Some(PileId(3)));
        assert_eq!(PileId::tableau(10), None);

        assert_eq!(PileId::tableaus().count(), 10);
        assert_eq!(PileId::all().count(), 12);
    }

    #[test]
    #[should_panic(expected = "pile index")]
    fn test_pile_id_out_of_range() {
        let _ = PileId::new(12);
    }

    #[test]
    fn test_pile_display() {
        assert_eq!(PileId(4).to_string(), "Tableau(4)");
        assert_eq!(PileId::STOCK.to_string(), "Stock");
        assert_eq!(PileId::FOUNDATION.to_string(), "Foundation");
    }

    #[test]
    fn test_scoring_builder() {
        let scoring = Scoring::default()
            .with_starting_score(0)
            .with_flip_bonus(5)
            .with_run_bonus(100)
            .with_win_bonus(1);

        assert_eq!(scoring.starting_score, 0);
        assert_eq!(scoring.flip_bonus, 5);
        assert_eq!(scoring.run_bonus, 100);
        assert_eq!(scoring.win_bonus, 1);
        assert_eq!(scoring.move_reward, 1);
    }

    #[test]
    fn test_deal_order_from_flag() {
        assert_eq!(DealOrder::from_seeded(true), DealOrder::Fixed);
        assert_eq!(DealOrder::from_seeded(false), DealOrder::Random);
    }

    #[test]
    fn test_scoring_serde() {
        let scoring = Scoring::default();
        let json = serde_json::to_string(&scoring).unwrap();
        let deserialized: Scoring = serde_json::from_str(&json).unwrap();
        assert_eq!(scoring, deserialized);
    }
}
