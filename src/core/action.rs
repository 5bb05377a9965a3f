//! Action representation: verb + source pile + destination pile.
//!
//! Actions mirror the RL-facing `MultiDiscrete([3, 10, 10])` contract:
//! - `MOVE src dst` moves the longest run at the top of `src` onto `dst`
//! - `DEAL` deals one stock card onto every tableau pile (piles ignored)
//! - `UNDO` reverts the most recent move (piles ignored)
//!
//! Actions also map to a flat index in `0..300` for masks and policies.

use serde::{Deserialize, Serialize};

use super::config::{PileId, TABLEAU_COUNT};
use super::error::ActionError;

/// Number of flat action indices (3 verbs x 10 sources x 10 destinations).
pub const ACTION_SPACE_SIZE: usize = 3 * TABLEAU_COUNT * TABLEAU_COUNT;

/// The kind of action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Verb {
    /// Move a run between tableau piles.
    Move = 0,
    /// Deal from the stock.
    Deal = 1,
    /// Undo the most recent move.
    Undo = 2,
}

impl Verb {
    /// Decode an RL verb.
    pub fn from_raw(raw: i64) -> Result<Self, ActionError> {
        match raw {
            0 => Ok(Verb::Move),
            1 => Ok(Verb::Deal),
            2 => Ok(Verb::Undo),
            other => Err(ActionError::UnknownVerb(other)),
        }
    }
}

/// A complete game action.
///
/// ```
/// use rust_spider::core::{Action, PileId, Verb};
///
/// let action = Action::from_triple(0, 3, 7).unwrap();
/// assert_eq!(action.verb, Verb::Move);
/// assert_eq!(action.source, PileId(3));
/// assert_eq!(action.destination, PileId(7));
///
/// assert_eq!(Action::from_index(action.to_index()).unwrap(), action);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// What to do.
    pub verb: Verb,

    /// Source tableau pile (used by `Move` only).
    pub source: PileId,

    /// Destination tableau pile (used by `Move` only).
    pub destination: PileId,
}

impl Action {
    /// Move the top run of `source` onto `destination`.
    #[must_use]
    pub fn move_run(source: PileId, destination: PileId) -> Self {
        Self {
            verb: Verb::Move,
            source,
            destination,
        }
    }

    /// Deal from the stock.
    #[must_use]
    pub fn deal() -> Self {
        Self {
            verb: Verb::Deal,
            source: PileId(0),
            destination: PileId(0),
        }
    }

    /// Undo the most recent move.
    #[must_use]
    pub fn undo() -> Self {
        Self {
            verb: Verb::Undo,
            source: PileId(0),
            destination: PileId(0),
        }
    }

    /// Decode a raw `(verb, source, destination)` triple.
    ///
    /// Source and destination must lie in `0..10` for every verb so the
    /// triple stays inside the declared action space.
    pub fn from_triple(verb: i64, source: i64, destination: i64) -> Result<Self, ActionError> {
        let verb = Verb::from_raw(verb)?;
        let source = Self::decode_pile(source)?;
        let destination = Self::decode_pile(destination)?;
        Ok(Self {
            verb,
            source,
            destination,
        })
    }

    fn decode_pile(raw: i64) -> Result<PileId, ActionError> {
        usize::try_from(raw)
            .ok()
            .and_then(PileId::tableau)
            .ok_or(ActionError::PileOutOfRange(raw))
    }

    /// Flat index in `0..ACTION_SPACE_SIZE`.
    #[must_use]
    pub fn to_index(&self) -> usize {
        (self.verb as usize * TABLEAU_COUNT + self.source.index()) * TABLEAU_COUNT
            + self.destination.index()
    }

    /// Decode a flat index.
    pub fn from_index(index: usize) -> Result<Self, ActionError> {
        if index >= ACTION_SPACE_SIZE {
            return Err(ActionError::IndexOutOfRange(index));
        }
        let destination = index % TABLEAU_COUNT;
        let source = (index / TABLEAU_COUNT) % TABLEAU_COUNT;
        let verb = index / (TABLEAU_COUNT * TABLEAU_COUNT);
        Self::from_triple(verb as i64, source as i64, destination as i64)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verb {
            Verb::Move => write!(f, "move {} -> {}", self.source, self.destination),
            Verb::Deal => write!(f, "deal"),
            Verb::Undo => write!(f, "undo"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Move index the action was recorded under.
    pub move_index: u32,

    /// Reward produced by the action.
    pub reward: i64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, move_index: u32, reward: i64) -> Self {
        Self {
            action,
            move_index,
            reward,
        }
    }
}
