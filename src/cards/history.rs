//! Per-card move log.
//!
//! Every engine mutation runs under a move index. A card touched by that
//! mutation gets one `HistoryEntry` keyed by the index, recording where it
//! was before (pile and position) and whether it was turned face-up.
//! Entries reference piles by id and positions by index, so they stay valid
//! however pile membership changes afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::PileId;

/// One card's record for one move index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Move index this entry belongs to.
    pub move_index: u32,

    /// Pile the card was in before the move. `None` for flip-only entries.
    pub prior_pile: Option<PileId>,

    /// Index of the card in `prior_pile` before the move.
    pub prior_position: Option<usize>,

    /// The card was turned face-up by this move.
    pub flipped: bool,

    /// Written by an undo; never replayed by a later undo.
    pub reversal: bool,
}

impl HistoryEntry {
    /// The card left `pile` from `position`.
    #[must_use]
    pub fn moved(move_index: u32, pile: PileId, position: usize) -> Self {
        Self {
            move_index,
            prior_pile: Some(pile),
            prior_position: Some(position),
            flipped: false,
            reversal: false,
        }
    }

    /// The card left `pile` from `position` and was turned face-up.
    #[must_use]
    pub fn moved_and_flipped(move_index: u32, pile: PileId, position: usize) -> Self {
        Self {
            flipped: true,
            ..Self::moved(move_index, pile, position)
        }
    }

    /// The card was turned face-up in place.
    #[must_use]
    pub fn flipped(move_index: u32) -> Self {
        Self {
            move_index,
            prior_pile: None,
            prior_position: None,
            flipped: true,
            reversal: false,
        }
    }

    /// The card was put back by an undo, leaving `pile` at `position`.
    #[must_use]
    pub fn reversal(move_index: u32, pile: PileId, position: usize) -> Self {
        Self {
            reversal: true,
            ..Self::moved(move_index, pile, position)
        }
    }

    /// Prior location, if both pile and position were recorded.
    #[must_use]
    pub fn prior_location(&self) -> Option<(PileId, usize)> {
        match (self.prior_pile, self.prior_position) {
            (Some(pile), Some(position)) => Some((pile, position)),
            _ => None,
        }
    }
}

/// Ordered move log of a single card.
///
/// Move indices only grow, so entries are appended in index order and
/// lookups scan from the newest end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHistory {
    entries: SmallVec<[HistoryEntry; 4]>,
}

impl CardHistory {
    /// Record an entry.
    ///
    /// A card can be touched twice under one index (moved onto a pile, then
    /// swept to the foundation with a completed run). The first location is
    /// the one an undo must restore, so a second entry for the same index
    /// only adds its flip flag.
    pub fn record(&mut self, entry: HistoryEntry) {
        match self.entries.last_mut() {
            Some(last) if last.move_index == entry.move_index => {
                if last.prior_location().is_none() {
                    last.prior_pile = entry.prior_pile;
                    last.prior_position = entry.prior_position;
                }
                last.flipped |= entry.flipped;
            }
            _ => {
                debug_assert!(
                    self.entries.last().map_or(true, |e| e.move_index < entry.move_index),
                    "history entries must be recorded in move order"
                );
                self.entries.push(entry);
            }
        }
    }

    /// Entry for a move index, ignoring undo reversals.
    #[must_use]
    pub fn get(&self, move_index: u32) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .take_while(|e| e.move_index >= move_index)
            .find(|e| e.move_index == move_index && !e.reversal)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
