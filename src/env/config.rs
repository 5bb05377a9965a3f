//! Environment configuration.

use serde::{Deserialize, Serialize};

use crate::core::{DealOrder, Scoring};
use crate::nn::ObservationEncoding;

/// Settings for a `SpiderEnv`.
///
/// ```
/// use rust_spider::core::DealOrder;
/// use rust_spider::env::EnvConfig;
/// use rust_spider::nn::ObservationEncoding;
///
/// let config = EnvConfig::default()
///     .with_deal_order(DealOrder::Seeded(7))
///     .with_encoding(ObservationEncoding::Pairs)
///     .with_max_steps(500);
///
/// assert_eq!(config.max_steps, Some(500));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Order used by every `reset`.
    pub deal_order: DealOrder,

    /// Observation layout.
    pub encoding: ObservationEncoding,

    /// Truncate episodes after this many steps. `None` = never.
    pub max_steps: Option<u32>,

    /// Score and reward deltas.
    pub scoring: Scoring,
}

impl EnvConfig {
    /// Reproducible episodes: every reset deals the same fixed order.
    #[must_use]
    pub fn fixed() -> Self {
        Self::default().with_deal_order(DealOrder::Fixed)
    }

    #[must_use]
    pub fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.deal_order = order;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: ObservationEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.max_steps = Some(steps);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }
}
