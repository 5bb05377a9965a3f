//! Reinforcement-learning environment.
//!
//! ## Key Types
//!
//! - `SpiderEnv`: reset/step over one game, action masks, hints
//! - `EnvConfig`: deal order, observation encoding, step limit, scoring
//! - `StepOutcome`, `StepInfo`: what a step reports
//!
//! ## Usage
//!
//! ```rust
//! use rust_spider::env::{EnvConfig, SpiderEnv};
//!
//! let mut env = SpiderEnv::new(EnvConfig::fixed());
//! let observation = env.reset();
//! assert_eq!(observation.shape, vec![12, 104]);
//!
//! // DEAL: one card onto each tableau pile.
//! let outcome = env.step_raw(1, 0, 0);
//! assert!(outcome.info.valid);
//! assert_eq!(outcome.reward, -5.0);
//! ```

pub mod config;
pub mod spider_env;

pub use config::EnvConfig;
pub use spider_env::{SpiderEnv, StepError, StepInfo, StepOutcome};
