//! Game implementations.

pub mod spider;

pub use spider::{SpiderRules, SpiderRulesBuilder};
