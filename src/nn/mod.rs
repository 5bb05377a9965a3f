//! Observation encoding for learning code.
//!
//! ## Overview
//!
//! - **Traits**: `StateEncoder` turns a `GameState` into an `EncodedState`
//! - **Encoders**: `FlatEncoder` (`[12, 104]`) and `PairEncoder` (`[12, 104, 2]`)
//!
//! ## Usage
//!
//! ```rust
//! use rust_spider::games::SpiderRules;
//! use rust_spider::nn::{FlatEncoder, StateEncoder};
//!
//! let state = SpiderRules::default().deal(true);
//! let encoded = FlatEncoder.encode(&state);
//!
//! assert_eq!(encoded.shape, vec![12, 104]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{FlatEncoder, ObservationEncoding, PairEncoder};
pub use traits::{EncodedState, StateEncoder, EMPTY, FACE_DOWN};
