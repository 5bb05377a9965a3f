//! Python bindings for the rust-spider engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_spider
//!
//! env = rust_spider.SpiderEnv(seeded=False, seed=42)
//! obs = env.reset()
//!
//! mask = env.action_mask()
//! obs, reward, terminated, truncated, info = env.step(1, 0, 0)  # deal
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_core::*;
pub use py_env::*;

/// rust-spider: two-deck Spider solitaire as an RL environment.
#[pymodule]
fn rust_spider(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PySpiderEnv>()?;
    m.add("ACTION_SPACE_SIZE", crate::core::ACTION_SPACE_SIZE)?;
    Ok(())
}
