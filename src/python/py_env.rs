//! Environment bindings for Python.

use numpy::{PyArray1, PyArrayDyn, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::DealOrder;
use crate::env::{EnvConfig, SpiderEnv, StepOutcome};
use crate::nn::{EncodedState, ObservationEncoding};

use super::py_core::PyAction;

fn to_numpy<'py>(py: Python<'py>, encoded: &EncodedState) -> PyResult<Bound<'py, PyArrayDyn<i8>>> {
    PyArray1::from_vec_bound(py, encoded.to_i8()).reshape(encoded.shape.clone())
}

/// Python wrapper for SpiderEnv.
///
/// Gymnasium-style reset/step over one Spider game. Observations are
/// `int8` arrays shaped `(12, 104)` or `(12, 104, 2)`.
#[pyclass(name = "SpiderEnv")]
pub struct PySpiderEnv {
    env: SpiderEnv,
}

#[pymethods]
impl PySpiderEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seeded: Deal in fixed construction order (True) or shuffle (False)
    /// - seed: Shuffle seed; overrides `seeded` when given
    /// - pairs: Use `(12, 104, 2)` rank/suit observations
    /// - max_steps: Truncate episodes after this many steps
    #[new]
    #[pyo3(signature = (seeded = true, seed = None, pairs = false, max_steps = None))]
    fn new(seeded: bool, seed: Option<u64>, pairs: bool, max_steps: Option<u32>) -> Self {
        let order = seed.map_or_else(|| DealOrder::from_seeded(seeded), DealOrder::Seeded);
        let encoding = if pairs {
            ObservationEncoding::Pairs
        } else {
            ObservationEncoding::Flat
        };
        let mut config = EnvConfig::default()
            .with_deal_order(order)
            .with_encoding(encoding);
        config.max_steps = max_steps;
        Self {
            env: SpiderEnv::new(config),
        }
    }

    /// Deal a new game and return its observation.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> PyResult<Bound<'py, PyArrayDyn<i8>>> {
        let observation = match seed {
            Some(seed) => self.env.reset_with(DealOrder::Seeded(seed)),
            None => self.env.reset(),
        };
        to_numpy(py, &observation)
    }

    /// Apply `(verb, source, destination)`.
    ///
    /// Returns `(observation, reward, terminated, truncated, info)`.
    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        verb: i64,
        source: i64,
        destination: i64,
    ) -> PyResult<(Bound<'py, PyArrayDyn<i8>>, f32, bool, bool, Bound<'py, PyDict>)> {
        let outcome = self.env.step_raw(verb, source, destination);
        Self::unpack(py, outcome)
    }

    /// Apply an `Action`.
    #[allow(clippy::type_complexity)]
    fn step_action<'py>(
        &mut self,
        py: Python<'py>,
        action: &PyAction,
    ) -> PyResult<(Bound<'py, PyArrayDyn<i8>>, f32, bool, bool, Bound<'py, PyDict>)> {
        let outcome = self.env.step(action.0);
        Self::unpack(py, outcome)
    }

    /// Current observation.
    fn observe<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<i8>>> {
        to_numpy(py, &self.env.observe())
    }

    /// Boolean mask over the 300 flat action indices.
    fn action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_vec_bound(py, self.env.action_mask())
    }

    /// Hint data as `(card, source, [(pile, card), ...])` tuples of raw ids.
    fn possible_moves(&self) -> Vec<(u16, usize, Vec<(usize, u16)>)> {
        self.env
            .possible_moves()
            .into_iter()
            .map(|hint| {
                let onto = hint.onto.iter().map(|&(pile, card)| (pile.index(), card.raw())).collect();
                (hint.card.raw(), hint.source.index(), onto)
            })
            .collect()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.env.score()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.env.state().move_count()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.env.is_game_over()
    }

    #[getter]
    fn observation_shape(&self) -> Vec<usize> {
        self.env.observation_shape()
    }

    fn __repr__(&self) -> String {
        format!(
            "SpiderEnv(score={}, moves={}, stock={})",
            self.env.score(),
            self.env.state().move_count(),
            self.env.state().stock_remaining()
        )
    }
}

impl PySpiderEnv {
    #[allow(clippy::type_complexity)]
    fn unpack<'py>(
        py: Python<'py>,
        outcome: StepOutcome,
    ) -> PyResult<(Bound<'py, PyArrayDyn<i8>>, f32, bool, bool, Bound<'py, PyDict>)> {
        let info = PyDict::new_bound(py);
        info.set_item("valid", outcome.info.valid)?;
        info.set_item("error", outcome.info.error.map(|err| err.to_string()))?;
        info.set_item("score", outcome.info.score)?;
        info.set_item("move_count", outcome.info.move_count)?;
        info.set_item("stock_remaining", outcome.info.stock_remaining)?;
        info.set_item("completed_runs", outcome.info.completed_runs)?;

        Ok((
            to_numpy(py, &outcome.observation)?,
            outcome.reward,
            outcome.terminated,
            outcome.truncated,
            info,
        ))
    }
}
