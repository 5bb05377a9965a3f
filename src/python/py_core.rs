//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, ActionError, PileId};

pub(crate) fn action_error(err: ActionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action from a `(verb, source, destination)` triple.
    ///
    /// Verbs: 0 = move, 1 = deal, 2 = undo. Piles are 0-9.
    #[new]
    #[pyo3(signature = (verb, source = 0, destination = 0))]
    fn new(verb: i64, source: i64, destination: i64) -> PyResult<Self> {
        Action::from_triple(verb, source, destination)
            .map(Self)
            .map_err(action_error)
    }

    /// Decode a flat action index in `0..300`.
    #[staticmethod]
    fn from_index(index: usize) -> PyResult<Self> {
        Action::from_index(index).map(Self).map_err(action_error)
    }

    /// Move the top run of `source` onto `destination`.
    #[staticmethod]
    fn move_run(source: usize, destination: usize) -> PyResult<Self> {
        let pile = |raw: usize| {
            PileId::tableau(raw).ok_or_else(|| action_error(ActionError::PileOutOfRange(raw as i64)))
        };
        Ok(Self(Action::move_run(pile(source)?, pile(destination)?)))
    }

    #[staticmethod]
    fn deal() -> Self {
        Self(Action::deal())
    }

    #[staticmethod]
    fn undo() -> Self {
        Self(Action::undo())
    }

    #[getter]
    fn verb(&self) -> u8 {
        self.0.verb as u8
    }

    #[getter]
    fn source(&self) -> usize {
        self.0.source.index()
    }

    #[getter]
    fn destination(&self) -> usize {
        self.0.destination.index()
    }

    /// Flat index in `0..300`.
    fn index(&self) -> usize {
        self.0.to_index()
    }

    /// `(verb, source, destination)`.
    fn triple(&self) -> (u8, usize, usize) {
        (self.verb(), self.source(), self.destination())
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.to_index() as u64
    }
}
