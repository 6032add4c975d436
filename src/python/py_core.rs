//! Core type bindings for Python.
//!
//! Gestures cross the boundary as lowercase strings ("rock", "paper",
//! "scissors"); verdicts as "WIN" / "LOSE".

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Gesture, RoundError};
use crate::game::{Round, RoundRecord};

/// Map a round error to a Python `ValueError`.
pub(crate) fn to_py_err(err: RoundError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

pub(crate) fn parse_gesture(name: &str) -> PyResult<Gesture> {
    name.parse().map_err(to_py_err)
}

pub(crate) fn gesture_name(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Rock => "rock",
        Gesture::Paper => "paper",
        Gesture::Scissors => "scissors",
    }
}

/// All gestures in cycle order.
#[pyfunction]
pub fn gestures() -> Vec<&'static str> {
    Gesture::ALL.iter().map(|&g| gesture_name(g)).collect()
}

/// The gesture that wins a round showing `computer_gesture`.
#[pyfunction]
pub fn required_gesture(computer_gesture: &str, computer_should_win: bool) -> PyResult<&'static str> {
    let round = Round::new(parse_gesture(computer_gesture)?, computer_should_win);
    Ok(gesture_name(round.required_gesture()))
}

/// Python wrapper for RoundRecord.
#[pyclass(name = "RoundRecord")]
#[derive(Clone, Debug)]
pub struct PyRoundRecord(pub RoundRecord);

#[pymethods]
impl PyRoundRecord {
    #[getter]
    fn round_number(&self) -> u64 {
        self.0.round_number
    }

    #[getter]
    fn computer_gesture(&self) -> &'static str {
        gesture_name(self.0.computer_gesture)
    }

    #[getter]
    fn computer_should_win(&self) -> bool {
        self.0.computer_should_win
    }

    #[getter]
    fn required_gesture(&self) -> &'static str {
        gesture_name(self.0.required_gesture)
    }

    #[getter]
    fn user_gesture(&self) -> &'static str {
        gesture_name(self.0.user_gesture)
    }

    /// "WIN" or "LOSE".
    #[getter]
    fn verdict(&self) -> String {
        self.0.verdict.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundRecord(round={}, prompt={:?}, user={}, verdict={})",
            self.0.round_number,
            self.0.round().prompt(),
            gesture_name(self.0.user_gesture),
            self.0.verdict
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
