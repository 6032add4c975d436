//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::EngineConfig;
use crate::game::{LoggingObserver, Session};

use super::py_core::{gesture_name, parse_gesture, to_py_err, PyRoundRecord};

/// Python wrapper for Session.
///
/// Out-of-order calls raise `ValueError` and leave the session unchanged.
#[pyclass(name = "Session", unsendable)]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible rounds (None = OS entropy)
    /// - history_capacity: Number of resolved rounds to keep
    /// - log_events: Forward round events to the Rust `log` facade
    #[new]
    #[pyo3(signature = (seed = None, history_capacity = 100, log_events = false))]
    fn new(seed: Option<u64>, history_capacity: usize, log_events: bool) -> Self {
        let config = EngineConfig {
            seed,
            history_capacity,
        };
        let mut session = Session::new(&config);
        if log_events {
            session.subscribe(Box::new(LoggingObserver));
        }
        Self { session }
    }

    #[getter]
    fn computer_gesture(&self) -> &'static str {
        gesture_name(self.session.computer_gesture())
    }

    #[getter]
    fn computer_should_win(&self) -> bool {
        self.session.computer_should_win()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.score()
    }

    #[getter]
    fn round_number(&self) -> u64 {
        self.session.round_number()
    }

    /// Seed of the session RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.session.state().seed()
    }

    /// "WIN", "LOSE", or None before the first resolution.
    #[getter]
    fn last_verdict(&self) -> Option<String> {
        self.session.last_verdict().map(|v| v.to_string())
    }

    /// Whether a round is waiting for a gesture.
    fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Prompt line for the open round.
    fn prompt(&self) -> String {
        self.session.round().prompt()
    }

    /// Dialog title, e.g. "You have 3 points".
    fn score_title(&self) -> String {
        self.session.scoreboard().score_title()
    }

    /// Fraction of rounds won, or None before the first round.
    fn accuracy(&self) -> Option<f64> {
        self.session.scoreboard().accuracy()
    }

    /// Resolve the open round. Returns "WIN" or "LOSE".
    fn resolve_round(&mut self, gesture: &str) -> PyResult<String> {
        let gesture = parse_gesture(gesture)?;
        let verdict = self.session.resolve_round(gesture).map_err(to_py_err)?;
        Ok(verdict.to_string())
    }

    /// Acknowledge the verdict and draw the next round.
    fn start_next_round(&mut self) -> PyResult<()> {
        self.session.start_next_round().map_err(to_py_err)
    }

    /// Resolved rounds, oldest first.
    fn history(&self) -> Vec<PyRoundRecord> {
        self.session.history().iter().copied().map(PyRoundRecord).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(round={}, score={}, open={})",
            self.session.round_number(),
            self.session.score(),
            self.session.is_open()
        )
    }
}
