//! Python bindings for the round engine.
//!
//! Lets a Python front-end drive a session without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import rps_engine as rps
//!
//! session = rps.Session(seed=42)
//! print(session.prompt())           # e.g. "ROCK WINS AGAINST"
//!
//! verdict = session.resolve_round("scissors")
//! print(verdict, session.score_title())
//!
//! session.start_next_round()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rps_engine: round engine for the rock-paper-scissors drill.
///
/// This module provides:
/// - Gesture helpers (listing, judging a round)
/// - A runtime-checked `Session`
/// - `RoundRecord` history entries
#[pymodule]
fn rps_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundRecord>()?;
    m.add_class::<PySession>()?;

    m.add_function(wrap_pyfunction!(py_core::gestures, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::required_gesture, m)?)?;

    Ok(())
}
