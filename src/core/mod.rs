//! Core types: gestures, verdicts, RNG, configuration, errors.
//!
//! Everything here is immutable or owned by a single session. The round
//! lifecycle built on top of these lives in `round`.

pub mod gesture;
pub mod verdict;
pub mod rng;
pub mod config;
pub mod error;

pub use gesture::Gesture;
pub use verdict::Verdict;
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::RoundError;
