//! # rps-engine
//!
//! Round engine for a rock-paper-scissors reflex drill.
//!
//! Each round the computer shows a gesture and a required outcome
//! ("ROCK WINS AGAINST" / "ROCK LOSES AGAINST"). The user answers with one
//! gesture; exactly one answer is correct and scores a point.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Independent**: The crate owns rules and scoring only.
//!    Front-ends read display state and forward the user's choice.
//!
//! 2. **Misuse Is Unrepresentable**: `RoundEngine<Open>` can only be
//!    resolved, `RoundEngine<Resolved>` can only start the next round.
//!    `Session` offers the same lifecycle with runtime checks for
//!    event-driven callers.
//!
//! 3. **Deterministic**: All randomness flows through a seedable `GameRng`,
//!    so any session can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Gestures, verdicts, RNG, configuration, errors
//! - `game`: Rounds, session state, typestate engine, sessions, observers
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, Gesture, RoundError, Verdict};

pub use crate::game::{
    Round, RoundState,
    RoundEngine, Open, Resolved, Phase,
    Session, SessionEngine,
    RoundHistory, RoundRecord, Scoreboard,
    RoundObserver, LoggingObserver,
};
