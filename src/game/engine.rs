//! Typestate round engine.
//!
//! `RoundEngine<Open>` accepts exactly one `resolve_round`, which consumes
//! it and yields a `RoundEngine<Resolved>`. Only a resolved engine can
//! `start_next_round`. Resolving twice, or drawing a new round over an
//! unacknowledged verdict, does not compile:
//!
//! ```compile_fail
//! use rps_engine::core::{EngineConfig, Gesture};
//! use rps_engine::game::RoundEngine;
//!
//! let engine = RoundEngine::new(&EngineConfig::default());
//! let (resolved, _) = engine.resolve_round(Gesture::Rock);
//! resolved.resolve_round(Gesture::Paper); // no such method on Resolved
//! ```
//!
//! ## Example
//!
//! ```
//! use rps_engine::core::{EngineConfig, Verdict};
//! use rps_engine::game::RoundEngine;
//!
//! let engine = RoundEngine::new(&EngineConfig::default().with_seed(7));
//! let answer = engine.round().required_gesture();
//!
//! let (resolved, verdict) = engine.resolve_round(answer);
//! assert_eq!(verdict, Verdict::Win);
//! assert_eq!(resolved.score(), 1);
//!
//! let engine = resolved.start_next_round();
//! assert_eq!(engine.round_number(), 2);
//! ```

use super::history::RoundRecord;
use super::round::Round;
use super::state::RoundState;
use crate::core::{EngineConfig, Gesture, Verdict};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Open {}
    impl Sealed for super::Resolved {}
}

/// Round phase marker.
pub trait Phase: sealed::Sealed {
    /// Phase name for logs and debugging.
    const NAME: &'static str;
}

/// A round is open and waiting for the user's gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Open;

/// A verdict has been produced and awaits acknowledgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    record: RoundRecord,
}

impl Phase for Open {
    const NAME: &'static str = "open";
}

impl Phase for Resolved {
    const NAME: &'static str = "resolved";
}

/// Round engine in phase `P`.
#[derive(Clone, Debug)]
pub struct RoundEngine<P: Phase = Open> {
    state: RoundState,
    phase: P,
}

impl RoundEngine<Open> {
    /// Start a session with a randomized first round.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::from_state(RoundState::new(config))
    }

    /// Start a session whose first round is fixed.
    #[must_use]
    pub fn with_round(config: &EngineConfig, round: Round) -> Self {
        Self::from_state(RoundState::with_round(config, round))
    }

    pub(crate) fn from_state(state: RoundState) -> Self {
        Self { state, phase: Open }
    }

    /// Resolve the open round with the user's gesture.
    ///
    /// Scores one point on a WIN. Returns the resolved engine together with
    /// the verdict for immediate display.
    #[must_use]
    pub fn resolve_round(mut self, user_gesture: Gesture) -> (RoundEngine<Resolved>, Verdict) {
        let record = self.state.resolve(user_gesture);
        let resolved = RoundEngine {
            state: self.state,
            phase: Resolved { record },
        };
        (resolved, record.verdict)
    }
}

impl RoundEngine<Resolved> {
    pub(crate) fn from_resolved(state: RoundState, record: RoundRecord) -> Self {
        Self {
            state,
            phase: Resolved { record },
        }
    }

    /// Acknowledge the verdict and draw the next round.
    #[must_use]
    pub fn start_next_round(mut self) -> RoundEngine<Open> {
        self.state.open_next();
        RoundEngine::from_state(self.state)
    }

    /// Verdict awaiting acknowledgment.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.phase.record.verdict
    }

    /// Full record of the resolved round.
    #[must_use]
    pub fn record(&self) -> &RoundRecord {
        &self.phase.record
    }
}

impl<P: Phase> RoundEngine<P> {
    /// Name of the current phase.
    #[must_use]
    pub fn phase_name(&self) -> &'static str {
        P::NAME
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        self.state.round()
    }

    #[must_use]
    pub fn computer_gesture(&self) -> Gesture {
        self.state.computer_gesture()
    }

    #[must_use]
    pub fn computer_should_win(&self) -> bool {
        self.state.computer_should_win()
    }

    #[must_use]
    pub fn round_number(&self) -> u64 {
        self.state.round_number()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.state.last_verdict()
    }

    /// Give up the engine, keeping its state.
    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }
}
