//! Session-owned round state.
//!
//! `RoundState` holds everything that changes during a session: the RNG,
//! the open round, the score and the history. It carries no notion of
//! phase; `RoundEngine` and `Session` decide when its mutators may run.

use log::debug;

use super::history::{RoundHistory, RoundRecord, Scoreboard};
use super::round::Round;
use crate::core::{EngineConfig, GameRng, Gesture, Verdict};

/// Mutable game state for one session.
#[derive(Clone, Debug)]
pub struct RoundState {
    rng: GameRng,
    round: Round,
    round_number: u64,
    scoreboard: Scoreboard,
    last_verdict: Option<Verdict>,
    history: RoundHistory,
}

impl RoundState {
    /// Create session state with a freshly drawn first round.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = config.rng();
        let round = Round::random(&mut rng);
        Self::from_parts(config, rng, round)
    }

    /// Create session state whose first round is `round`.
    ///
    /// Later rounds are still drawn from the configured RNG.
    #[must_use]
    pub fn with_round(config: &EngineConfig, round: Round) -> Self {
        Self::from_parts(config, config.rng(), round)
    }

    fn from_parts(config: &EngineConfig, rng: GameRng, round: Round) -> Self {
        let state = Self {
            rng,
            round,
            round_number: 1,
            scoreboard: Scoreboard::default(),
            last_verdict: None,
            history: RoundHistory::new(config.history_capacity),
        };
        state.log_opened();
        state
    }

    // === Display state ===

    /// The open (or just resolved) round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn computer_gesture(&self) -> Gesture {
        self.round.computer_gesture
    }

    #[must_use]
    pub fn computer_should_win(&self) -> bool {
        self.round.computer_should_win
    }

    /// 1-based index of the current round.
    #[must_use]
    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Verdict of the most recently resolved round.
    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    #[must_use]
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Seed of the session RNG, for replaying the same rounds.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Mutators (phase checked by callers) ===

    /// Judge the open round and fold the verdict into score and history.
    pub(crate) fn resolve(&mut self, user_gesture: Gesture) -> RoundRecord {
        let record = RoundRecord::judge(self.round_number, &self.round, user_gesture);

        self.last_verdict = Some(record.verdict);
        self.scoreboard.record(record.verdict);
        self.history.push(record);

        debug!(
            "round {} resolved: user {} (required {}) -> {}, score {}",
            record.round_number,
            record.user_gesture,
            record.required_gesture,
            record.verdict,
            self.scoreboard.score
        );
        record
    }

    /// Draw the next round.
    pub(crate) fn open_next(&mut self) {
        self.round = Round::random(&mut self.rng);
        self.round_number += 1;
        self.log_opened();
    }

    fn log_opened(&self) {
        debug!("round {} opened: {}", self.round_number, self.round.prompt());
    }
}
