//! Notification hook for presentation layers.
//!
//! A `Session` calls its observers after every state change, so a front-end
//! can redraw without polling.

use log::info;

use super::history::{RoundRecord, Scoreboard};
use super::round::Round;

/// Receives round lifecycle events from a `Session`.
///
/// Both methods default to no-ops; implement the ones you need.
pub trait RoundObserver {
    /// A round opened. Also called for the first round when the observer
    /// subscribes to a session whose round is still open.
    fn round_started(&mut self, _round_number: u64, _round: &Round) {}

    /// The open round was resolved.
    fn round_resolved(&mut self, _record: &RoundRecord, _scoreboard: &Scoreboard) {}
}

/// Observer that writes events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

impl RoundObserver for LoggingObserver {
    fn round_started(&mut self, round_number: u64, round: &Round) {
        info!("round {}: {}", round_number, round.prompt());
    }

    fn round_resolved(&mut self, record: &RoundRecord, scoreboard: &Scoreboard) {
        info!(
            "round {}: {} -> {} ({})",
            record.round_number,
            record.user_gesture,
            record.verdict,
            scoreboard.score_title()
        );
    }
}
