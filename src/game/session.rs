//! Runtime-checked session for front-ends that keep the game in one field.
//!
//! Event-driven UIs (button callbacks, Python objects) cannot thread a
//! consuming typestate through their handlers. `Session` holds the same
//! `RoundState` as `RoundEngine` and checks the phase on every call instead,
//! returning `RoundError` on misuse and leaving the state untouched.

use super::engine::{Open, Resolved, RoundEngine};
use super::history::{RoundHistory, RoundRecord, Scoreboard};
use super::observer::RoundObserver;
use super::round::Round;
use super::state::RoundState;
use crate::core::{EngineConfig, Gesture, RoundError, Verdict};

/// A game session with runtime phase checks and observers.
pub struct Session {
    state: RoundState,
    /// `Some` while a verdict awaits acknowledgment.
    pending: Option<RoundRecord>,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl Session {
    /// Start a session with a randomized first round.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::from(RoundEngine::new(config))
    }

    /// Register an observer. If a round is open it is announced right away.
    pub fn subscribe(&mut self, mut observer: Box<dyn RoundObserver>) {
        if self.pending.is_none() {
            observer.round_started(self.state.round_number(), self.state.round());
        }
        self.observers.push(observer);
    }

    /// Whether a round is waiting for the user's gesture.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_none()
    }

    /// Resolve the open round.
    ///
    /// Fails with `RoundNotOpen` if the previous verdict has not been
    /// acknowledged with `start_next_round`.
    pub fn resolve_round(&mut self, user_gesture: Gesture) -> Result<Verdict, RoundError> {
        if self.pending.is_some() {
            return Err(RoundError::RoundNotOpen);
        }

        let record = self.state.resolve(user_gesture);
        self.pending = Some(record);

        let scoreboard = *self.state.scoreboard();
        for observer in &mut self.observers {
            observer.round_resolved(&record, &scoreboard);
        }
        Ok(record.verdict)
    }

    /// Parse `input` as a gesture and resolve the open round with it.
    pub fn resolve_round_str(&mut self, input: &str) -> Result<Verdict, RoundError> {
        let gesture: Gesture = input.parse()?;
        self.resolve_round(gesture)
    }

    /// Acknowledge the pending verdict and draw the next round.
    ///
    /// Fails with `RoundNotResolved` while a round is still open.
    pub fn start_next_round(&mut self) -> Result<(), RoundError> {
        if self.pending.take().is_none() {
            return Err(RoundError::RoundNotResolved);
        }

        self.state.open_next();
        let round = *self.state.round();
        let round_number = self.state.round_number();
        for observer in &mut self.observers {
            observer.round_started(round_number, &round);
        }
        Ok(())
    }

    /// Record awaiting acknowledgment, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&RoundRecord> {
        self.pending.as_ref()
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

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        self.state.scoreboard()
    }

    #[must_use]
    pub fn history(&self) -> &RoundHistory {
        self.state.history()
    }

    /// Convert back into a typestate engine. Observers are dropped.
    #[must_use]
    pub fn into_engine(self) -> SessionEngine {
        match self.pending {
            None => SessionEngine::Open(RoundEngine::from_state(self.state)),
            Some(record) => SessionEngine::Resolved(RoundEngine::from_resolved(self.state, record)),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl From<RoundEngine<Open>> for Session {
    fn from(engine: RoundEngine<Open>) -> Self {
        Self {
            state: engine.into_state(),
            pending: None,
            observers: Vec::new(),
        }
    }
}

impl From<RoundEngine<Resolved>> for Session {
    fn from(engine: RoundEngine<Resolved>) -> Self {
        let record = *engine.record();
        Self {
            state: engine.into_state(),
            pending: Some(record),
            observers: Vec::new(),
        }
    }
}

/// A typestate engine in whichever phase a `Session` was in.
#[derive(Clone, Debug)]
pub enum SessionEngine {
    Open(RoundEngine<Open>),
    Resolved(RoundEngine<Resolved>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Started(u64),
        Resolved(u64, Verdict, u32),
    }

    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl RoundObserver for Recorder {
        fn round_started(&mut self, round_number: u64, _round: &Round) {
            self.0.borrow_mut().push(Event::Started(round_number));
        }

        fn round_resolved(&mut self, record: &RoundRecord, scoreboard: &Scoreboard) {
            self.0
                .borrow_mut()
                .push(Event::Resolved(record.round_number, record.verdict, scoreboard.score));
        }
    }

    fn session() -> Session {
        Session::new(&EngineConfig::default().with_seed(42))
    }

    #[test]
    fn test_out_of_order_calls_rejected() {
        let mut session = session();
        assert_eq!(session.start_next_round(), Err(RoundError::RoundNotResolved));
        assert_eq!(session.round_number(), 1);

        let answer = session.round().required_gesture();
        assert_eq!(session.resolve_round(answer), Ok(Verdict::Win));
        assert_eq!(session.resolve_round(answer), Err(RoundError::RoundNotOpen));
        assert_eq!(session.score(), 1);

        assert_eq!(session.start_next_round(), Ok(()));
        assert!(session.is_open());
        assert_eq!(session.round_number(), 2);
    }

    #[test]
    fn test_resolve_round_str() {
        let mut session = session();
        assert_eq!(
            session.resolve_round_str("banana"),
            Err(RoundError::UnknownGesture("banana".to_string()))
        );
        assert!(session.is_open());

        let answer = session.round().required_gesture().to_string();
        assert_eq!(session.resolve_round_str(&answer), Ok(Verdict::Win));
    }

    #[test]
    fn test_observers_see_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = session();
        session.subscribe(Box::new(Recorder(Rc::clone(&events))));

        let answer = session.round().required_gesture();
        session.resolve_round(answer).unwrap();
        session.start_next_round().unwrap();
        let wrong = session.round().required_gesture().beats();
        session.resolve_round(wrong).unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                Event::Started(1),
                Event::Resolved(1, Verdict::Win, 1),
                Event::Started(2),
                Event::Resolved(2, Verdict::Lose, 1),
            ]
        );
    }

    #[test]
    fn test_round_trip_through_engine() {
        let mut session = session();
        let answer = session.round().required_gesture();
        session.resolve_round(answer).unwrap();

        let engine = match session.into_engine() {
            SessionEngine::Resolved(engine) => engine,
            SessionEngine::Open(_) => panic!("expected resolved engine"),
        };
        assert_eq!(engine.verdict(), Verdict::Win);

        let session = Session::from(engine.start_next_round());
        assert!(session.is_open());
        assert_eq!(session.score(), 1);
        assert_eq!(session.round_number(), 2);
    }
}
