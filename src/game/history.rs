//! Resolved-round records, bounded history, and score statistics.
//!
//! History uses an `im` persistent vector so snapshots handed to the
//! presentation layer clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::round::Round;
use crate::core::{Gesture, Verdict};

/// Everything that happened in one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index within the session.
    pub round_number: u64,
    pub computer_gesture: Gesture,
    pub computer_should_win: bool,
    /// The gesture that would have won.
    pub required_gesture: Gesture,
    /// The gesture the user picked.
    pub user_gesture: Gesture,
    pub verdict: Verdict,
}

impl RoundRecord {
    /// Judge `user_gesture` against `round` and capture the result.
    #[must_use]
    pub fn judge(round_number: u64, round: &Round, user_gesture: Gesture) -> Self {
        Self {
            round_number,
            computer_gesture: round.computer_gesture,
            computer_should_win: round.computer_should_win,
            required_gesture: round.required_gesture(),
            user_gesture,
            verdict: round.judge(user_gesture),
        }
    }

    /// The round the record was judged against.
    #[must_use]
    pub fn round(&self) -> Round {
        Round::new(self.computer_gesture, self.computer_should_win)
    }
}

/// Bounded log of resolved rounds, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHistory {
    records: Vector<RoundRecord>,
    capacity: usize,
}

impl RoundHistory {
    /// Create an empty history holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vector::new(),
            capacity,
        }
    }

    /// Append a record, evicting the oldest when full.
    pub fn push(&mut self, record: RoundRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    /// O(1) snapshot of the underlying records.
    #[must_use]
    pub fn snapshot(&self) -> Vector<RoundRecord> {
        self.records.clone()
    }
}

/// Session score and derived statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Number of WIN verdicts.
    pub score: u32,
    /// Number of resolved rounds.
    pub rounds_played: u32,
    /// Consecutive WINs ending at the latest round.
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Scoreboard {
    /// Fold one verdict into the totals.
    pub fn record(&mut self, verdict: Verdict) {
        self.rounds_played += 1;
        self.score += verdict.points();
        if verdict.is_win() {
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Fraction of rounds won. `None` before the first round.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.rounds_played == 0 {
            None
        } else {
            Some(f64::from(self.score) / f64::from(self.rounds_played))
        }
    }

    /// Title of the result dialog.
    #[must_use]
    pub fn score_title(&self) -> String {
        format!("You have {} points", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u64, user: Gesture) -> RoundRecord {
        RoundRecord::judge(n, &Round::new(Gesture::Rock, true), user)
    }

    #[test]
    fn test_record_judge() {
        let win = record(1, Gesture::Scissors);
        assert_eq!(win.required_gesture, Gesture::Scissors);
        assert_eq!(win.verdict, Verdict::Win);
        assert_eq!(win.round(), Round::new(Gesture::Rock, true));

        let lose = record(2, Gesture::Paper);
        assert_eq!(lose.verdict, Verdict::Lose);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = RoundHistory::new(3);
        for n in 1..=5 {
            history.push(record(n, Gesture::Rock));
        }

        assert_eq!(history.len(), 3);
        let numbers: Vec<_> = history.iter().map(|r| r.round_number).collect();
        assert_eq!(numbers, vec![3, 4, 5]);
        assert_eq!(history.last().map(|r| r.round_number), Some(5));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = RoundHistory::new(0);
        history.push(record(1, Gesture::Rock));
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut history = RoundHistory::new(10);
        history.push(record(1, Gesture::Rock));
        let snapshot = history.snapshot();
        history.push(record(2, Gesture::Rock));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_scoreboard() {
        let mut board = Scoreboard::default();
        assert_eq!(board.accuracy(), None);
        assert_eq!(board.score_title(), "You have 0 points");

        board.record(Verdict::Win);
        board.record(Verdict::Win);
        board.record(Verdict::Lose);
        board.record(Verdict::Win);

        assert_eq!(board.score, 3);
        assert_eq!(board.rounds_played, 4);
        assert_eq!(board.current_streak, 1);
        assert_eq!(board.best_streak, 2);
        assert_eq!(board.accuracy(), Some(0.75));
        assert_eq!(board.score_title(), "You have 3 points");
    }
}
