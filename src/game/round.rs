//! A single round: what the computer shows and what the user must answer.
//!
//! The computer displays a gesture and a required outcome. If the computer
//! should win, the user has to pick the gesture the computer's hand beats;
//! otherwise the gesture that beats it. Exactly one of the three choices is
//! correct in every round.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Gesture, Verdict};

/// The computer's side of an open round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// Gesture displayed as the computer's hand.
    pub computer_gesture: Gesture,
    /// Whether the computer's hand must come out on top.
    pub computer_should_win: bool,
}

impl Round {
    #[must_use]
    pub const fn new(computer_gesture: Gesture, computer_should_win: bool) -> Self {
        Self {
            computer_gesture,
            computer_should_win,
        }
    }

    /// Draw a round: uniform gesture, fair coin for the outcome.
    pub fn random(rng: &mut GameRng) -> Self {
        let computer_gesture = rng.gesture();
        let computer_should_win = rng.coin_flip();
        Self::new(computer_gesture, computer_should_win)
    }

    /// The only user gesture that wins this round.
    ///
    /// ```
    /// use rps_engine::core::Gesture;
    /// use rps_engine::game::Round;
    ///
    /// // "ROCK WINS AGAINST" -> the user must show the hand rock beats
    /// let round = Round::new(Gesture::Rock, true);
    /// assert_eq!(round.required_gesture(), Gesture::Scissors);
    /// ```
    #[must_use]
    pub const fn required_gesture(&self) -> Gesture {
        if self.computer_should_win {
            self.computer_gesture.beats()
        } else {
            self.computer_gesture.beaten_by()
        }
    }

    /// Judge a user gesture against this round. Pure; touches no score.
    #[must_use]
    pub fn judge(&self, user_gesture: Gesture) -> Verdict {
        Verdict::from_correct(user_gesture == self.required_gesture())
    }

    /// "WINS" or "LOSES", as used in the prompt.
    #[must_use]
    pub const fn outcome_label(&self) -> &'static str {
        if self.computer_should_win {
            "WINS"
        } else {
            "LOSES"
        }
    }

    /// Prompt line, e.g. `"PAPER LOSES AGAINST"`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} AGAINST", self.computer_gesture.label(), self.outcome_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_should_win_requires_scissors() {
        let round = Round::new(Gesture::Rock, true);
        assert_eq!(round.required_gesture(), Gesture::Scissors);
        assert_eq!(round.judge(Gesture::Scissors), Verdict::Win);
        assert_eq!(round.judge(Gesture::Rock), Verdict::Lose);
        assert_eq!(round.judge(Gesture::Paper), Verdict::Lose);
    }

    #[test]
    fn test_paper_should_lose_requires_scissors() {
        let round = Round::new(Gesture::Paper, false);
        assert_eq!(round.required_gesture(), Gesture::Scissors);
        assert_eq!(round.judge(Gesture::Scissors), Verdict::Win);
        assert_eq!(round.judge(Gesture::Paper), Verdict::Lose);
    }

    #[test]
    fn test_required_gesture_table() {
        let winning_moves = [Gesture::Paper, Gesture::Scissors, Gesture::Rock];
        let losing_moves = [Gesture::Scissors, Gesture::Rock, Gesture::Paper];

        for (i, computer) in Gesture::ALL.into_iter().enumerate() {
            assert_eq!(Round::new(computer, true).required_gesture(), losing_moves[i]);
            assert_eq!(Round::new(computer, false).required_gesture(), winning_moves[i]);
        }
    }

    #[test]
    fn test_exactly_one_winning_choice() {
        for computer in Gesture::ALL {
            for should_win in [true, false] {
                let round = Round::new(computer, should_win);
                let wins = Gesture::ALL
                    .iter()
                    .filter(|&&g| round.judge(g).is_win())
                    .count();
                assert_eq!(wins, 1, "{:?}", round);
            }
        }
    }

    #[test]
    fn test_required_gesture_follows_standard_rules() {
        for computer in Gesture::ALL {
            let should_win = Round::new(computer, true).required_gesture();
            assert!(computer.defeats(should_win));

            let should_lose = Round::new(computer, false).required_gesture();
            assert!(should_lose.defeats(computer));
        }
    }

    #[test]
    fn test_prompt() {
        assert_eq!(Round::new(Gesture::Rock, true).prompt(), "ROCK WINS AGAINST");
        assert_eq!(Round::new(Gesture::Scissors, false).prompt(), "SCISSORS LOSES AGAINST");
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut rng1 = GameRng::new(11);
        let mut rng2 = GameRng::new(11);
        for _ in 0..10 {
            assert_eq!(Round::random(&mut rng1), Round::random(&mut rng2));
        }
    }
}
