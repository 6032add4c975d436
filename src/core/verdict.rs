//! Outcome of a resolved round.

use serde::{Deserialize, Serialize};

/// Result of a resolved round, from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The user picked the required gesture.
    Win,
    /// Any other gesture.
    Lose,
}

impl Verdict {
    /// Build from a correctness flag.
    #[must_use]
    pub const fn from_correct(correct: bool) -> Self {
        if correct {
            Verdict::Win
        } else {
            Verdict::Lose
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Verdict::Win)
    }

    /// Points awarded for this verdict.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Verdict::Win => 1,
            Verdict::Lose => 0,
        }
    }

    /// Message shown in the result dialog.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Verdict::Win => "You are correct",
            Verdict::Lose => "You are wrong",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "WIN"),
            Verdict::Lose => write!(f, "LOSE"),
        }
    }
}
