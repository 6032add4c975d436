//! Hand gestures and the cyclic beats relationship.
//!
//! The three gestures form a fixed cycle `[Rock, Paper, Scissors]`. Each
//! gesture beats the one before it and is beaten by the one after it:
//!
//! - Paper beats Rock
//! - Scissors beats Paper
//! - Rock beats Scissors
//!
//! Both directions are derived from the cycle index, so there are no
//! parallel lookup tables to keep in sync.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::RoundError;

/// One of the three hand gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    /// Canonical cycle order. Also the display order of the choice buttons.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Number of gestures in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the canonical cycle (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Gesture::Rock => 0,
            Gesture::Paper => 1,
            Gesture::Scissors => 2,
        }
    }

    /// Gesture at a cycle position. Wraps around, so any `usize` is valid.
    ///
    /// ```
    /// use rps_engine::core::Gesture;
    ///
    /// assert_eq!(Gesture::from_index(0), Gesture::Rock);
    /// assert_eq!(Gesture::from_index(4), Gesture::Paper);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The gesture this one defeats.
    #[must_use]
    pub const fn beats(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// The gesture that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Check whether `self` defeats `other` under the standard rules.
    #[must_use]
    pub fn defeats(self, other: Gesture) -> bool {
        self.beats() == other
    }

    /// Upper-case label shown on buttons and in the prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Gesture::Rock => "ROCK",
            Gesture::Paper => "PAPER",
            Gesture::Scissors => "SCISSORS",
        }
    }

    /// Emoji rendering of the hand.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Gesture::Rock => "👊",
            Gesture::Paper => "🖐",
            Gesture::Scissors => "✌️",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gesture {
    type Err = RoundError;

    /// Parse a gesture name, ignoring case and surrounding whitespace.
    /// Single-letter shorthands `r`, `p` and `s` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Gesture::Rock),
            "paper" | "p" => Ok(Gesture::Paper),
            "scissors" | "s" => Ok(Gesture::Scissors),
            _ => Err(RoundError::UnknownGesture(s.to_string())),
        }
    }
}
