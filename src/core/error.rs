//! Errors reported by the runtime-checked layers.
//!
//! The typestate engine has no error paths: misuse does not compile. These
//! errors only surface where the round phase or the gesture arrives as data
//! (`Session`, text input, Python bindings).

/// Round protocol misuse or unparseable input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// A verdict is waiting to be acknowledged; the round cannot be resolved again.
    RoundNotOpen,
    /// The open round has not been resolved yet; starting another would discard it.
    RoundNotResolved,
    /// Text that does not name a gesture.
    UnknownGesture(String),
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundError::RoundNotOpen => write!(f, "round already resolved; start the next round first"),
            RoundError::RoundNotResolved => write!(f, "round still open; resolve it before starting another"),
            RoundError::UnknownGesture(s) => write!(f, "unknown gesture {:?} (expected rock, paper or scissors)", s),
        }
    }
}

impl std::error::Error for RoundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RoundError::UnknownGesture("spock".into()).to_string(),
            "unknown gesture \"spock\" (expected rock, paper or scissors)"
        );
        assert!(RoundError::RoundNotOpen.to_string().contains("already resolved"));
    }
}
