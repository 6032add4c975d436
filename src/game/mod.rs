//! Round lifecycle: rounds, state, the typestate engine, and sessions.
//!
//! - `Round`: the computer's gesture and required outcome, and how a user
//!   gesture is judged against them
//! - `RoundState`: everything a session mutates (RNG, score, history)
//! - `RoundEngine`: compile-time phase checks (`Open` / `Resolved`)
//! - `Session`: runtime phase checks plus `RoundObserver` notifications

pub mod round;
pub mod history;
pub mod state;
pub mod engine;
pub mod observer;
pub mod session;

pub use round::Round;
pub use history::{RoundHistory, RoundRecord, Scoreboard};
pub use state::RoundState;
pub use engine::{Open, Phase, Resolved, RoundEngine};
pub use observer::{LoggingObserver, RoundObserver};
pub use session::{Session, SessionEngine};
