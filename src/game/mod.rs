//! Game flow: sessions, the controller that drives them and the stats reducer

mod controller;
mod session;
mod stats;

pub use controller::{Controller, GuessReport};
pub use session::{ALPHABET, GuessOutcome, LetterState, MAX_WRONG, Session, Status};
pub use stats::{Stats, StatsAction, reduce};
