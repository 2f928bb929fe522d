//! Game orchestration
//!
//! The session state machine and the interactive loop that drives it.

pub mod play;
mod session;

pub use play::{PlayOptions, run, run_with_input};
pub use session::{GameSession, GameState, GuessError};
