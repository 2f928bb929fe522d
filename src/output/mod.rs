//! Terminal output formatting
//!
//! Colored tile rendering for guesses, the tried-letter hint row, and the
//! end-of-game summaries.

pub mod display;

pub use display::{
    guess_row, print_loss_summary, print_turn, print_win_summary, reveal_row, tried_row,
};
