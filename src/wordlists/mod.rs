//! Game vocabulary
//!
//! Provides the embedded word list compiled into the binary plus the
//! normalized, sorted `WordList` used for membership tests and target picks.

mod embedded;
mod loader;

pub use embedded::{RAW_WORDS, RAW_WORDS_COUNT};
pub use loader::WordList;
