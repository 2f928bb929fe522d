//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod score;
mod word;

pub use letters::TriedLetters;
pub use score::{GuessResult, LetterStatus, score};
pub use word::{WORD_LENGTH, Word, WordError};
