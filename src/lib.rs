//! Wordle Game
//!
//! A terminal word-guessing game: guess the hidden five-letter word within a
//! limited number of tries, with per-letter color feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, Word, score};
//!
//! let guess = Word::new("slate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let result = score(&guess, &target);
//! assert_eq!(result.statuses()[2], LetterStatus::Correct); // the A lines up
//! ```

// Core domain types: words, scoring, tried letters
pub mod core;

// Session state machine and interactive loop
pub mod game;

// Embedded vocabulary and word list lookup
pub mod wordlists;

// Terminal output formatting
pub mod output;
