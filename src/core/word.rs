//! Game word representation
//!
//! A Word stores a validated five-letter word in uppercase, along with letter
//! counts used by the scoring engine for duplicate handling.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every playable word
pub const WORD_LENGTH: usize = 5;

/// A five-letter game word, normalized to ASCII uppercase
///
/// Stores the word as a fixed byte array so positions can be compared without
/// bounds checks on the hot scoring path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, trimming and uppercasing the input
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length after trimming is not exactly 5
    /// - Contains non-ASCII or non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        let char_count = text.chars().count();
        if char_count != WORD_LENGTH {
            return Err(WordError::InvalidLength(char_count));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(text.bytes()) {
            *slot = b.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Get the word as uppercase letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the word as an owned uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        // Letters are validated ASCII, so the bytes are always valid UTF-8
        String::from_utf8_lossy(&self.letters).into_owned()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the scoring engine when resolving duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &b in &self.letters {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
