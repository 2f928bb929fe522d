//! Word list construction and lookup
//!
//! Builds the game vocabulary from the embedded list or a user-supplied file:
//! entries are trimmed, uppercased, filtered to exactly five letters,
//! deduplicated, and kept sorted so membership is a binary search.

use crate::core::Word;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The game vocabulary: a sorted, deduplicated set of five-letter words
///
/// Immutable after construction; the session only ever reads from it.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list from raw string entries
    ///
    /// Entries that do not normalize to a valid five-letter word are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_raw(&["crane", "slate", "toolong", "crane"]);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &[&str]) -> Self {
        let mut words: Vec<Word> = raw.iter().filter_map(|s| Word::new(s).ok()).collect();
        words.sort();
        words.dedup();

        Self { words }
    }

    /// Load a word list from a newline-delimited file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let raw: Vec<&str> = content.lines().collect();
        Ok(Self::from_raw(&raw))
    }

    /// Membership test via binary search over the sorted vocabulary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Pick a uniformly random word as the session target
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn random(&self) -> Option<Word> {
        let mut rng = rand::rng();
        self.words.choose(&mut rng).cloned()
    }

    /// Number of words in the vocabulary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The sorted words, for inspection
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} five-letter words", self.words.len())
    }
}
