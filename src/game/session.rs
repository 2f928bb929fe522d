//! Game session state machine
//!
//! A `GameSession` owns everything mutable about one game: the target word,
//! the guess history, the tried-letter tracker, and the termination state.
//! Nothing here reads input or prints; the interactive loop drives it.

use crate::core::{GuessResult, TriedLetters, Word, WordError, score};
use crate::wordlists::WordList;
use std::fmt;

/// Session termination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The player may still submit guesses
    AwaitingGuess,
    /// The target was guessed
    Won,
    /// All guess slots were consumed without a win
    Lost,
}

/// Why a submitted guess was not scored
///
/// `InvalidWord` and `UnknownWord` are recoverable: they consume no guess
/// slot and the player is simply re-prompted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input did not parse as a five-letter word
    InvalidWord(WordError),
    /// A well-formed word that is not in the vocabulary
    UnknownWord(String),
    /// The session already ended
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::UnknownWord(word) => {
                write!(f, "{word} not found in list. Please guess a valid word from the wordlist")
            }
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

/// One game: fixed target, bounded guesses, accumulated feedback
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    target: Word,
    max_guesses: usize,
    words: &'a WordList,
    history: Vec<GuessResult>,
    tried: TriedLetters,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a session for `target` with a fixed guess budget
    ///
    /// The target itself need not be in `words`; membership applies only to
    /// guesses.
    #[must_use]
    pub fn new(target: Word, max_guesses: usize, words: &'a WordList) -> Self {
        Self {
            target,
            max_guesses,
            words,
            history: Vec::with_capacity(max_guesses),
            tried: TriedLetters::new(),
            state: GameState::AwaitingGuess,
        }
    }

    /// Submit one guess
    ///
    /// Rejected guesses (wrong shape, unknown word, finished game) consume no
    /// guess slot and leave the session untouched. An accepted guess is
    /// scored, folded into the tried-letter tracker, appended to history, and
    /// may move the session to `Won` or `Lost`.
    ///
    /// # Errors
    /// Returns `GuessError` when the guess is rejected.
    pub fn submit(&mut self, input: &str) -> Result<&GuessResult, GuessError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(input).map_err(GuessError::InvalidWord)?;

        if !self.words.contains(&guess) {
            return Err(GuessError::UnknownWord(guess.text()));
        }

        let result = score(&guess, &self.target);
        self.tried.absorb(&result);
        self.history.push(result);

        if guess == self.target {
            self.state = GameState::Won;
        } else if self.history.len() >= self.max_guesses {
            self.state = GameState::Lost;
        }

        Ok(self.history.last().expect("guess was just appended"))
    }

    /// The hidden target word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Current termination state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Whether the session accepts more guesses
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::AwaitingGuess)
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// Guess slots consumed
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Total guess slots
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Best-status-per-letter tracker for the hint row
    #[must_use]
    pub const fn tried_letters(&self) -> &TriedLetters {
        &self.tried
    }

    /// Final score: guesses used plus distinct letters tried
    ///
    /// Lower is better. Matches the end-of-game summary shown on a win.
    #[must_use]
    pub fn score_value(&self) -> usize {
        self.history.len() + self.tried.len()
    }
}
