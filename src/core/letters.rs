//! Session-scoped tried-letter tracking
//!
//! Remembers the best status ever seen for each letter across a game, shown
//! to the player as the "tried letters" hint row.

use super::score::{GuessResult, LetterStatus};

const ALPHABET_SIZE: usize = 26;

/// Best-status-per-letter map for one game session
///
/// Backed by a fixed array indexed by `letter - b'A'`, so updates are O(1)
/// and iteration for display is always alphabetical with no sorting step.
/// A letter's recorded status only ever moves up the
/// `Absent < Present < Correct` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriedLetters {
    statuses: [Option<LetterStatus>; ALPHABET_SIZE],
}

impl TriedLetters {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter at the given status, upgrading but never downgrading
    ///
    /// Letters outside `A..=Z` are ignored; words are validated upstream so
    /// this only guards against misuse.
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }

        let slot = &mut self.statuses[usize::from(letter - b'A')];
        match slot {
            Some(existing) => *existing = (*existing).max(status),
            None => *slot = Some(status),
        }
    }

    /// Fold a whole scored guess into the tracker
    ///
    /// Absent letters are inserted too, so previously-tried-but-wrong letters
    /// stay visible in the hint row.
    pub fn absorb(&mut self, result: &GuessResult) {
        for (letter, status) in result.iter() {
            self.record(letter, status);
        }
    }

    /// Best status recorded for a letter, if it has been tried
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<LetterStatus> {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            self.statuses[usize::from(letter - b'A')]
        } else {
            None
        }
    }

    /// Iterate tried letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|status| (b'A' + i as u8, status)))
    }

    /// Number of distinct letters tried so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no letters have been tried yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.iter().all(Option::is_none)
    }

    /// Number of tried letters whose best status is still `Absent`
    #[must_use]
    pub fn absent_count(&self) -> usize {
        self.iter()
            .filter(|&(_, status)| status == LetterStatus::Absent)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::core::{Word, score};

    #[test]
    fn record_inserts_new_letters() {
        let mut tried = TriedLetters::new();
        assert!(tried.is_empty());

        tried.record(b'A', Absent);
        assert_eq!(tried.status_of(b'A'), Some(Absent));
        assert_eq!(tried.len(), 1);
    }

    #[test]
    fn record_upgrades_status() {
        let mut tried = TriedLetters::new();
        tried.record(b'E', Absent);
        tried.record(b'E', Present);
        assert_eq!(tried.status_of(b'E'), Some(Present));

        tried.record(b'E', Correct);
        assert_eq!(tried.status_of(b'E'), Some(Correct));
    }

    #[test]
    fn record_never_downgrades() {
        let mut tried = TriedLetters::new();
        tried.record(b'E', Correct);
        tried.record(b'E', Present);
        tried.record(b'E', Absent);
        assert_eq!(tried.status_of(b'E'), Some(Correct));
    }

    #[test]
    fn record_is_case_insensitive() {
        let mut tried = TriedLetters::new();
        tried.record(b'q', Present);
        assert_eq!(tried.status_of(b'Q'), Some(Present));
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut tried = TriedLetters::new();
        tried.record(b'Z', Absent);
        tried.record(b'A', Correct);
        tried.record(b'M', Present);

        let letters: Vec<u8> = tried.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec![b'A', b'M', b'Z']);
    }

    #[test]
    fn absorb_records_every_guessed_letter() {
        let guess = Word::new("slate").unwrap();
        let target = Word::new("crane").unwrap();

        let mut tried = TriedLetters::new();
        tried.absorb(&score(&guess, &target));

        assert_eq!(tried.status_of(b'S'), Some(Absent));
        assert_eq!(tried.status_of(b'L'), Some(Absent));
        assert_eq!(tried.status_of(b'A'), Some(Correct));
        assert_eq!(tried.status_of(b'T'), Some(Absent));
        assert_eq!(tried.status_of(b'E'), Some(Correct));
        assert_eq!(tried.len(), 5);
        assert_eq!(tried.absent_count(), 3);
    }

    #[test]
    fn absorb_is_monotonic_across_guesses() {
        let target = Word::new("crane").unwrap();
        let mut tried = TriedLetters::new();

        // A scores Correct on the first guess...
        tried.absorb(&score(&Word::new("slate").unwrap(), &target));
        assert_eq!(tried.status_of(b'A'), Some(Correct));

        // ...and a later guess where A is merely Present must not lower it
        tried.absorb(&score(&Word::new("aloud").unwrap(), &target));
        assert_eq!(tried.status_of(b'A'), Some(Correct));
    }

    #[test]
    fn statuses_never_decrease_over_a_session() {
        let target = Word::new("allow").unwrap();
        let guesses = ["llama", "salad", "allow"];

        let mut tried = TriedLetters::new();
        let mut best: Vec<Option<LetterStatus>> = vec![None; 26];

        for guess in guesses {
            tried.absorb(&score(&Word::new(guess).unwrap(), &target));
            for letter in b'A'..=b'Z' {
                let now = tried.status_of(letter);
                let before = best[usize::from(letter - b'A')];
                assert!(now >= before, "status of {} decreased", letter as char);
                best[usize::from(letter - b'A')] = now;
            }
        }
    }
}
