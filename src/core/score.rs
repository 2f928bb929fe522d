//! Guess scoring against the target word
//!
//! Scoring assigns each guessed letter one of three statuses:
//! - `Absent`: letter does not appear in the target (or all occurrences are taken)
//! - `Present`: letter appears in the target at a different position
//! - `Correct`: letter is in the right position
//!
//! Statuses are totally ordered `Absent < Present < Correct`, which lets the
//! tried-letter tracker upgrade a letter's best-seen status without ever
//! downgrading it.

use super::word::{WORD_LENGTH, Word};

/// Per-letter feedback status
///
/// Derives `Ord` so that `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not in the target word (grey)
    Absent,
    /// Letter in the target word at a different position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

/// The scored outcome of one guess: the guessed word plus one status per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    word: Word,
    statuses: [LetterStatus; WORD_LENGTH],
}

impl GuessResult {
    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Statuses by position
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Iterate `(letter, status)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.statuses.iter().copied())
    }

    /// Whether every position scored `Correct`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// A fully `Correct` result for `word`, used to reveal the answer
    #[must_use]
    pub fn revealed(word: &Word) -> Self {
        Self {
            word: word.clone(),
            statuses: [LetterStatus::Correct; WORD_LENGTH],
        }
    }
}

/// Score `guess` against `target`
///
/// Pure function over two well-formed words; scoring the same pair twice
/// yields identical results.
///
/// # Algorithm
/// 1. Forward pass: mark exact position matches `Correct`, consuming that
///    occurrence from the target's letter pool.
/// 2. Backward pass (position 4 down to 0): each non-`Correct` position whose
///    letter still has unclaimed occurrences in the pool is marked `Present`
///    and consumes one.
///
/// The backward pass resolves scarce duplicates deterministically: when a
/// letter appears more often among the guess's misplaced positions than the
/// target can supply, the rightmost misplaced occurrences are marked
/// `Present` and the earlier ones stay `Absent`. This guarantees the count of
/// `Correct` plus `Present` marks for any letter never exceeds its occurrences
/// in the target.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// let result = score(&guess, &target);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(result.statuses()[2], LetterStatus::Correct);
/// assert_eq!(result.statuses()[4], LetterStatus::Correct);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> GuessResult {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    // Forward pass: exact matches claim their occurrence first
    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == target.letter_at(i) {
            statuses[i] = LetterStatus::Correct;

            if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Backward pass: rightmost misplaced occurrences claim what remains
    for i in (0..WORD_LENGTH).rev() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }

        let letter = guess.letter_at(i);
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            statuses[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    GuessResult {
        word: guess.clone(),
        statuses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    /// Count Correct+Present marks for one letter in a result
    fn marks_for(result: &GuessResult, letter: u8) -> usize {
        result
            .iter()
            .filter(|&(l, s)| l == letter && s != Absent)
            .count()
    }

    #[test]
    fn score_exact_match_all_correct() {
        for text in ["crane", "slate", "llama", "speed"] {
            let w = word(text);
            let result = score(&w, &w);
            assert!(result.is_winning(), "{text} vs itself must be all Correct");
        }
    }

    #[test]
    fn score_disjoint_letters_all_absent() {
        let result = score(&word("crane"), &word("lofty"));
        assert_eq!(result.statuses(), &[Absent; 5]);
        assert!(!result.is_winning());
    }

    #[test]
    fn score_classic_example() {
        // CRANE vs SLATE: A and E sit in matching positions
        let result = score(&word("crane"), &word("slate"));
        assert_eq!(result.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn score_slate_vs_crane() {
        let result = score(&word("slate"), &word("crane"));
        assert_eq!(result.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn score_present_letters() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        let result = score(&word("robot"), &word("floor"));
        assert_eq!(
            result.statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_duplicate_guess_letters_rightmost_wins() {
        // SPEED vs EXACT: one E in the target, two misplaced E's in the guess.
        // The backward pass gives Present to the rightmost E (position 3).
        let result = score(&word("speed"), &word("exact"));
        assert_eq!(result.statuses(), &[Absent, Absent, Absent, Present, Absent]);
        assert_eq!(marks_for(&result, b'E'), 1);
    }

    #[test]
    fn score_llama_vs_allow() {
        // ALLOW has one A and two L's. LLAMA's second L is exact; the first L
        // takes the remaining L. Of the two misplaced A's, the rightmost wins.
        let result = score(&word("llama"), &word("allow"));
        assert_eq!(
            result.statuses(),
            &[Present, Correct, Absent, Absent, Present]
        );
    }

    #[test]
    fn score_marks_never_exceed_target_occurrences() {
        let cases = [
            ("llama", "allow"),
            ("speed", "erase"),
            ("geese", "fudge"),
            ("mamma", "madam"),
            ("eerie", "melee"),
        ];

        for (guess, target) in cases {
            let g = word(guess);
            let t = word(target);
            let result = score(&g, &t);
            let target_counts = t.letter_counts();

            for letter in b'A'..=b'Z' {
                let limit = target_counts.get(&letter).copied().unwrap_or(0) as usize;
                assert!(
                    marks_for(&result, letter) <= limit,
                    "{guess} vs {target}: letter {} over-marked",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn score_correct_claims_before_present() {
        // THEME has two E's; EERIE's final E is exact and claims one of them,
        // so only one misplaced E can be Present. The rightmost of the two
        // misplaced E's (position 1) wins, position 0 stays Absent.
        let result = score(&word("eerie"), &word("theme"));
        assert_eq!(
            result.statuses(),
            &[Absent, Present, Absent, Absent, Correct]
        );
        assert_eq!(marks_for(&result, b'E'), 2);
    }

    #[test]
    fn score_is_idempotent() {
        let g = word("llama");
        let t = word("allow");
        assert_eq!(score(&g, &t), score(&g, &t));
    }

    #[test]
    fn revealed_is_all_correct() {
        let result = GuessResult::revealed(&word("mango"));
        assert!(result.is_winning());
        assert_eq!(result.word().text(), "MANGO");
    }

    #[test]
    fn status_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn iter_yields_letter_status_pairs() {
        let result = score(&word("crane"), &word("slate"));
        let pairs: Vec<(u8, LetterStatus)> = result.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], (b'C', Absent));
        assert_eq!(pairs[2], (b'A', Correct));
    }
}
