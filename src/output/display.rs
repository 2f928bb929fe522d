//! Colored terminal rendering of guesses and tried letters

use crate::core::{GuessResult, LetterStatus, TriedLetters, Word};
use crate::game::GameSession;
use colored::Colorize;

/// Render one fixed-width tile for a letter at a status
///
/// In blank mode the letter is hidden and only the colored cell is shown.
#[must_use]
pub fn tile(letter: u8, status: LetterStatus, blank: bool) -> String {
    let cell = if blank {
        "   ".to_string()
    } else {
        format!(" {} ", letter as char)
    };

    let colored_cell = match status {
        LetterStatus::Correct => cell.bold().white().on_green(),
        LetterStatus::Present => cell.bold().black().on_yellow(),
        LetterStatus::Absent => cell.bold().white().on_bright_black(),
    };

    colored_cell.to_string()
}

/// Render a scored guess as a row of tiles
#[must_use]
pub fn guess_row(result: &GuessResult, blank: bool) -> String {
    result
        .iter()
        .map(|(letter, status)| tile(letter, status, blank))
        .collect()
}

/// Render the tried-letter hint row, alphabetical
#[must_use]
pub fn tried_row(tried: &TriedLetters) -> String {
    tried
        .iter()
        .map(|(letter, status)| tile(letter, status, false))
        .collect()
}

/// Render a word fully green, used to reveal the answer after a loss
#[must_use]
pub fn reveal_row(target: &Word) -> String {
    guess_row(&GuessResult::revealed(target), false)
}

/// Print the feedback shown after each accepted guess
pub fn print_turn(result: &GuessResult, tried: &TriedLetters, blank: bool) {
    println!(
        "{}{} {}{}",
        "Guess ".bold(),
        guess_row(result, blank),
        "Tried ".bold(),
        tried_row(tried)
    );
}

/// Print the winning banner, the full guess matrix, and the score summary
pub fn print_win_summary(session: &GameSession<'_>, blank: bool) {
    println!("\n{}", "You guessed right!".red().bold());

    println!("Your guess matrix is:");
    for result in session.history() {
        println!("{}", guess_row(result, blank));
    }

    let tried = session.tried_letters();
    println!(
        "\nYour score is {}, {} guesses and {} letters tried ({} not in the word)",
        session.score_value(),
        session.guesses_used(),
        tried.len(),
        tried.absent_count()
    );
}

/// Print the losing banner, revealing the answer unless suppressed
pub fn print_loss_summary(session: &GameSession<'_>, hide_answer: bool) {
    println!("\n{}", "Better luck next time!".bold());

    if !hide_answer {
        println!("The correct word is : {}", reveal_row(session.target()));
    }
}
