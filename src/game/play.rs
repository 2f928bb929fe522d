//! Interactive game loop
//!
//! Reads guesses line by line, drives the session state machine, and renders
//! feedback. Rejected guesses re-prompt without consuming a guess slot; a
//! closed or failing input stream ends the process with a diagnostic.

use super::session::{GameSession, GameState};
use crate::output;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// Rendering switches for one game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Hide letters, show color blocks only
    pub blank: bool,
    /// Do not reveal the answer after a loss
    pub hide_answer: bool,
}

/// Play a session to completion against stdin
///
/// # Errors
/// Returns an error if the input stream closes or fails before the game ends.
pub fn run(session: &mut GameSession<'_>, options: PlayOptions) -> Result<GameState> {
    let stdin = io::stdin();
    run_with_input(session, options, &mut stdin.lock())
}

/// Play a session to completion against any line-based input
///
/// # Errors
/// Returns an error if the input stream closes or fails before the game ends.
pub fn run_with_input<R: BufRead>(
    session: &mut GameSession<'_>,
    options: PlayOptions,
    input: &mut R,
) -> Result<GameState> {
    while !session.is_over() {
        print!(
            "Enter your guess ({}/{}): ",
            session.guesses_used() + 1,
            session.max_guesses()
        );
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("failed to read guess from input")?;
        if bytes == 0 {
            bail!("input stream closed before the game ended");
        }

        match session.submit(&line).map(Clone::clone) {
            Ok(result) => {
                match session.state() {
                    GameState::Won => output::print_win_summary(session, options.blank),
                    GameState::Lost => {
                        output::print_turn(&result, session.tried_letters(), options.blank);
                        output::print_loss_summary(session, options.hide_answer);
                    }
                    GameState::AwaitingGuess => {
                        output::print_turn(&result, session.tried_letters(), options.blank);
                    }
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(session.state())
}
