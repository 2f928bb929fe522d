//! Wordle Game - CLI
//!
//! Terminal Wordle clone: guess the hidden five-letter word, with colored
//! per-letter feedback and a tried-letter hint row.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use wordle_game::{
    core::Word,
    game::{GameSession, PlayOptions, run},
    wordlists::{RAW_WORDS, WordList},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word within a limited number of tries",
    version,
    author
)]
struct Cli {
    /// Number of tries
    #[arg(short = 't', long, default_value_t = 6)]
    tries: usize,

    /// Reveal the selected word at start (debug)
    #[arg(short = 's', long)]
    show: bool,

    /// Show try results as color blocks with no letters
    #[arg(short = 'b', long)]
    blank: bool,

    /// Hide the answer at the end if it was not guessed
    #[arg(short = 'H', long)]
    hide_answer: bool,

    /// Play against the provided answer instead of a random one
    #[arg(short = 'u', long, value_name = "WORD")]
    use_answer: Option<String>,

    /// Load the vocabulary from a file instead of the embedded list
    #[arg(short = 'w', long, value_name = "PATH")]
    wordlist: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.tries == 0 {
        bail!("--tries must be at least 1");
    }

    let words = match &cli.wordlist {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("failed to load word list from {}", path.display()))?,
        None => WordList::from_raw(RAW_WORDS),
    };
    if words.is_empty() {
        bail!("word list contains no playable five-letter words");
    }

    let target = pick_target(&cli, &words)?;

    if cli.show {
        println!("Selected word {target}");
    }

    let mut session = GameSession::new(target, cli.tries, &words);
    let options = PlayOptions {
        blank: cli.blank,
        hide_answer: cli.hide_answer,
    };

    run(&mut session, options)?;
    Ok(())
}

/// Choose the session target: the manual answer if given, otherwise random
///
/// A manual answer that is not a valid five-letter word is a configuration
/// error and aborts before any guessing begins. It does not have to be in the
/// word list.
fn pick_target(cli: &Cli, words: &WordList) -> Result<Word> {
    match &cli.use_answer {
        Some(answer) => {
            Word::new(answer).map_err(|e| anyhow!("your manual word '{answer}' is unusable: {e}"))
        }
        None => words
            .random()
            .ok_or_else(|| anyhow!("word list is empty")),
    }
}
