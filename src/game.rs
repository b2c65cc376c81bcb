//! The interactive game: a human guesses, the oracle answers.

use crate::corpus::Corpus;
use crate::error::{Result, WordleError};
use crate::feedback::check;
use crate::validate::GuessValidator;
use log::debug;
use std::io::{BufRead, Write};

/// Signal handed back to the driver once a loop returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The loop ended normally; the driver may continue
    Done,
    /// The player asked to leave
    Quit,
}

pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}

/// Print a prompt and read one line. `None` on end of input.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Let the player guess until they find the secret or quit.
pub fn play_interactive<R: BufRead, W: Write>(
    corpus: &Corpus,
    secret: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Control> {
    let validator = GuessValidator::new(corpus);
    let prompt_text = format!("Enter a {}-letter word: ", corpus.word_length());
    let mut num_of_guesses = 0;

    loop {
        let line = match prompt(input, out, &prompt_text)? {
            Some(line) => line,
            None => return Ok(Control::Quit),
        };
        if is_quit(&line) {
            writeln!(out, "Thank you for playing Wordle! Bye!")?;
            return Ok(Control::Quit);
        }

        let guess = match validator.validate(&line) {
            Ok(guess) => guess,
            Err(WordleError::Validation(rule)) => {
                debug!("rejected guess {:?}: {:?}", line, rule);
                writeln!(out, "{}", rule)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        num_of_guesses += 1;
        let score = check(secret, &guess)?;
        writeln!(out, "{} -> {}", num_of_guesses, score)?;

        if guess == secret {
            if num_of_guesses == 1 {
                writeln!(
                    out,
                    "Lucky or Genius! You found the wordle in just 1 try!!!\n"
                )?;
            } else {
                writeln!(
                    out,
                    "Congratulations! You found the wordle in {} tries!\n",
                    num_of_guesses
                )?;
            }
            return Ok(Control::Done);
        }
    }
}
