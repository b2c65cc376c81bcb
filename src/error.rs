//! Error types shared by the engine and the game loops.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while loading words or playing a round.
#[derive(Error, Debug)]
pub enum WordleError {
    /// Malformed data at a boundary: mismatched word lengths handed to the
    /// oracle, bad corpus lines, unparseable feedback patterns.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A guess typed by the player was rejected. Recoverable.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No candidate in the corpus satisfies the accumulated constraints.
    #[error("no word satisfies the constraints after {guesses} guesses")]
    Exhausted { guesses: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The rule a player's guess broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("You have not entered a word!")]
    Empty,
    #[error("{word} is not {expected} letters long!")]
    WrongLength { word: String, expected: usize },
    #[error("{0} contains digits!")]
    ContainsDigits(String),
    #[error("{0} contains symbols!")]
    ContainsSymbols(String),
    #[error("{0} is not in the list of accepted words!")]
    NotInCorpus(String),
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
