//! Checks applied to a guess typed by the player.

use crate::corpus::Corpus;
use crate::error::{Result, ValidationError};

/// Validates player guesses against a corpus.
#[derive(Debug, Clone, Copy)]
pub struct GuessValidator<'c> {
    corpus: &'c Corpus,
}

impl<'c> GuessValidator<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    /// Returns the normalised (lowercase) guess, or the first rule it
    /// breaks as [`WordleError::Validation`](crate::WordleError::Validation):
    /// empty, wrong length, digits, other symbols, unknown word.
    pub fn validate(&self, input: &str) -> Result<String> {
        Ok(self.check_rules(input)?)
    }

    fn check_rules(&self, input: &str) -> Result<String, ValidationError> {
        let guess = input.trim();
        if guess.is_empty() {
            return Err(ValidationError::Empty);
        }
        if guess.chars().count() != self.corpus.word_length() {
            return Err(ValidationError::WrongLength {
                word: guess.to_string(),
                expected: self.corpus.word_length(),
            });
        }
        if guess.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::ContainsDigits(guess.to_string()));
        }
        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::ContainsSymbols(guess.to_string()));
        }
        if !self.corpus.contains(guess) {
            return Err(ValidationError::NotInCorpus(guess.to_string()));
        }
        Ok(guess.to_ascii_lowercase())
    }
}
