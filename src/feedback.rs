//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback (green/yellow/gray) for a
//! guess against a secret word, and displaying or parsing it.

use crate::error::{Result, WordleError};
use std::fmt;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the secret, or all of its occurrences are accounted for
    Gray,
    /// Letter in the secret but at another position
    Yellow,
    /// Correct letter in correct position
    Green,
}

impl Feedback {
    /// Human-readable label, as shown after each guess
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Gray => "gray",
            Feedback::Yellow => "yellow",
            Feedback::Green => "green",
        }
    }

    /// Convert to a character for compact display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Green => '🟩',
            Feedback::Yellow => '🟨',
            Feedback::Gray => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Green),
            'y' | '1' => Some(Feedback::Yellow),
            'b' | 'x' | '0' => Some(Feedback::Gray),
            _ => None,
        }
    }
}

/// The feedback for a whole guess, one entry per letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Feedback>);

impl Score {
    pub fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is green
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&fb| fb == Feedback::Green)
    }

    /// Parse a pattern like "gybbb" or "21000"
    pub fn parse(s: &str, word_length: usize) -> Result<Self> {
        if s.chars().count() != word_length {
            return Err(WordleError::InvalidInput(format!(
                "pattern '{}' is not {} characters long",
                s, word_length
            )));
        }
        s.chars()
            .map(|c| {
                Feedback::from_char(c).ok_or_else(|| {
                    WordleError::InvalidInput(format!(
                        "'{}' in pattern '{}' is not one of g, y, b",
                        c, s
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

/// Parse one `guess:pattern` pair reported by another game, such as
/// `crane:gybbb`. The guess must be ASCII letters of `word_length`, and is
/// returned lowercased alongside its score.
pub fn parse_hint(pair: &str, word_length: usize) -> Result<(String, Score)> {
    let (guess, pattern) = pair.split_once(':').ok_or_else(|| {
        WordleError::InvalidInput(format!("expected guess:pattern, got '{}'", pair))
    })?;
    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordleError::InvalidInput(format!(
            "'{}' contains characters other than letters",
            guess
        )));
    }
    if guess.len() != word_length {
        return Err(WordleError::InvalidInput(format!(
            "'{}' is not {} letters long",
            guess, word_length
        )));
    }
    let score = Score::parse(pattern, word_length)?;
    Ok((guess.to_ascii_lowercase(), score))
}

/// Shown as a list of labels, e.g. `['yellow', 'gray', 'green']`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, fb) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", fb.label())?;
        }
        write!(f, "]")
    }
}

/// Calculate the feedback for a guess against a secret word.
///
/// This implements the standard Wordle feedback rules:
/// - Green: letter is in the correct position
/// - Yellow: letter is in the word but at another position
/// - Gray: letter is not in the word (or all instances accounted for)
///
/// Greens consume their secret letter first, so a letter repeated in the
/// guess is marked yellow at most as many times as it is left unmatched in
/// the secret.
pub fn check(secret: &str, guess: &str) -> Result<Score> {
    let secret_bytes = secret.as_bytes();
    let guess_bytes = guess.as_bytes();

    if secret_bytes.len() != guess_bytes.len() {
        return Err(WordleError::InvalidInput(format!(
            "cannot compare '{}' ({} letters) with '{}' ({} letters)",
            guess,
            guess_bytes.len(),
            secret,
            secret_bytes.len()
        )));
    }

    let mut feedback = vec![Feedback::Gray; guess_bytes.len()];
    let mut secret_remaining = [0usize; 256];

    for i in 0..guess_bytes.len() {
        if guess_bytes[i] == secret_bytes[i] {
            feedback[i] = Feedback::Green;
        } else {
            secret_remaining[secret_bytes[i] as usize] += 1;
        }
    }

    for i in 0..guess_bytes.len() {
        if feedback[i] != Feedback::Green {
            let idx = guess_bytes[i] as usize;
            if secret_remaining[idx] > 0 {
                feedback[i] = Feedback::Yellow;
                secret_remaining[idx] -= 1;
            }
        }
    }

    Ok(Score(feedback))
}
