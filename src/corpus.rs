//! The word list every secret and guess is drawn from.

use crate::error::{Result, WordleError};
use log::info;
use std::fs;
use std::path::Path;

const DEFAULT_DICTIONARY: &str = include_str!("../dictionary/dictionary.txt");

/// An ordered, read-only list of lowercase words of one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
    word_length: usize,
}

impl Corpus {
    /// Build a corpus from already-clean words.
    pub fn new(words: Vec<String>, word_length: usize) -> Result<Self> {
        let text = words.join("\n");
        Self::parse(&text, word_length)
    }

    /// Parse one word per line. Blank lines are skipped; every other line
    /// must be ASCII letters of the configured length.
    pub fn parse(text: &str, word_length: usize) -> Result<Self> {
        let mut words = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(WordleError::InvalidInput(format!(
                    "line {}: '{}' contains characters other than letters",
                    line_no + 1,
                    word
                )));
            }
            if word.len() != word_length {
                return Err(WordleError::InvalidInput(format!(
                    "line {}: '{}' is not {} letters long",
                    line_no + 1,
                    word,
                    word_length
                )));
            }
            words.push(word.to_ascii_lowercase());
        }

        if words.is_empty() {
            return Err(WordleError::InvalidInput("the word list is empty".into()));
        }

        Ok(Self { words, word_length })
    }

    /// Load the dictionary embedded in the binary
    pub fn embedded(word_length: usize) -> Result<Self> {
        let corpus = Self::parse(DEFAULT_DICTIONARY, word_length)?;
        info!("loaded {} words from the built-in dictionary", corpus.len());
        Ok(corpus)
    }

    pub fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let corpus = Self::parse(&text, word_length)?;
        info!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        self.words.iter().any(|w| *w == word)
    }
}
