//! Accumulated gray/yellow/green knowledge and the candidate filter.
//!
//! A [`ConstraintState`] collects everything learned during one round.
//! [`filter_candidates`] keeps the words of a list that agree with it.

use crate::error::{Result, WordleError};
use crate::feedback::{Feedback, Score};
use std::collections::{BTreeMap, BTreeSet};

pub type Positions = BTreeSet<usize>;

/// What is known about the secret word so far.
///
/// Positive evidence wins over negative: a letter listed in `excluded` that
/// is also a key of `misplaced` or `confirmed` is treated as present, and
/// the exclusion is ignored when filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters known to be absent from the secret (gray)
    excluded: BTreeSet<char>,
    /// Letters known to be present, but not at these positions (yellow)
    misplaced: BTreeMap<char, Positions>,
    /// Letters known to be at these positions (green)
    confirmed: BTreeMap<char, Positions>,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from raw gray/yellow/green collections. Misplaced
    /// positions that are also confirmed for the same letter are dropped.
    pub fn from_parts(
        excluded: impl IntoIterator<Item = char>,
        misplaced: BTreeMap<char, Positions>,
        confirmed: BTreeMap<char, Positions>,
    ) -> Self {
        let mut state = Self {
            excluded: excluded.into_iter().collect(),
            misplaced,
            confirmed,
        };
        for (letter, positions) in &state.confirmed {
            if let Some(misplaced) = state.misplaced.get_mut(letter) {
                misplaced.retain(|p| !positions.contains(p));
            }
        }
        state
    }

    pub fn excluded(&self) -> &BTreeSet<char> {
        &self.excluded
    }

    pub fn misplaced(&self) -> &BTreeMap<char, Positions> {
        &self.misplaced
    }

    pub fn confirmed(&self) -> &BTreeMap<char, Positions> {
        &self.confirmed
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.misplaced.is_empty() && self.confirmed.is_empty()
    }

    /// Whether the letter is known to occur somewhere in the secret.
    pub fn is_known_present(&self, letter: char) -> bool {
        self.confirmed.contains_key(&letter) || self.misplaced.contains_key(&letter)
    }

    /// Fold the feedback for one guess into the state. Entries are only
    /// ever added, except that a green at a position removes that same
    /// position from the letter's misplaced set.
    ///
    /// A guess whose letter count differs from the score is rejected and
    /// leaves the state untouched.
    pub fn record(&mut self, guess: &str, score: &Score) -> Result<()> {
        let letters: Vec<char> = guess.chars().collect();
        let feedbacks = score.feedbacks();
        if letters.len() != feedbacks.len() {
            return Err(WordleError::InvalidInput(format!(
                "'{}' has {} letters but the feedback has {}",
                guess,
                letters.len(),
                feedbacks.len()
            )));
        }

        for (i, (&letter, &fb)) in letters.iter().zip(feedbacks).enumerate() {
            match fb {
                Feedback::Green => {
                    self.confirmed.entry(letter).or_default().insert(i);
                    if let Some(positions) = self.misplaced.get_mut(&letter) {
                        positions.remove(&i);
                    }
                }
                Feedback::Yellow => self.add_misplaced(letter, i),
                Feedback::Gray => {}
            }
        }

        // Grays last, so a letter that is gray here but yellow or green
        // elsewhere in the same guess is recognised as present.
        for (i, (&letter, &fb)) in letters.iter().zip(feedbacks).enumerate() {
            if fb == Feedback::Gray {
                if self.is_known_present(letter) {
                    self.add_misplaced(letter, i);
                } else {
                    self.excluded.insert(letter);
                }
            }
        }
        Ok(())
    }

    fn add_misplaced(&mut self, letter: char, position: usize) {
        let confirmed_here = self
            .confirmed
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position));
        if !confirmed_here {
            self.misplaced.entry(letter).or_default().insert(position);
        }
    }

    /// Check if a word satisfies every constraint
    pub fn admits(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();

        let has_excluded = self
            .excluded
            .iter()
            .filter(|&&letter| !self.is_known_present(letter))
            .any(|&letter| chars.contains(&letter));
        if has_excluded {
            return false;
        }

        for (&letter, forbidden) in &self.misplaced {
            let mut occurrences = chars
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == letter)
                .map(|(i, _)| i)
                .peekable();
            if occurrences.peek().is_none() {
                return false;
            }
            if occurrences.any(|i| forbidden.contains(&i)) {
                return false;
            }
        }

        self.confirmed.iter().all(|(&letter, positions)| {
            positions.iter().all(|&p| chars.get(p) == Some(&letter))
        })
    }
}

/// Keep the candidates consistent with the state, preserving their order.
/// An empty result means the round cannot continue.
pub fn filter_candidates<S: AsRef<str>>(candidates: &[S], state: &ConstraintState) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| state.admits(word))
        .map(str::to_string)
        .collect()
}

/// Whether [`find_matched_words`] returns the first match or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Word,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    Word(String),
    List(Vec<String>),
}

/// Find the words matching the given gray letters, yellow letter positions
/// and green letter positions. Returns `None` when no word matches.
///
/// For example, with grays `abcd`, yellows `{n: {2}, z: {2, 3}}` and greens
/// `{o: {0, 2}, e: {4}}`, `batch` is rejected and `ozone` is accepted.
pub fn find_matched_words<S: AsRef<str>>(
    words: &[S],
    grays: &[char],
    yellows: &BTreeMap<char, Positions>,
    greens: &BTreeMap<char, Positions>,
    mode: MatchMode,
) -> Option<Matched> {
    let state = ConstraintState::from_parts(grays.iter().copied(), yellows.clone(), greens.clone());
    let mut matched = filter_candidates(words, &state);
    if matched.is_empty() {
        return None;
    }
    Some(match mode {
        MatchMode::Word => Matched::Word(matched.swap_remove(0)),
        MatchMode::List => Matched::List(matched),
    })
}
