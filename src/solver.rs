//! Autoplay solver driven by accumulated constraints.
//!
//! A round moves through `Seeding → Guessing → Found | Exhausted`. The
//! first guess is a word containing the five most frequent letters of the
//! corpus; every later guess is picked from the candidates still consistent
//! with all feedback seen so far.

use crate::constraints::{filter_candidates, ConstraintState};
use crate::corpus::Corpus;
use crate::error::{Result, WordleError};
use crate::feedback::{check, Score};
use crate::ranker::{find_words_with_letters, LetterFrequencies};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

/// Number of top-ranked letters the opening guess must contain
pub const SEED_LETTERS: usize = 5;

/// Chooses the next guess from the remaining candidates.
pub trait Picker {
    /// Returns `None` only for an empty candidate list.
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str>;
}

/// Picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RandomPicker {
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.choose(&mut self.rng).map(String::as_str)
    }
}

/// Always picks the first candidate, for reproducible rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.first().map(String::as_str)
    }
}

/// Where a round currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    Seeding,
    Guessing { guess: String },
    Found { guesses: usize },
    Exhausted { guesses: usize },
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Found,
    Exhausted,
}

/// Summary of a finished round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub secret: String,
    pub outcome: RoundOutcome,
    pub history: Vec<(String, Score)>,
}

impl RoundReport {
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_found(&self) -> bool {
        self.outcome == RoundOutcome::Found
    }

    /// Turn an exhausted round into [`WordleError::Exhausted`].
    pub fn into_result(self) -> Result<Self> {
        match self.outcome {
            RoundOutcome::Found => Ok(self),
            RoundOutcome::Exhausted => Err(WordleError::Exhausted {
                guesses: self.guess_count(),
            }),
        }
    }
}

/// One autoplay round against a known secret.
#[derive(Debug, Clone)]
pub struct Round<'c> {
    corpus: &'c Corpus,
    secret: String,
    state: RoundState,
    constraints: ConstraintState,
    candidates: Vec<String>,
    history: Vec<(String, Score)>,
}

impl<'c> Round<'c> {
    /// Start a round. The secret must be ASCII letters of the corpus word
    /// length; it does not have to be a corpus word.
    pub fn new(corpus: &'c Corpus, secret: &str) -> Result<Self> {
        if !secret.chars().all(|c| c.is_ascii_alphabetic())
            || secret.len() != corpus.word_length()
        {
            return Err(WordleError::InvalidInput(format!(
                "secret '{}' is not a {}-letter word",
                secret,
                corpus.word_length()
            )));
        }
        Ok(Self {
            corpus,
            secret: secret.to_ascii_lowercase(),
            state: RoundState::Seeding,
            constraints: ConstraintState::new(),
            candidates: corpus.words().to_vec(),
            history: Vec::new(),
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn history(&self) -> &[(String, Score)] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            RoundState::Found { .. } | RoundState::Exhausted { .. }
        )
    }

    /// Advance the round by one transition. Returns the feedback when a
    /// guess was scored during this step.
    pub fn step<P: Picker + ?Sized>(&mut self, picker: &mut P) -> Result<Option<&(String, Score)>> {
        match std::mem::replace(&mut self.state, RoundState::Seeding) {
            RoundState::Seeding => {
                self.state = match self.seed(picker) {
                    Some(guess) => RoundState::Guessing { guess },
                    None => RoundState::Exhausted { guesses: 0 },
                };
                Ok(None)
            }
            RoundState::Guessing { guess } => {
                let score = match check(&self.secret, &guess) {
                    Ok(score) => score,
                    Err(e) => {
                        self.state = RoundState::Guessing { guess };
                        return Err(e);
                    }
                };
                debug!("guess {} -> {}", guess, score);
                if let Err(e) = self.constraints.record(&guess, &score) {
                    self.state = RoundState::Guessing { guess };
                    return Err(e);
                }
                let won = guess == self.secret;
                self.history.push((guess, score));

                if won {
                    self.state = RoundState::Found {
                        guesses: self.history.len(),
                    };
                } else {
                    self.candidates = filter_candidates(&self.candidates, &self.constraints);
                    debug!(
                        "{} candidates left, constraints {:?}",
                        self.candidates.len(),
                        self.constraints
                    );
                    self.state = match picker.pick(&self.candidates) {
                        Some(next) => RoundState::Guessing {
                            guess: next.to_string(),
                        },
                        None => {
                            warn!(
                                "no candidate left for secret '{}' after {} guesses",
                                self.secret,
                                self.history.len()
                            );
                            RoundState::Exhausted {
                                guesses: self.history.len(),
                            }
                        }
                    };
                }
                Ok(self.history.last())
            }
            finished => {
                self.state = finished;
                Ok(None)
            }
        }
    }

    fn seed<P: Picker + ?Sized>(&self, picker: &mut P) -> Option<String> {
        let words = self.corpus.words();
        let top = LetterFrequencies::from_words(words).top(SEED_LETTERS);
        let seeded = find_words_with_letters(words, &top);
        debug!(
            "top letters {:?} give {} opening candidates",
            top,
            seeded.len()
        );
        if seeded.is_empty() {
            picker.pick(words).map(str::to_string)
        } else {
            picker.pick(&seeded).map(str::to_string)
        }
    }

    /// Play the round to completion, calling `on_guess` after each scored
    /// guess.
    pub fn play<P, F>(mut self, picker: &mut P, mut on_guess: F) -> Result<RoundReport>
    where
        P: Picker + ?Sized,
        F: FnMut(usize, &str, &Score),
    {
        while !self.is_finished() {
            let scored = self.step(picker)?.is_some();
            if let (true, Some((guess, score))) = (scored, self.history.last()) {
                on_guess(self.history.len(), guess, score);
            }
        }

        let outcome = match self.state {
            RoundState::Found { .. } => RoundOutcome::Found,
            _ => RoundOutcome::Exhausted,
        };
        info!(
            "round for '{}' ended {:?} after {} guesses",
            self.secret,
            outcome,
            self.history.len()
        );
        Ok(RoundReport {
            secret: self.secret,
            outcome,
            history: self.history,
        })
    }
}

/// Solve a round for a known secret without observing the guesses
pub fn solve_for_target<P: Picker + ?Sized>(
    corpus: &Corpus,
    secret: &str,
    picker: &mut P,
) -> Result<RoundReport> {
    Round::new(corpus, secret)?.play(picker, |_, _, _| {})
}

/// Play every corpus word as the secret with [`FirstPicker`] and count how
/// many rounds needed each number of guesses. Exhausted rounds are counted
/// under guess count 0.
pub fn benchmark_guess_distribution(corpus: &Corpus) -> Result<Vec<(usize, usize)>> {
    let guess_counts: Vec<usize> = corpus
        .words()
        .par_iter()
        .map(|secret| -> Result<usize> {
            let report = solve_for_target(corpus, secret, &mut FirstPicker)?;
            Ok(if report.is_found() {
                report.guess_count()
            } else {
                0
            })
        })
        .collect::<Result<_>>()?;

    let max_guesses = guess_counts.iter().copied().max().unwrap_or(0);
    let mut distribution = vec![0usize; max_guesses + 1];

    for count in guess_counts {
        distribution[count] += 1;
    }

    Ok(distribution
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect())
}
