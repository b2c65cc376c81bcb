//! # Wordle Autoplay
//!
//! A Wordle engine that can be played by a human at a text prompt or by an
//! automated solver.
//!
//! The solver seeds its first guess from the most frequent letters of the
//! word list, then narrows the candidates after every guess by keeping only
//! the words consistent with all gray, yellow and green feedback so far.

pub mod config;
pub mod constraints;
pub mod corpus;
pub mod error;
pub mod feedback;
pub mod game;
pub mod ranker;
pub mod session;
pub mod solver;
pub mod validate;

pub use config::GameConfig;
pub use constraints::{filter_candidates, find_matched_words, ConstraintState, MatchMode, Matched};
pub use corpus::Corpus;
pub use error::{ValidationError, WordleError};
pub use feedback::{check, parse_hint, Feedback, Score};
pub use game::Control;
pub use ranker::{find_words_with_letters, rank_letters, LetterFrequencies};
pub use solver::{FirstPicker, Picker, RandomPicker, Round, RoundOutcome, RoundReport};

/// Word length used unless configured otherwise
pub const DEFAULT_WORD_LENGTH: usize = 5;
