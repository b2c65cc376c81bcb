//! Session settings: word length, autoplay pacing and the random seed.

use crate::DEFAULT_WORD_LENGTH;
use std::time::Duration;

/// Settings shared by every mode of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    /// Pause between automated guesses, purely for pacing
    pub delay: Duration,
    /// Fixed seed for secret and guess selection
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            delay: Duration::from_secs(1),
            seed: None,
        }
    }
}
