//! Stored game model.

use derive_getters::Getters;
use tracing::instrument;

/// The active game: secret word and guesses left.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// Guesses left before the game is lost.
    attempts: u32,
    /// Lowercase secret word.
    word: String,
}

impl GameState {
    /// Creates a game state. The secret is stored lowercase.
    pub fn new(attempts: u32, word: impl AsRef<str>) -> Self {
        Self {
            attempts,
            word: word.as_ref().to_lowercase(),
        }
    }

    /// Spends one attempt, saturating at zero. Returns the attempts left.
    #[instrument(skip(self), fields(attempts = self.attempts))]
    pub fn spend_attempt(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_sub(1);
        self.attempts
    }

    /// True once no attempts are left.
    pub fn is_exhausted(&self) -> bool {
        self.attempts == 0
    }
}
