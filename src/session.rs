//! Game session management for the single active game.

use derive_more::{Display, Error, From};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use crate::games::word_decoder::{Clue, MAX_ATTEMPTS, ScoringMode, generate_clue};
use crate::store::{GameState, MemoryStore, SessionStore, StoreError};
use crate::words::WordRepository;

/// Failure while reading or writing the stored game.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// The session store rejected an operation.
    #[display("Session store failure: {_0}")]
    Store(StoreError),
}

/// A freshly started game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    /// Attempts granted to the player.
    pub attempts: u32,
    /// All-absent clue as long as the secret.
    pub clue: Clue,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No game is running; nothing changed.
    NoActiveGame,
    /// No word was submitted; nothing changed.
    MissingWord,
    /// The guess is not in the word list; nothing changed.
    InvalidWord {
        /// The guess as submitted.
        word: String,
    },
    /// The guess matched the secret and the game is over.
    Won {
        /// All-exact clue.
        clue: Clue,
    },
    /// The last attempt was spent on a wrong guess and the game is over.
    Lost {
        /// Clue for the final guess.
        clue: Clue,
    },
    /// Wrong guess with attempts to spare.
    TryAgain {
        /// Clue for the guess.
        clue: Clue,
        /// Attempts still available.
        attempts_left: u32,
    },
}

impl GuessOutcome {
    /// True for guesses rejected before scoring.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::MissingWord | Self::InvalidWord { .. })
    }
}

/// Message and clue returned to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResponse {
    /// Player-facing message.
    pub message: String,
    /// Clue for the latest guess, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<Clue>,
}

impl GameResponse {
    /// Creates a response without a clue.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            clue: None,
        }
    }

    /// Creates a response carrying a clue.
    pub fn with_clue(message: impl Into<String>, clue: Clue) -> Self {
        Self {
            message: message.into(),
            clue: Some(clue),
        }
    }
}

/// Renders as `"<clue>, <message>"`, or just the message without a clue.
impl fmt::Display for GameResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.clue {
            Some(clue) => write!(f, "{}, {}", clue, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<NewGame> for GameResponse {
    fn from(game: NewGame) -> Self {
        Self::with_clue(
            format!(
                "A new game has started. You have {} attempts.",
                game.attempts
            ),
            game.clue,
        )
    }
}

impl From<GuessOutcome> for GameResponse {
    fn from(outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::NoActiveGame => Self::message("Please start a new game."),
            GuessOutcome::MissingWord => Self::message("Please provide a word to guess."),
            GuessOutcome::InvalidWord { word } => {
                Self::message(format!("The word {} is not valid.", word))
            }
            GuessOutcome::Won { clue } => Self::with_clue("Congrats! You won the game.", clue),
            GuessOutcome::Lost { clue } => Self::with_clue(
                "You have no more attempts left, please start a new game.",
                clue,
            ),
            GuessOutcome::TryAgain {
                clue,
                attempts_left,
            } => Self::with_clue(
                format!("Try again. You have {} attempts left.", attempts_left),
                clue,
            ),
        }
    }
}

/// Snapshot of the game without the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    /// Whether a game is running.
    pub active: bool,
    /// Attempts left in the running game.
    pub attempts_left: Option<u32>,
}

/// Owns the single game and applies the game rules to it.
///
/// Every operation holds the store lock for its whole read-modify-write
/// cycle, so concurrent requests are serialized.
#[derive(Clone)]
pub struct GameSessionManager {
    store: Arc<Mutex<Box<dyn SessionStore>>>,
    words: Arc<dyn WordRepository>,
    scoring: ScoringMode,
}

impl fmt::Debug for GameSessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSessionManager")
            .field("scoring", &self.scoring)
            .finish_non_exhaustive()
    }
}

impl GameSessionManager {
    /// Creates a manager backed by an empty [`MemoryStore`].
    #[instrument(skip(words))]
    pub fn new(words: Arc<dyn WordRepository>, scoring: ScoringMode) -> Self {
        Self::with_store(MemoryStore::new(), words, scoring)
    }

    /// Creates a manager over the given store.
    #[instrument(skip(store, words))]
    pub fn with_store(
        store: impl SessionStore + 'static,
        words: Arc<dyn WordRepository>,
        scoring: ScoringMode,
    ) -> Self {
        info!(?scoring, "Creating game session manager");
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
            words,
            scoring,
        }
    }

    /// Scoring mode used for clues.
    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn SessionStore>>, SessionError> {
        self.store
            .lock()
            .map_err(|_| SessionError::Store(StoreError::new("Session store lock poisoned")))
    }

    /// Discards any running game and starts a new one with a random secret.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store fails.
    #[instrument(skip(self))]
    pub fn start_new_game(&self) -> Result<NewGame, SessionError> {
        let mut store = self.lock()?;
        store.clear()?;

        let word = self.words.pick_random();
        let clue = Clue::masked(word.chars().count());
        store.insert(GameState::new(MAX_ATTEMPTS, word))?;

        info!(attempts = MAX_ATTEMPTS, "New game started");
        Ok(NewGame {
            attempts: MAX_ATTEMPTS,
            clue,
        })
    }

    /// Applies a guess to the running game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store fails.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, candidate: &str) -> Result<GuessOutcome, SessionError> {
        let mut store = self.lock()?;

        let Some(mut state) = store.current()? else {
            debug!("Guess submitted with no running game");
            return Ok(GuessOutcome::NoActiveGame);
        };

        if candidate.trim().is_empty() {
            warn!("Rejected empty guess");
            return Ok(GuessOutcome::MissingWord);
        }

        let guess = candidate.to_lowercase();
        if !self.words.contains(&guess) {
            warn!(word = %candidate, "Rejected guess not in word list");
            return Ok(GuessOutcome::InvalidWord {
                word: candidate.to_string(),
            });
        }

        if guess == *state.word() {
            store.remove()?;
            info!("Secret guessed, game won");
            return Ok(GuessOutcome::Won {
                clue: Clue::solved(guess.chars().count()),
            });
        }

        let clue = generate_clue(&guess, state.word(), self.scoring);
        let attempts_left = state.spend_attempt();

        if state.is_exhausted() {
            store.remove()?;
            info!(%clue, "Out of attempts, game lost");
            Ok(GuessOutcome::Lost { clue })
        } else {
            store.update(state)?;
            info!(%clue, attempts_left, "Wrong guess");
            Ok(GuessOutcome::TryAgain {
                clue,
                attempts_left,
            })
        }
    }

    /// Reports whether a game is running and its attempts left.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store fails.
    #[instrument(skip(self))]
    pub fn status(&self) -> Result<SessionStatus, SessionError> {
        let store = self.lock()?;
        let current = store.current()?;
        Ok(SessionStatus {
            active: current.is_some(),
            attempts_left: current.map(|state| *state.attempts()),
        })
    }
}
