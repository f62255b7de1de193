//! Word Decoder library - a Wordle-style guessing game
//!
//! A player starts a game, then guesses the secret word. Every guess earns a
//! clue marking each letter as exact (`Y`), present elsewhere (`H`) or absent
//! (`X`). Six wrong guesses lose the game.
//!
//! # Architecture
//!
//! - **Games**: clue generation and game constants
//! - **Words**: word list used for secrets and guess validation
//! - **Store**: single-row storage for the running game
//! - **Session**: the game lifecycle over the store
//! - **Server**: REST routes (axum)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use word_decoder::{GameResponse, GameSessionManager, ScoringMode, WordList};
//!
//! # fn example() -> anyhow::Result<()> {
//! let words = Arc::new(WordList::from_words(["house", "hotel"])?);
//! let sessions = GameSessionManager::new(words, ScoringMode::Naive);
//!
//! sessions.start_new_game()?;
//! let response = GameResponse::from(sessions.submit_guess("hotel")?);
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod server;
mod session;
mod store;
mod words;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game rules
pub use games::word_decoder::{
    Clue, MAX_ATTEMPTS, Mark, ScoringMode, generate_clue, same_normalized_length,
};

// Crate-level exports - Server types
pub use server::{AppState, GuessRequest, HealthResponse, create_router};

// Crate-level exports - Session management
pub use session::{
    GameResponse, GameSessionManager, GuessOutcome, NewGame, SessionError, SessionStatus,
};

// Crate-level exports - Persistence
pub use store::{GameState, MemoryStore, SessionStore, StoreError};

// Crate-level exports - Word list
pub use words::{WordList, WordListError, WordRepository};
