//! Persistence for the single active game.

mod error;
mod memory;
mod models;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::GameState;

/// Storage for the active game row.
///
/// At most one [`GameState`] is stored at a time.
pub trait SessionStore: Send {
    /// Removes any stored game.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Stores a new game. Fails if one is already stored.
    fn insert(&mut self, state: GameState) -> Result<(), StoreError>;

    /// Returns the stored game, if any.
    fn current(&self) -> Result<Option<GameState>, StoreError>;

    /// Replaces the stored game. Fails if none is stored.
    fn update(&mut self, state: GameState) -> Result<(), StoreError>;

    /// Removes the stored game. Fails if none is stored.
    fn remove(&mut self) -> Result<GameState, StoreError>;
}
