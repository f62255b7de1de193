//! Single-row in-memory store.

use tracing::{debug, instrument, warn};

use crate::store::{GameState, SessionStore, StoreError};

/// Holds at most one game in memory. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    row: Option<GameState>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `state`.
    #[instrument(skip(state), fields(attempts = state.attempts()))]
    pub fn with_state(state: GameState) -> Self {
        Self { row: Some(state) }
    }
}

impl SessionStore for MemoryStore {
    #[instrument(skip(self))]
    fn clear(&mut self) -> Result<(), StoreError> {
        if self.row.take().is_some() {
            debug!("Cleared stored game");
        }
        Ok(())
    }

    #[instrument(skip(self, state), fields(attempts = state.attempts()))]
    fn insert(&mut self, state: GameState) -> Result<(), StoreError> {
        if self.row.is_some() {
            warn!("Insert attempted while a game is stored");
            return Err(StoreError::new("A game is already stored"));
        }
        self.row = Some(state);
        debug!("Game inserted");
        Ok(())
    }

    fn current(&self) -> Result<Option<GameState>, StoreError> {
        Ok(self.row.clone())
    }

    #[instrument(skip(self, state), fields(attempts = state.attempts()))]
    fn update(&mut self, state: GameState) -> Result<(), StoreError> {
        match self.row.as_mut() {
            Some(row) => {
                *row = state;
                debug!("Game updated");
                Ok(())
            }
            None => {
                warn!("Update attempted with no stored game");
                Err(StoreError::new("No game to update"))
            }
        }
    }

    #[instrument(skip(self))]
    fn remove(&mut self) -> Result<GameState, StoreError> {
        self.row.take().ok_or_else(|| {
            warn!("Remove attempted with no stored game");
            StoreError::new("No game to remove")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(attempts: u32) -> GameState {
        GameState::new(attempts, "house")
    }

    #[test]
    fn test_insert_then_current() {
        let mut store = MemoryStore::new();
        assert_eq!(store.current().unwrap(), None);

        store.insert(house(6)).unwrap();
        assert_eq!(store.current().unwrap(), Some(house(6)));
    }

    #[test]
    fn test_second_insert_fails() {
        let mut store = MemoryStore::with_state(house(6));
        assert!(store.insert(house(3)).is_err());
        assert_eq!(store.current().unwrap(), Some(house(6)));
    }

    #[test]
    fn test_update_requires_row() {
        let mut store = MemoryStore::new();
        assert!(store.update(house(5)).is_err());

        store.insert(house(6)).unwrap();
        store.update(house(5)).unwrap();
        assert_eq!(store.current().unwrap(), Some(house(5)));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = MemoryStore::with_state(house(2));
        assert_eq!(store.remove().unwrap(), house(2));
        assert!(store.remove().is_err());

        store.insert(house(6)).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.current().unwrap(), None);
    }
}
