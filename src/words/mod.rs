//! Word list loading and lookup.

mod error;
mod repository;

pub use error::WordListError;
pub use repository::{WordList, WordRepository};
