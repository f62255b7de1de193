//! Word decoder rules: the clue generator and the attempt budget.

mod clue;

pub use clue::{Clue, Mark, ScoringMode, generate_clue, same_normalized_length};

/// Number of guesses a player gets in each game.
pub const MAX_ATTEMPTS: u32 = 6;
