//! Per-letter clue generation for a guess against the secret word.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::instrument;

/// Classification of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// Letter is in the secret at this exact position.
    #[strum(serialize = "Y")]
    Exact,
    /// Letter is in the secret, but somewhere else.
    #[strum(serialize = "H")]
    Present,
    /// Letter does not appear in the secret.
    #[strum(serialize = "X")]
    Absent,
}

/// How `Present` marks are granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Any letter contained in the secret is `Present`, however many times
    /// it is guessed.
    #[default]
    Naive,
    /// Standard Wordle rule: each letter of the secret backs at most one
    /// `Exact` or `Present` mark.
    FrequencyAware,
}

/// Sequence of marks, one per guessed letter.
///
/// Renders (and serializes) as a string of `Y`, `H` and `X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue(Vec<Mark>);

impl Clue {
    /// A clue of `len` absent marks, shown before any guess is made.
    pub fn masked(len: usize) -> Self {
        Self(vec![Mark::Absent; len])
    }

    /// A clue of `len` exact marks.
    pub fn solved(len: usize) -> Self {
        Self(vec![Mark::Exact; len])
    }

    /// Returns the marks in guess order.
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a clue with no marks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every mark is exact.
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|m| *m == Mark::Exact)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

impl Serialize for Clue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scores `guess` against `secret`.
///
/// Both words are lowercased before comparison. The clue always has one mark
/// per character of `guess`.
#[instrument(skip(guess, secret))]
pub fn generate_clue(guess: &str, secret: &str, mode: ScoringMode) -> Clue {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    let secret: Vec<char> = secret.to_lowercase().chars().collect();

    match mode {
        ScoringMode::Naive => naive(&guess, &secret),
        ScoringMode::FrequencyAware => frequency_aware(&guess, &secret),
    }
}

/// True when `guess` and `secret` have the same number of characters once
/// lowercased, the form [`generate_clue`] compares.
pub fn same_normalized_length(guess: &str, secret: &str) -> bool {
    guess.to_lowercase().chars().count() == secret.to_lowercase().chars().count()
}

fn naive(guess: &[char], secret: &[char]) -> Clue {
    let marks = guess
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            if secret.get(i) == Some(letter) {
                Mark::Exact
            } else if secret.contains(letter) {
                Mark::Present
            } else {
                Mark::Absent
            }
        })
        .collect();
    Clue(marks)
}

fn frequency_aware(guess: &[char], secret: &[char]) -> Clue {
    let mut marks = vec![Mark::Absent; guess.len()];
    let mut available: HashMap<char, usize> = HashMap::new();

    // Unmatched secret letters form the pool for present marks
    for (i, letter) in secret.iter().enumerate() {
        if guess.get(i) == Some(letter) {
            marks[i] = Mark::Exact;
        } else {
            *available.entry(*letter).or_default() += 1;
        }
    }

    for (i, letter) in guess.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        match available.get_mut(letter) {
            Some(count) if *count > 0 => {
                marks[i] = Mark::Present;
                *count -= 1;
            }
            _ => {}
        }
    }

    Clue(marks)
}
