//! Static word list backing secret selection and guess validation.

use rand::Rng;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::words::WordListError;

/// Source of secret words and the dictionary of accepted guesses.
pub trait WordRepository: Send + Sync {
    /// Picks a secret word uniformly at random. Always lowercase.
    fn pick_random(&self) -> String;

    /// Checks whether `word` is an accepted guess, ignoring case.
    fn contains(&self, word: &str) -> bool;
}

/// In-memory word list, read-only after loading.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordList {
    /// Builds a word list from the given words.
    ///
    /// Words are trimmed and lowercased; blanks and duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if no words remain.
    #[instrument(skip(words))]
    pub fn from_words<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut lookup = HashSet::new();

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if lookup.insert(word.clone()) {
                list.push(word);
            }
        }

        if list.is_empty() {
            return Err(WordListError::new("Word list is empty"));
        }

        debug!(count = list.len(), "Word list built");
        Ok(Self {
            words: list,
            lookup,
        })
    }

    /// Parses delimited text where each line's first comma-separated field
    /// is a word.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the text holds no words.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        Self::from_words(
            content
                .lines()
                .map(|line| line.split(',').next().unwrap_or_default()),
        )
    }

    /// Loads a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file cannot be read or holds no words.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordListError::new(format!(
                "Failed to read word list '{}': {}",
                path.display(),
                e
            ))
        })?;

        let list = Self::parse(&content)?;
        info!(count = list.len(), "Word list loaded");
        Ok(list)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordRepository for WordList {
    #[instrument(skip(self))]
    fn pick_random(&self) -> String {
        let index = rand::rng().random_range(0..self.words.len());
        self.words[index].clone()
    }

    fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }
}
