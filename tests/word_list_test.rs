//! Tests for loading word lists from disk.

use std::fs;
use tempfile::NamedTempFile;

use word_decoder::{WordList, WordRepository};

#[test]
fn test_load_reads_first_csv_column() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), "House,12\nbalmy,3\nCHILL\n\nhotel,1\n").expect("Write failed");

    let list = WordList::load(file.path()).expect("Load failed");
    assert_eq!(list.words(), ["house", "balmy", "chill", "hotel"]);
    assert!(list.contains("HOTEL"));
}

#[test]
fn test_load_missing_file_fails() {
    let err = WordList::load("/nonexistent/wordList.csv").unwrap_err();
    assert!(err.message.contains("Failed to read word list"));
}

#[test]
fn test_load_empty_file_fails() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let err = WordList::load(file.path()).unwrap_err();
    assert_eq!(err.message, "Word list is empty");
}

#[test]
fn test_shipped_word_list_is_five_letter_lowercase() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordList.csv");
    let list = WordList::load(path).expect("Shipped word list failed to load");

    assert!(list.len() > 100);
    for word in list.words() {
        assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "Word '{word}' contains non-lowercase chars"
        );
    }
    for word in ["house", "balmy", "chill", "hotel"] {
        assert!(list.contains(word), "Missing '{word}'");
    }
}
