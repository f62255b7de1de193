//! Command-line interface for word_decoder.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use word_decoder::ScoringMode;

/// Word Decoder - guess the five-letter word in six tries
#[derive(Parser, Debug)]
#[command(name = "word_decoder")]
#[command(about = "Wordle-style word guessing game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Word list file, one word per line in the first CSV column (overrides config)
        #[arg(short, long)]
        word_list: Option<PathBuf>,

        /// How clues mark repeated letters (overrides config)
        #[arg(long, value_enum)]
        scoring: Option<ScoringMode>,
    },

    /// Print the clue for a guess against a secret word
    Clue {
        /// Guessed word
        guess: String,

        /// Secret word
        secret: String,

        /// How clues mark repeated letters
        #[arg(long, value_enum, default_value = "naive")]
        scoring: ScoringMode,
    },
}
