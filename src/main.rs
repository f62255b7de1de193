//! Word Decoder - Unified CLI
//!
//! Runs the game server or scores a single guess from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_decoder::{
    AppState, GameSessionManager, ScoringMode, ServerConfig, WordList, create_router,
    generate_clue, same_normalized_length,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            word_list,
            scoring,
        } => {
            initialize_tracing();
            let config = ServerConfig::load(config.as_deref())?
                .with_host(host)
                .with_port(port)
                .with_word_list(word_list)
                .with_scoring(scoring);
            run_http_server(config).await
        }
        Command::Clue {
            guess,
            secret,
            scoring,
        } => print_clue(&guess, &secret, scoring),
    }
}

/// Run the HTTP game server
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
async fn run_http_server(config: ServerConfig) -> Result<()> {
    info!("Starting Word Decoder server");

    let words = load_words(config.word_list())?;
    let sessions = GameSessionManager::new(Arc::new(words), *config.scoring());
    let app = create_router(AppState::new(sessions));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());
    info!("Routes: GET /startNewGame, GET /guess/{{word}}, POST /guess, GET /health");

    axum::serve(listener, app).await?;

    Ok(())
}

#[instrument]
fn load_words(path: &Path) -> Result<WordList> {
    let words = WordList::load(path)
        .with_context(|| format!("Cannot start without a word list at {}", path.display()))?;
    info!(count = words.len(), "Word list ready");
    Ok(words)
}

/// Print the clue for one guess
fn print_clue(guess: &str, secret: &str, scoring: ScoringMode) -> Result<()> {
    if !same_normalized_length(guess, secret) {
        anyhow::bail!(
            "Guess '{}' and secret '{}' must have the same length",
            guess,
            secret
        );
    }
    println!("{}", generate_clue(guess, secret, scoring));
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,word_decoder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
