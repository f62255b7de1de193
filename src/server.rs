//! HTTP routes for the game server.

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{error, info, instrument};

use crate::session::{GameResponse, GameSessionManager, GuessOutcome, SessionError};

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single game session.
    pub sessions: GameSessionManager,
}

impl AppState {
    /// Wraps a session manager for use as router state.
    #[instrument(skip(sessions))]
    pub fn new(sessions: GameSessionManager) -> Arc<Self> {
        Arc::new(Self { sessions })
    }
}

/// Body of `POST /guess`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuessRequest {
    /// Guessed word. A missing word is treated as an empty guess.
    #[serde(default)]
    pub word: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}

impl HealthResponse {
    /// Healthy response with the current package version.
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

type ApiResponse = (StatusCode, Json<GameResponse>);

/// Builds the router with all game routes and request logging.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/startNewGame", get(start_new_game))
        .route("/guess/{word}", get(guess_from_path))
        .route("/guess", axum::routing::post(guess_from_body))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Starts a new game, replacing any running one.
///
/// Always `200 OK` with the all-absent clue, unless the store fails.
#[instrument(skip(state))]
pub async fn start_new_game(State(state): State<Arc<AppState>>) -> ApiResponse {
    match state.sessions.start_new_game() {
        Ok(game) => {
            let response = GameResponse::from(game);
            info!(%response, "Game started");
            (StatusCode::OK, Json(response))
        }
        Err(e) => internal_error(e),
    }
}

/// Submits the guess in the path.
#[instrument(skip(state))]
pub async fn guess_from_path(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> ApiResponse {
    submit(&state, &word)
}

/// Submits the guess in the JSON body.
#[instrument(skip(state))]
pub async fn guess_from_body(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GuessRequest>,
) -> ApiResponse {
    submit(&state, req.word.as_deref().unwrap_or_default())
}

fn submit(state: &AppState, word: &str) -> ApiResponse {
    match state.sessions.submit_guess(word) {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => internal_error(e),
    }
}

/// `400 Bad Request` for words outside the list, `200 OK` otherwise.
fn outcome_response(outcome: GuessOutcome) -> ApiResponse {
    let status = if outcome.is_invalid() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    let response = GameResponse::from(outcome);
    info!(status = %status, %response, "Guess processed");
    (status, Json(response))
}

fn internal_error(e: SessionError) -> ApiResponse {
    error!(error = %e, "Session operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GameResponse::message("Internal server error.")),
    )
}
