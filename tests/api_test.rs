//! Tests for the REST game routes.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use word_decoder::{
    AppState, GameSessionManager, GameState, MemoryStore, ScoringMode, WordRepository,
    create_router,
};

const WORDS: [&str; 5] = ["house", "balmy", "chill", "hotel", "hoops"];

/// Word source that always picks "house" as the secret.
struct FixedSecret;

impl WordRepository for FixedSecret {
    fn pick_random(&self) -> String {
        "house".to_string()
    }

    fn contains(&self, word: &str) -> bool {
        WORDS.contains(&word.to_lowercase().as_str())
    }
}

/// Router with no running game.
fn empty_app() -> Router {
    app_with_store(MemoryStore::new(), ScoringMode::Naive)
}

/// Router whose running game has secret "HOUSE" and the given attempts left.
fn app_with_game(attempts: u32) -> Router {
    app_with_store(
        MemoryStore::with_state(GameState::new(attempts, "HOUSE")),
        ScoringMode::Naive,
    )
}

fn app_with_store(store: MemoryStore, scoring: ScoringMode) -> Router {
    let sessions = GameSessionManager::with_store(store, Arc::new(FixedSecret), scoring);
    create_router(AppState::new(sessions))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body read failed")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post_guess(app: &Router, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/guess")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_guess_before_starting_asks_for_new_game() {
    let app = empty_app();

    let (status, body) = post_guess(&app, r#"{"word":null}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Please start a new game.");
    assert!(body.get("clue").is_none());

    let (status, body) = get(&app, "/guess/house").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Please start a new game.");
}

#[tokio::test]
async fn test_start_new_game() {
    let app = empty_app();

    let (status, body) = get(&app, "/startNewGame").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "A new game has started. You have 6 attempts.");
    assert_eq!(body["clue"], "XXXXX");
}

#[tokio::test]
async fn test_start_new_game_replaces_running_game() {
    let app = app_with_game(1);

    get(&app, "/startNewGame").await;

    let (status, body) = get(&app, "/guess/balmy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Try again. You have 5 attempts left.");
}

#[tokio::test]
async fn test_correct_guess_ends_the_game() {
    let app = app_with_game(6);

    let (status, body) = post_guess(&app, r#"{"word":"HOUSE"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Congrats! You won the game.");
    assert_eq!(body["clue"], "YYYYY");

    let (_, body) = post_guess(&app, r#"{"word":"HOUSE"}"#).await;
    assert_eq!(body["message"], "Please start a new game.");
}

#[tokio::test]
async fn test_mixed_case_guess_wins_against_uppercase_secret() {
    let app = app_with_game(3);

    let (status, body) = get(&app, "/guess/hoUSe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Congrats! You won the game.");
    assert_eq!(body["clue"], "YYYYY");
}

#[tokio::test]
async fn test_guess_without_word_is_a_client_error() {
    let app = app_with_game(3);

    let (status, body) = post_guess(&app, "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide a word to guess.");
    assert!(body.get("clue").is_none());

    let (_, body) = get(&app, "/guess/balmy").await;
    assert_eq!(body["message"], "Try again. You have 2 attempts left.");
}

#[tokio::test]
async fn test_letter_is_not_in_word() {
    let app = app_with_game(3);

    let (status, body) = post_guess(&app, r#"{"word":"BALMY"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clue"], "XXXXX");
    assert_eq!(body["message"], "Try again. You have 2 attempts left.");
}

#[tokio::test]
async fn test_letter_is_in_word_but_incorrect_spot() {
    let app = app_with_game(3);

    let (status, body) = post_guess(&app, r#"{"word":"CHILL"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clue"], "XHXXX");
    assert_eq!(body["message"], "Try again. You have 2 attempts left.");
}

#[tokio::test]
async fn test_letter_is_in_word_in_correct_spot() {
    let app = app_with_game(3);

    let (status, body) = get(&app, "/guess/hotel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clue"], "YYXHX");
    assert_eq!(body["message"], "Try again. You have 2 attempts left.");
}

#[tokio::test]
async fn test_game_ends_when_no_attempts_left() {
    let app = app_with_game(1);

    let (status, body) = post_guess(&app, r#"{"word":"BALMY"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clue"], "XXXXX");
    assert_eq!(
        body["message"],
        "You have no more attempts left, please start a new game."
    );

    let (status, body) = post_guess(&app, "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Please start a new game.");
}

#[tokio::test]
async fn test_invalid_word_is_a_client_error_and_keeps_attempts() {
    let app = app_with_game(3);

    let (status, body) = get(&app, "/guess/Qwert").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The word Qwert is not valid.");
    assert!(body.get("clue").is_none());

    let (_, body) = get(&app, "/guess/balmy").await;
    assert_eq!(body["message"], "Try again. You have 2 attempts left.");
}

#[tokio::test]
async fn test_frequency_aware_scoring_is_configurable() {
    let naive = app_with_game(3);
    let strict = app_with_store(
        MemoryStore::with_state(GameState::new(3, "house")),
        ScoringMode::FrequencyAware,
    );

    let (_, body) = get(&naive, "/guess/hoops").await;
    assert_eq!(body["clue"], "YYHXH");

    let (_, body) = get(&strict, "/guess/hoops").await;
    assert_eq!(body["clue"], "YYXXH");
}

#[tokio::test]
async fn test_health() {
    let app = empty_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["version"].as_str().unwrap_or_default().is_empty());
}
