//! HTTP surface: every route lives under `/api`.

pub mod account;
pub mod content;
pub mod extract;
pub mod params;
pub mod random;

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::auth::Auth;
use crate::exercise::RandomGenerator;
use crate::store::SqliteStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteStore>,
    pub generator: RandomGenerator<SqliteStore>,
    pub auth: Auth,
    pub max_exercise_count: usize,
}

impl AppState {
    pub fn new(store: Arc<SqliteStore>, auth: Auth, max_exercise_count: usize) -> Self {
        Self {
            generator: RandomGenerator::new(store.clone()),
            store,
            auth,
            max_exercise_count,
        }
    }
}

impl FromRef<AppState> for Auth {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

pub fn router(state: AppState) -> Router {
    let random = Router::new()
        .route("/vocabularies", get(random::vocabularies))
        .route("/quiz", get(random::quiz))
        .route("/matching", get(random::matching))
        .route("/fill-blank", get(random::fill_blank))
        .route("/scramble", get(random::scramble));

    let api = Router::new()
        .route("/health", get(health))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/topics", get(content::topics))
        .route("/topics/:topic_id", get(content::topic))
        .route("/topics/:topic_id/vocabularies", get(content::topic_vocabularies))
        .route("/topics/:topic_id/quiz", get(content::topic_quiz))
        .route("/quiz/submit", post(account::submit_quiz))
        .route("/progress", get(account::progress))
        .nest("/random", random);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
