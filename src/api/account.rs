use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{info, warn};
use serde_json::{json, Value};

use super::extract::ApiJson;
use super::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{ProgressStats, Role};

#[derive(Debug, serde::Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct AnswerRecord {
    pub quiz_id: i64,
    pub is_correct: bool,
}

#[derive(Debug, serde::Deserialize)]
pub struct SubmitRequest {
    pub results: Vec<AnswerRecord>,
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmitResponse {
    pub score: f64,
    pub correct: usize,
    pub total: usize,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let username = request.username.trim();
    let email = request.email.trim();
    if username.is_empty() || email.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username, email and password are required".to_string(),
        ));
    }

    let auth = state.auth.clone();
    let password = request.password;
    let hash = tokio::task::spawn_blocking(move || auth.hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let user_id = state
        .store
        .create_user(username, email, &hash, Role::User)
        .await?;
    info!("registered user {username} (id {user_id})");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "user_id": user_id })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    // Usernames are stored trimmed.
    let username = request.username.trim();
    let user = state.store.find_user_by_username(username).await?;

    let auth = state.auth.clone();
    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let password = request.password;
    let verified =
        tokio::task::spawn_blocking(move || auth.verify_login(&password, stored_hash.as_deref()))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = match user {
        Some(user) if verified => user,
        _ => {
            warn!("failed login for {username}");
            return Err(ApiError::Unauthorized(
                "invalid username or password".to_string(),
            ));
        }
    };

    let token = state.auth.issue_token(&user)?;
    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": {
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "role": user.role,
        }
    })))
}

/// Grades a finished quiz and appends it to the caller's results.
pub async fn submit_quiz(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ApiJson(request): ApiJson<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Some(first) = request.results.first() else {
        return Err(ApiError::BadRequest("no answers submitted".to_string()));
    };

    let total = request.results.len();
    let correct = request.results.iter().filter(|r| r.is_correct).count();
    let score = correct as f64 / total as f64 * 100.0;

    state
        .store
        .record_result(claims.sub, first.quiz_id, score, total as i64)
        .await?;
    info!("user {} scored {score:.1}% on {total} questions", claims.sub);

    Ok(Json(SubmitResponse {
        score,
        correct,
        total,
    }))
}

pub async fn progress(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ProgressStats>, ApiError> {
    Ok(Json(state.store.progress_stats(claims.sub).await?))
}
