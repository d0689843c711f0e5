use axum::extract::State;
use axum::Json;

use super::extract::ApiPath;
use super::AppState;
use crate::error::ApiError;
use crate::models::{QuizQuestion, Topic, Vocabulary};
use crate::store::ContentStore;

pub async fn topics(State(state): State<AppState>) -> Result<Json<Vec<Topic>>, ApiError> {
    Ok(Json(state.store.fetch_topics().await?))
}

pub async fn topic(
    State(state): State<AppState>,
    ApiPath(topic_id): ApiPath<i64>,
) -> Result<Json<Topic>, ApiError> {
    state
        .store
        .fetch_topic(topic_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("topic {topic_id} not found")))
}

pub async fn topic_vocabularies(
    State(state): State<AppState>,
    ApiPath(topic_id): ApiPath<i64>,
) -> Result<Json<Vec<Vocabulary>>, ApiError> {
    Ok(Json(state.store.fetch_vocabularies(Some(topic_id)).await?))
}

pub async fn topic_quiz(
    State(state): State<AppState>,
    ApiPath(topic_id): ApiPath<i64>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    Ok(Json(state.store.fetch_quizzes(Some(topic_id)).await?))
}
