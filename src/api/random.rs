use axum::extract::State;
use axum::Json;
use log::debug;

use super::extract::ApiQuery;
use super::params::{count, RandomQuery};
use super::AppState;
use crate::error::ApiError;
use crate::exercise::{FillBlankQuestion, MatchingGame, ScrambledWord};
use crate::models::{QuizQuestion, Vocabulary};

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_PAIRS: usize = 8;
const DEFAULT_QUESTIONS: usize = 5;
const DEFAULT_WORDS: usize = 8;

pub async fn vocabularies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<Vec<Vocabulary>>, ApiError> {
    let limit = count(query.limit.as_deref(), DEFAULT_LIMIT, state.max_exercise_count);
    let picked = state
        .generator
        .random_vocabularies(query.topic_filter(), limit)
        .await?;
    debug!("random vocabularies: {} returned", picked.len());
    Ok(Json(picked))
}

pub async fn quiz(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let quiz = state.generator.random_quiz(query.topic_filter()).await?;
    debug!("random quiz: {} questions", quiz.len());
    Ok(Json(quiz))
}

pub async fn matching(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<MatchingGame>, ApiError> {
    let pairs = count(query.pairs.as_deref(), DEFAULT_PAIRS, state.max_exercise_count);
    let game = state
        .generator
        .matching_game(query.topic_filter(), pairs)
        .await?;
    Ok(Json(game))
}

pub async fn fill_blank(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<Vec<FillBlankQuestion>>, ApiError> {
    let questions = count(
        query.questions.as_deref(),
        DEFAULT_QUESTIONS,
        state.max_exercise_count,
    );
    let questions = state
        .generator
        .fill_in_blank(query.topic_filter(), questions)
        .await?;
    Ok(Json(questions))
}

pub async fn scramble(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<Vec<ScrambledWord>>, ApiError> {
    let words = count(query.words.as_deref(), DEFAULT_WORDS, state.max_exercise_count);
    let scrambles = state
        .generator
        .word_scramble(query.topic_filter(), words)
        .await?;
    Ok(Json(scrambles))
}
