use std::str::FromStr;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{seed, ContentStore};
use crate::error::StoreError;
use crate::models::{
    ProgressStats, QuizQuestion, QuizResult, QuizRow, Role, Topic, User, UserRow, Vocabulary,
};

const SCHEMA: [&str; 6] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        email TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'user',
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS topics (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        level TEXT NOT NULL,
        description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS vocabularies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL,
        meaning TEXT NOT NULL,
        example TEXT,
        pronunciation TEXT,
        topic_id INTEGER NOT NULL REFERENCES topics (id)
    )",
    "CREATE TABLE IF NOT EXISTS progress (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        vocab_id INTEGER NOT NULL REFERENCES vocabularies (id),
        status TEXT NOT NULL DEFAULT 'not_learned',
        score INTEGER NOT NULL DEFAULT 0,
        last_reviewed TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS quizzes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        topic_id INTEGER NOT NULL REFERENCES topics (id),
        question TEXT NOT NULL,
        option_a TEXT NOT NULL,
        option_b TEXT NOT NULL,
        option_c TEXT NOT NULL,
        option_d TEXT NOT NULL,
        correct_answer TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        quiz_id INTEGER NOT NULL REFERENCES quizzes (id),
        score REAL NOT NULL,
        total_questions INTEGER NOT NULL,
        completed_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
];

/// Record store backed by an SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        if database_url.contains(":memory:") {
            return Self::in_memory().await;
        }
        let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// A private in-memory database. Kept on a single connection that is
    /// never recycled, since the data lives only as long as the connection.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Inserts the sample topics, vocabularies and quizzes unless topics exist.
    /// Returns whether anything was inserted.
    pub async fn seed_reference_data(&self) -> Result<bool, StoreError> {
        let topics: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
            .fetch_one(&self.pool)
            .await?;
        if topics > 0 {
            debug!("reference data already present ({topics} topics)");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        let mut topic_ids = Vec::with_capacity(seed::TOPICS.len());
        for (name, level, description) in seed::TOPICS {
            let id = sqlx::query("INSERT INTO topics (name, level, description) VALUES (?, ?, ?)")
                .bind(name)
                .bind(level)
                .bind(description)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();
            topic_ids.push(id);
        }
        // Seed rows refer to topics by their 1-based position.
        let topic_id = |index: i64| topic_ids[(index - 1) as usize];

        for (word, meaning, example, pronunciation, topic) in seed::VOCABULARIES {
            sqlx::query(
                "INSERT INTO vocabularies (word, meaning, example, pronunciation, topic_id)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(word)
            .bind(meaning)
            .bind(example)
            .bind(pronunciation)
            .bind(topic_id(topic))
            .execute(&mut *tx)
            .await?;
        }

        for (topic, question, a, b, c, d, answer) in seed::QUIZZES {
            sqlx::query(
                "INSERT INTO quizzes
                 (topic_id, question, option_a, option_b, option_c, option_d, correct_answer)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(topic_id(topic))
            .bind(question)
            .bind(a)
            .bind(b)
            .bind(c)
            .bind(d)
            .bind(answer)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(
            "seeded {} topics, {} vocabularies, {} quizzes",
            seed::TOPICS.len(),
            seed::VOCABULARIES.len(),
            seed::QUIZZES.len()
        );
        Ok(true)
    }

    /// Inserts a user and returns its id. Taken usernames or emails give
    /// [`StoreError::Duplicate`].
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO users (username, email, password, role) VALUES (?, ?, ?, ?)")
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password, role, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    /// Appends a quiz result. Results are never updated afterwards.
    pub async fn record_result(
        &self,
        user_id: i64,
        quiz_id: i64,
        score: f64,
        total_questions: i64,
    ) -> Result<QuizResult, StoreError> {
        let result = sqlx::query_as::<_, QuizResult>(
            "INSERT INTO results (user_id, quiz_id, score, total_questions) VALUES (?, ?, ?, ?)
             RETURNING id, user_id, quiz_id, score, total_questions, completed_at",
        )
        .bind(user_id)
        .bind(quiz_id)
        .bind(score)
        .bind(total_questions)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        Ok(result)
    }

    pub async fn progress_stats(&self, user_id: i64) -> Result<ProgressStats, StoreError> {
        let learned_words: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT vocab_id) FROM progress WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let (average, quizzes_taken): (Option<f64>, i64) =
            sqlx::query_as("SELECT AVG(score), COUNT(id) FROM results WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let average_score = (average.unwrap_or(0.0) * 100.0).round() / 100.0;
        Ok(ProgressStats {
            learned_words,
            average_score,
            quizzes_taken,
        })
    }
}

#[async_trait]
impl ContentStore for SqliteStore {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, StoreError> {
        let topics = sqlx::query_as::<_, Topic>(
            "SELECT id, name, level, description FROM topics ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(topics)
    }

    async fn fetch_topic(&self, id: i64) -> Result<Option<Topic>, StoreError> {
        let topic = sqlx::query_as::<_, Topic>(
            "SELECT id, name, level, description FROM topics WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(topic)
    }

    async fn fetch_vocabularies(
        &self,
        topic_id: Option<i64>,
    ) -> Result<Vec<Vocabulary>, StoreError> {
        let vocabularies = sqlx::query_as::<_, Vocabulary>(
            "SELECT id, word, meaning, example, pronunciation, topic_id FROM vocabularies
             WHERE ?1 IS NULL OR topic_id = ?1 ORDER BY id",
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(vocabularies)
    }

    async fn fetch_quizzes(&self, topic_id: Option<i64>) -> Result<Vec<QuizQuestion>, StoreError> {
        let rows = sqlx::query_as::<_, QuizRow>(
            "SELECT id, topic_id, question, option_a, option_b, option_c, option_d, correct_answer
             FROM quizzes WHERE ?1 IS NULL OR topic_id = ?1 ORDER BY id",
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                QuizQuestion::try_from(row)
                    .map_err(|source| StoreError::MalformedQuiz { id, source })
            })
            .collect()
    }
}

fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::Duplicate;
        }
        if db.is_foreign_key_violation() {
            return StoreError::MissingReference;
        }
    }
    StoreError::Database(err)
}
