pub mod seed;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{QuizQuestion, Topic, Vocabulary};

pub use sqlite::SqliteStore;

/// Read access to the immutable reference data.
///
/// A `topic_id` of `None` means "all topics"; an id that matches nothing
/// yields an empty list, never an error.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, StoreError>;

    async fn fetch_topic(&self, id: i64) -> Result<Option<Topic>, StoreError>;

    async fn fetch_vocabularies(&self, topic_id: Option<i64>)
        -> Result<Vec<Vocabulary>, StoreError>;

    async fn fetch_quizzes(&self, topic_id: Option<i64>) -> Result<Vec<QuizQuestion>, StoreError>;
}
