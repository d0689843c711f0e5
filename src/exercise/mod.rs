//! Randomized practice exercises built from vocabulary and quiz pools.
//!
//! The generation functions are pure and take the random source as an
//! argument; [`RandomGenerator`] fetches the pool from a [`ContentStore`]
//! and feeds it through them with a fresh thread-local RNG.

pub mod fill_blank;
pub mod matching;
pub mod sampler;
pub mod scramble;

use std::sync::Arc;

use log::debug;

use crate::error::StoreError;
use crate::models::{QuizQuestion, Vocabulary};
use crate::store::ContentStore;

pub use fill_blank::FillBlankQuestion;
pub use matching::{MatchingGame, MatchingPair};
pub use scramble::ScrambledWord;

pub struct RandomGenerator<S> {
    store: Arc<S>,
}

impl<S> Clone for RandomGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: ContentStore> RandomGenerator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn random_vocabularies(
        &self,
        topic_id: Option<i64>,
        limit: usize,
    ) -> Result<Vec<Vocabulary>, StoreError> {
        let pool = self.store.fetch_vocabularies(topic_id).await?;
        debug!("sampling {limit} of {} vocabularies (topic {topic_id:?})", pool.len());
        Ok(sampler::sample(pool, limit, &mut rand::thread_rng()))
    }

    pub async fn random_quiz(&self, topic_id: Option<i64>) -> Result<Vec<QuizQuestion>, StoreError> {
        let pool = self.store.fetch_quizzes(topic_id).await?;
        debug!("drawing a quiz from {} questions (topic {topic_id:?})", pool.len());
        Ok(sampler::pick_quiz(pool, &mut rand::thread_rng()))
    }

    pub async fn matching_game(
        &self,
        topic_id: Option<i64>,
        pairs: usize,
    ) -> Result<MatchingGame, StoreError> {
        let pool = self.store.fetch_vocabularies(topic_id).await?;
        Ok(MatchingGame::generate(pool, pairs, &mut rand::thread_rng()))
    }

    pub async fn fill_in_blank(
        &self,
        topic_id: Option<i64>,
        questions: usize,
    ) -> Result<Vec<FillBlankQuestion>, StoreError> {
        let picked = self.random_vocabularies(topic_id, questions).await?;
        Ok(picked.iter().map(FillBlankQuestion::from_vocabulary).collect())
    }

    pub async fn word_scramble(
        &self,
        topic_id: Option<i64>,
        words: usize,
    ) -> Result<Vec<ScrambledWord>, StoreError> {
        let picked = self.random_vocabularies(topic_id, words).await?;
        let mut rng = rand::thread_rng();
        Ok(picked
            .iter()
            .map(|vocab| ScrambledWord::from_vocabulary(vocab, &mut rng))
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{BTreeMap, HashSet};

    use crate::models::{OptionLabel, Topic};

    pub(crate) fn vocab(id: i64, word: &str, meaning: &str, example: &str) -> Vocabulary {
        Vocabulary {
            id,
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: Some(example.to_string()),
            pronunciation: None,
            topic_id: 1,
        }
    }

    /// In-memory pool split over two topics by id parity.
    struct FakeStore {
        vocabularies: Vec<Vocabulary>,
        quizzes: Vec<QuizQuestion>,
    }

    impl FakeStore {
        fn new(vocab_count: i64, quiz_count: i64) -> Self {
            let vocabularies = (1..=vocab_count)
                .map(|i| Vocabulary {
                    topic_id: 1 + i % 2,
                    ..vocab(i, &format!("word{i}"), &format!("meaning{i}"), &format!("A word{i} here."))
                })
                .collect();
            let quizzes = (1..=quiz_count)
                .map(|i| QuizQuestion {
                    id: i,
                    topic_id: 1 + i % 2,
                    question: format!("question {i}"),
                    options: OptionLabel::ALL
                        .into_iter()
                        .map(|label| (label, format!("{label}{i}")))
                        .collect::<BTreeMap<_, _>>(),
                    correct_answer: OptionLabel::C,
                })
                .collect();
            Self {
                vocabularies,
                quizzes,
            }
        }
    }

    #[async_trait]
    impl ContentStore for FakeStore {
        async fn fetch_topics(&self) -> Result<Vec<Topic>, StoreError> {
            Ok(Vec::new())
        }

        async fn fetch_topic(&self, _id: i64) -> Result<Option<Topic>, StoreError> {
            Ok(None)
        }

        async fn fetch_vocabularies(
            &self,
            topic_id: Option<i64>,
        ) -> Result<Vec<Vocabulary>, StoreError> {
            Ok(self
                .vocabularies
                .iter()
                .filter(|v| topic_id.map_or(true, |t| v.topic_id == t))
                .cloned()
                .collect())
        }

        async fn fetch_quizzes(
            &self,
            topic_id: Option<i64>,
        ) -> Result<Vec<QuizQuestion>, StoreError> {
            Ok(self
                .quizzes
                .iter()
                .filter(|q| topic_id.map_or(true, |t| q.topic_id == t))
                .cloned()
                .collect())
        }
    }

    fn generator(vocab_count: i64, quiz_count: i64) -> RandomGenerator<FakeStore> {
        RandomGenerator::new(Arc::new(FakeStore::new(vocab_count, quiz_count)))
    }

    #[tokio::test]
    async fn vocabularies_are_filtered_and_distinct() {
        let generator = generator(40, 0);
        let picked = generator.random_vocabularies(Some(2), 10).await.unwrap();
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|v| v.topic_id == 2));
        let ids: HashSet<i64> = picked.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn three_vocabularies_with_limit_ten_returns_all() {
        let generator = generator(3, 0);
        let picked = generator.random_vocabularies(None, 10).await.unwrap();
        assert_eq!(picked.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_topic_yields_empty_results() {
        let generator = generator(10, 10);
        assert!(generator.random_vocabularies(Some(42), 5).await.unwrap().is_empty());
        assert!(generator.random_quiz(Some(42)).await.unwrap().is_empty());
        let game = generator.matching_game(Some(42), 8).await.unwrap();
        assert!(game.correct_pairs.is_empty());
        assert!(generator.fill_in_blank(Some(42), 5).await.unwrap().is_empty());
        assert!(generator.word_scramble(Some(42), 8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quiz_has_between_five_and_ten_questions() {
        let generator = generator(0, 40);
        for _ in 0..50 {
            let quiz = generator.random_quiz(None).await.unwrap();
            assert!((5..=10).contains(&quiz.len()));
            let ids: HashSet<i64> = quiz.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), quiz.len());
            assert!(quiz.iter().all(|q| q.options.len() == 4));
        }
    }

    #[tokio::test]
    async fn exercises_honour_requested_sizes() {
        let generator = generator(40, 0);

        let game = generator.matching_game(None, 8).await.unwrap();
        assert_eq!(game.correct_pairs.len(), 8);
        assert_eq!(game.words.len(), 8);

        let blanks = generator.fill_in_blank(Some(1), 5).await.unwrap();
        assert_eq!(blanks.len(), 5);
        assert!(blanks.iter().all(|q| q.blanked && q.sentence.contains("_____")));

        let scrambles = generator.word_scramble(None, 8).await.unwrap();
        assert_eq!(scrambles.len(), 8);
        assert!(scrambles
            .iter()
            .all(|s| s.scrambled_ok && s.scrambled != s.correct_word));
    }
}
