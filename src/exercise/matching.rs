use rand::seq::SliceRandom;
use rand::Rng;

use super::sampler;
use crate::models::Vocabulary;

/// Ground-truth association used to grade a matching attempt.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchingPair {
    pub word: String,
    pub meaning: String,
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchingGame {
    pub words: Vec<String>,
    pub meanings: Vec<String>,
    pub correct_pairs: Vec<MatchingPair>,
}

impl MatchingGame {
    /// Builds a game of at most `pairs` pairs.
    ///
    /// Twice as many vocabularies are sampled as needed and the first `pairs`
    /// of them are kept; the word and meaning columns are then shuffled
    /// independently of each other.
    pub fn generate<R: Rng + ?Sized>(pool: Vec<Vocabulary>, pairs: usize, rng: &mut R) -> Self {
        let picked = sampler::sample(pool, pairs.saturating_mul(2), rng);

        let correct_pairs = picked
            .into_iter()
            .take(pairs)
            .map(|vocab| MatchingPair {
                word: vocab.word,
                meaning: vocab.meaning,
                id: vocab.id,
            })
            .collect::<Vec<_>>();

        let mut words = correct_pairs
            .iter()
            .map(|p| p.word.clone())
            .collect::<Vec<_>>();
        let mut meanings = correct_pairs
            .iter()
            .map(|p| p.meaning.clone())
            .collect::<Vec<_>>();
        words.shuffle(rng);
        meanings.shuffle(rng);

        Self {
            words,
            meanings,
            correct_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::tests::vocab;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(size: i64) -> Vec<Vocabulary> {
        (1..=size)
            .map(|i| vocab(i, &format!("word{i}"), &format!("meaning{i}"), ""))
            .collect()
    }

    fn sorted(mut values: Vec<String>) -> Vec<String> {
        values.sort();
        values
    }

    #[test]
    fn columns_are_permutations_of_pairs() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = MatchingGame::generate(pool(30), 8, &mut rng);

            assert_eq!(game.correct_pairs.len(), 8);
            assert_eq!(game.words.len(), 8);
            assert_eq!(game.meanings.len(), 8);

            let pair_words = game.correct_pairs.iter().map(|p| p.word.clone()).collect();
            let pair_meanings = game.correct_pairs.iter().map(|p| p.meaning.clone()).collect();
            assert_eq!(sorted(game.words.clone()), sorted(pair_words));
            assert_eq!(sorted(game.meanings.clone()), sorted(pair_meanings));
        }
    }

    #[test]
    fn pairs_keep_word_meaning_and_id_together() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = MatchingGame::generate(pool(20), 5, &mut rng);
        for pair in &game.correct_pairs {
            assert_eq!(pair.word, format!("word{}", pair.id));
            assert_eq!(pair.meaning, format!("meaning{}", pair.id));
        }
    }

    #[test]
    fn small_pool_shrinks_the_game() {
        let mut rng = StdRng::seed_from_u64(9);
        let game = MatchingGame::generate(pool(3), 8, &mut rng);
        assert_eq!(game.correct_pairs.len(), 3);
        assert_eq!(game.words.len(), 3);
        assert_eq!(game.meanings.len(), 3);
    }

    #[test]
    fn empty_pool_gives_empty_game() {
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(
            MatchingGame::generate(Vec::new(), 8, &mut rng),
            MatchingGame::default()
        );
    }

    #[test]
    fn serializes_with_expected_keys() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = MatchingGame::generate(pool(2), 2, &mut rng);
        let json = serde_json::to_value(&game).unwrap();
        assert!(json["words"].is_array());
        assert!(json["meanings"].is_array());
        assert!(json["correct_pairs"][0]["id"].is_number());
    }
}
