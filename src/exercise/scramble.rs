use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Vocabulary;

/// Reshuffles tried before falling back to a rotation.
const MAX_SHUFFLES: usize = 16;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrambledWord {
    pub scrambled: String,
    pub correct_word: String,
    pub meaning: String,
    pub id: i64,
    /// False when no arrangement differs from the word (one character,
    /// or a single repeated character); `scrambled` is then the word itself.
    pub scrambled_ok: bool,
}

impl ScrambledWord {
    pub fn from_vocabulary<R: Rng + ?Sized>(vocab: &Vocabulary, rng: &mut R) -> Self {
        let (scrambled, scrambled_ok) = match scramble(&vocab.word, rng) {
            Some(scrambled) => (scrambled, true),
            None => (vocab.word.clone(), false),
        };

        Self {
            scrambled,
            correct_word: vocab.word.clone(),
            meaning: vocab.meaning.clone(),
            id: vocab.id,
            scrambled_ok,
        }
    }
}

/// Returns a permutation of the characters of `word` that differs from it,
/// or `None` if every permutation equals the word.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
    let original = word.chars().collect::<Vec<char>>();
    let first = *original.first()?;
    if original.iter().all(|c| *c == first) {
        return None;
    }

    let mut letters = original.clone();
    for _ in 0..MAX_SHUFFLES {
        letters.shuffle(rng);
        if letters != original {
            return Some(letters.into_iter().collect());
        }
    }

    // A rotation by one only equals the word when all characters are the
    // same, which was ruled out above.
    letters = original;
    letters.rotate_left(1);
    Some(letters.into_iter().collect())
}
