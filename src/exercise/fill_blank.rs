use crate::models::Vocabulary;

pub const BLANK: &str = "_____";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FillBlankQuestion {
    pub sentence: String,
    pub correct_word: String,
    pub meaning: String,
    pub id: i64,
    /// False when the word does not occur verbatim in its example, in
    /// which case `sentence` is the example untouched.
    pub blanked: bool,
}

impl FillBlankQuestion {
    pub fn from_vocabulary(vocab: &Vocabulary) -> Self {
        let example = vocab.example.as_deref().unwrap_or_default();
        let (sentence, blanked) = match blank_first(example, &vocab.word) {
            Some(sentence) => (sentence, true),
            None => (example.to_string(), false),
        };

        Self {
            sentence,
            correct_word: vocab.word.clone(),
            meaning: vocab.meaning.clone(),
            id: vocab.id,
            blanked,
        }
    }
}

/// Replaces the first literal occurrence of `word` in `sentence` with [`BLANK`].
fn blank_first(sentence: &str, word: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    let start = sentence.find(word)?;
    let end = start + word.len();
    Some(format!("{}{}{}", &sentence[..start], BLANK, &sentence[end..]))
}
