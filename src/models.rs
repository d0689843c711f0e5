use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Vocabulary {
    pub id: i64,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub pronunciation: Option<String>,
    pub topic_id: i64,
}

/// Label of one of the four answer options of a quiz question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option label {0:?}")]
pub struct UnknownOptionLabel(pub String);

impl FromStr for OptionLabel {
    type Err = UnknownOptionLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            "D" => Ok(OptionLabel::D),
            _ => Err(UnknownOptionLabel(s.to_string())),
        }
    }
}

/// A multiple-choice question with its options keyed by label.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub topic_id: i64,
    pub question: String,
    pub options: BTreeMap<OptionLabel, String>,
    pub correct_answer: OptionLabel,
}

/// Row layout of the `quizzes` table; options are stored as four columns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuizRow {
    pub id: i64,
    pub topic_id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
}

impl TryFrom<QuizRow> for QuizQuestion {
    type Error = UnknownOptionLabel;

    fn try_from(row: QuizRow) -> Result<Self, Self::Error> {
        let correct_answer = row.correct_answer.parse()?;
        let options = OptionLabel::ALL
            .into_iter()
            .zip([row.option_a, row.option_b, row.option_c, row.option_d])
            .collect();
        Ok(Self {
            id: row.id,
            topic_id: row.topic_id,
            question: row.question,
            options,
            correct_answer,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role {other:?}")),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        // Anything unexpected in the role column gets the least privilege.
        let role = row.role.parse().unwrap_or_default();
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password,
            role,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct QuizResult {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: f64,
    pub total_questions: i64,
    pub completed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProgressStats {
    pub learned_words: i64,
    pub average_score: f64,
    pub quizzes_taken: i64,
}
