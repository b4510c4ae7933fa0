use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A taken quiz: the generated questions, the learner's answers and the score.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_questions: i32,
    pub quiz: Vec<Value>,
    pub user_answers: Value,
    pub correct_answers: Vec<Value>,
    pub score: i32,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub const CONTENT_PREVIEW_CHARS: usize = 100;

    pub fn new(
        topic: Option<String>,
        content: Option<String>,
        num_questions: i32,
        quiz: Vec<Value>,
        user_answers: Value,
        correct_answers: Vec<Value>,
        score: i32,
    ) -> Self {
        QuizSession {
            id: Uuid::new_v4().to_string(),
            topic,
            content,
            num_questions,
            quiz,
            user_answers,
            correct_answers,
            score,
            created_at: Utc::now(),
        }
    }

    /// Content shortened for history listings.
    pub fn content_preview(&self) -> Option<String> {
        self.content.as_ref().map(|content| {
            if content.chars().count() > Self::CONTENT_PREVIEW_CHARS {
                let head: String = content.chars().take(Self::CONTENT_PREVIEW_CHARS).collect();
                format!("{}...", head)
            } else {
                content.clone()
            }
        })
    }
}
