use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::NormalizationFailure;
use crate::models::domain::{Conversation, FlashcardSet, QuizSession};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Reply to a freshly generated dialogue.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub id: String,
    pub topic: String,
    pub turns: i32,
    pub style: String,
    pub mode: String,
    pub conversation: String,
}

impl From<Conversation> for ChatResponse {
    fn from(conversation: Conversation) -> Self {
        ChatResponse {
            id: conversation.id,
            topic: conversation.topic,
            turns: conversation.turns,
            style: conversation.style,
            mode: conversation.mode,
            conversation: conversation.result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationDto {
    pub id: String,
    pub timestamp: String,
    pub topic: String,
    pub turns: i32,
    pub style: String,
    pub mode: String,
    pub conversation: String,
}

impl From<Conversation> for ConversationDto {
    fn from(conversation: Conversation) -> Self {
        ConversationDto {
            timestamp: format_timestamp(&conversation.created_at),
            id: conversation.id,
            topic: conversation.topic,
            turns: conversation.turns,
            style: conversation.style,
            mode: conversation.mode,
            conversation: conversation.result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizHistoryItem {
    pub id: String,
    pub timestamp: String,
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_questions: i32,
    pub score: i32,
}

impl From<QuizSession> for QuizHistoryItem {
    fn from(session: QuizSession) -> Self {
        QuizHistoryItem {
            content: session.content_preview(),
            timestamp: format_timestamp(&session.created_at),
            id: session.id,
            topic: session.topic,
            num_questions: session.num_questions,
            score: session.score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSessionDto {
    pub id: String,
    pub timestamp: String,
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_questions: i32,
    pub quiz: Vec<Value>,
    pub user_answers: Value,
    pub correct_answers: Vec<Value>,
    pub score: i32,
}

impl From<QuizSession> for QuizSessionDto {
    fn from(session: QuizSession) -> Self {
        QuizSessionDto {
            timestamp: format_timestamp(&session.created_at),
            id: session.id,
            topic: session.topic,
            content: session.content,
            num_questions: session.num_questions,
            quiz: session.quiz,
            user_answers: session.user_answers,
            correct_answers: session.correct_answers,
            score: session.score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardSetSummary {
    pub id: String,
    pub timestamp: String,
    pub topic: Option<String>,
    pub num_cards: i32,
}

impl From<FlashcardSet> for FlashcardSetSummary {
    fn from(set: FlashcardSet) -> Self {
        FlashcardSetSummary {
            timestamp: format_timestamp(&set.created_at),
            id: set.id,
            topic: set.topic,
            num_cards: set.num_cards,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardSetDto {
    pub id: String,
    pub timestamp: String,
    pub topic: Option<String>,
    pub num_cards: i32,
    pub flashcards: Vec<Value>,
}

impl From<FlashcardSet> for FlashcardSetDto {
    fn from(set: FlashcardSet) -> Self {
        FlashcardSetDto {
            timestamp: format_timestamp(&set.created_at),
            id: set.id,
            topic: set.topic,
            num_cards: set.num_cards,
            flashcards: set.cards,
        }
    }
}

/// Body returned (with 200) when model output could not be used.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationFailureResponse {
    pub error: String,
    pub raw_output: String,
}

impl From<NormalizationFailure> for GenerationFailureResponse {
    fn from(failure: NormalizationFailure) -> Self {
        GenerationFailureResponse {
            error: failure.kind.message().to_string(),
            raw_output: failure.raw_output,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultsSavedResponse {
    pub success: bool,
    pub quiz_session_id: String,
}
