use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    generation::parse_turns, DialogueMode, DialogueRequest, DialogueStyle, FlashcardRequest,
    ItemCount, QuizRequest, QuizSession,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 255))]
    pub topic: Option<String>,

    // Loosely typed so "4" and 4 are both accepted and anything else is a 400.
    #[serde(default)]
    pub turns: Option<Value>,

    pub style: Option<String>,
    pub mode: Option<String>,
}

impl ChatRequest {
    pub fn into_dialogue_request(self) -> AppResult<DialogueRequest> {
        self.validate()?;

        let topic = self
            .topic
            .filter(|topic| !topic.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("Missing 'topic'".to_string()))?;
        let turns = parse_turns(self.turns.as_ref())?;

        let mut request = DialogueRequest::new(topic, turns);
        if let Some(style) = self.style {
            request = request.with_style(style);
        }
        if let Some(mode) = self.mode {
            request = request.with_mode(mode);
        }

        // Surface an unknown mode here rather than after the model call.
        DialogueMode::parse(&request.mode)?;
        if DialogueStyle::lookup(&request.style).is_none() {
            log::debug!("Unknown dialogue style '{}', using natural", request.style);
        }

        Ok(request)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizGenerateRequest {
    #[validate(length(max = 255))]
    pub topic: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub num_questions: Option<Value>,
}

impl QuizGenerateRequest {
    pub fn into_quiz_request(self) -> AppResult<QuizRequest> {
        self.validate()?;
        let request = QuizRequest::new(
            self.topic,
            self.content,
            ItemCount::from_value(self.num_questions.as_ref()),
        );
        request.source()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlashcardsRequest {
    #[validate(length(max = 255))]
    pub topic: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub num_cards: Option<Value>,
}

impl FlashcardsRequest {
    pub fn into_flashcard_request(self) -> AppResult<FlashcardRequest> {
        self.validate()?;
        let request = FlashcardRequest::new(
            self.topic,
            self.content,
            ItemCount::from_value(self.num_cards.as_ref()),
        );
        request.source()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveQuizResultsRequest {
    #[validate(length(max = 255))]
    pub topic: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub num_questions: Option<Value>,
    pub quiz: Option<Vec<Value>>,
    pub user_answers: Option<Value>,
    pub correct_answers: Option<Vec<Value>>,
    pub score: Option<i32>,
}

impl SaveQuizResultsRequest {
    pub const MISSING_FIELDS: &'static str =
        "Missing one of required fields: quiz, user_answers, correct_answers, score";

    pub fn into_session(self) -> AppResult<QuizSession> {
        self.validate()?;

        let (Some(quiz), Some(user_answers), Some(correct_answers), Some(score)) =
            (self.quiz, self.user_answers, self.correct_answers, self.score)
        else {
            return Err(AppError::ValidationError(Self::MISSING_FIELDS.to_string()));
        };

        let num_questions = ItemCount::from_value(self.num_questions.as_ref()).stored();

        Ok(QuizSession::new(
            self.topic,
            self.content,
            num_questions,
            quiz,
            user_answers,
            correct_answers,
            score,
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
