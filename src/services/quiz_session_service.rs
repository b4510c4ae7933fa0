use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{quiz_question::quiz_issues, QuizRequest, QuizSession, QuizStats},
    repositories::QuizSessionRepository,
    services::{
        conversation_service::HISTORY_LIMIT,
        generation_service::{split_normalization, GenerationOutcome, GenerationService},
    },
};

pub struct QuizSessionService {
    repository: Arc<dyn QuizSessionRepository>,
    generator: Arc<GenerationService>,
}

impl QuizSessionService {
    pub fn new(repository: Arc<dyn QuizSessionRepository>, generator: Arc<GenerationService>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Quizzes are only stored once the learner submits their answers.
    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<GenerationOutcome> {
        log::info!(
            "Generating {} quiz questions",
            request.num_questions.get()
        );

        let outcome = split_normalization(self.generator.generate_quiz(&request).await)?;

        match &outcome {
            Ok(quiz) => {
                let questions = quiz["quiz"].as_array().map(Vec::as_slice).unwrap_or_default();
                for issue in quiz_issues(questions) {
                    log::warn!("Generated quiz has a malformed entry: {}", issue);
                }
            }
            Err(failure) => log::warn!("Quiz output unusable: {}", failure.kind.message()),
        }

        Ok(outcome)
    }

    pub async fn save_results(&self, session: QuizSession) -> AppResult<QuizSession> {
        let session = self.repository.create(session).await?;
        log::info!(
            "Saved quiz session {} (score {}/{})",
            session.id,
            session.score,
            session.num_questions
        );
        Ok(session)
    }

    pub async fn history(&self) -> AppResult<Vec<QuizSession>> {
        self.repository.list_recent(HISTORY_LIMIT).await
    }

    pub async fn get_session(&self, id: &str) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz session with id '{}' not found", id)))
    }

    pub async fn delete_session(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted quiz session {}", id);
        Ok(())
    }

    pub async fn stats(&self) -> AppResult<QuizStats> {
        self.repository.stats(Utc::now()).await
    }
}
