use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ConversationRepository, FlashcardSetRepository, MongoConversationRepository,
        MongoFlashcardSetRepository, MongoQuizSessionRepository, QuizSessionRepository,
    },
    services::{
        CompletionClient, ConversationService, FlashcardService, GenerationService,
        OpenAiCompletionClient, QuizSessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub conversation_service: Arc<ConversationService>,
    pub quiz_service: Arc<QuizSessionService>,
    pub flashcard_service: Arc<FlashcardService>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let conversation_repository = Arc::new(MongoConversationRepository::new(&db));
        conversation_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizSessionRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let flashcard_repository = Arc::new(MongoFlashcardSetRepository::new(&db));
        flashcard_repository.ensure_indexes().await?;

        let client = Arc::new(OpenAiCompletionClient::new(config));

        Ok(Self::from_parts(
            client,
            conversation_repository,
            quiz_repository,
            flashcard_repository,
        ))
    }

    /// Wires the services over any client and repositories.
    pub fn from_parts(
        client: Arc<dyn CompletionClient>,
        conversations: Arc<dyn ConversationRepository>,
        quiz_sessions: Arc<dyn QuizSessionRepository>,
        flashcard_sets: Arc<dyn FlashcardSetRepository>,
    ) -> Self {
        let generator = Arc::new(GenerationService::new(client));

        Self {
            conversation_service: Arc::new(ConversationService::new(
                conversations,
                Arc::clone(&generator),
            )),
            quiz_service: Arc::new(QuizSessionService::new(quiz_sessions, Arc::clone(&generator))),
            flashcard_service: Arc::new(FlashcardService::new(flashcard_sets, generator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
