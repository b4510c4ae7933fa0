use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Conversation, ConversationStats, DialogueRequest},
    repositories::ConversationRepository,
    services::generation_service::GenerationService,
};

pub const HISTORY_LIMIT: i64 = 20;
pub const SEARCH_LIMIT: i64 = 10;

pub struct ConversationService {
    repository: Arc<dyn ConversationRepository>,
    generator: Arc<GenerationService>,
}

impl ConversationService {
    pub fn new(repository: Arc<dyn ConversationRepository>, generator: Arc<GenerationService>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Generates a dialogue and stores it.
    pub async fn start_conversation(&self, request: DialogueRequest) -> AppResult<Conversation> {
        log::info!(
            "Generating dialogue on '{}' ({} turns, {}, {})",
            request.topic,
            request.turns,
            request.style,
            request.mode
        );

        let dialogue = self.generator.generate_dialogue(&request).await.map_err(|err| {
            log::error!("Dialogue generation failed: {}", err);
            AppError::from(err)
        })?;

        let conversation = self
            .repository
            .create(Conversation::new(&request, &dialogue))
            .await?;

        log::info!("Saved conversation {}", conversation.id);
        Ok(conversation)
    }

    pub async fn history(&self) -> AppResult<Vec<Conversation>> {
        self.repository.list_recent(HISTORY_LIMIT).await
    }

    pub async fn get_conversation(&self, id: &str) -> AppResult<Conversation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Conversation with id '{}' not found", id)))
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<Conversation>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }
        self.repository.search(query, SEARCH_LIMIT).await
    }

    pub async fn delete_conversation(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted conversation {}", id);
        Ok(())
    }

    pub async fn stats(&self) -> AppResult<ConversationStats> {
        self.repository.stats(Utc::now()).await
    }
}
