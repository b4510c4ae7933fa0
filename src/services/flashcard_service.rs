use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{flashcard_set::incomplete_cards, FlashcardRequest, FlashcardSet, FlashcardStats},
    repositories::FlashcardSetRepository,
    services::{
        conversation_service::HISTORY_LIMIT,
        generation_service::{split_normalization, GenerationOutcome, GenerationService},
    },
};

pub struct FlashcardService {
    repository: Arc<dyn FlashcardSetRepository>,
    generator: Arc<GenerationService>,
}

impl FlashcardService {
    pub fn new(repository: Arc<dyn FlashcardSetRepository>, generator: Arc<GenerationService>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Generates a set and stores it when the output is usable. The stored
    /// set's id is added to the returned object; unusable output is handed
    /// back untouched and nothing is saved.
    pub async fn generate_and_save(&self, request: FlashcardRequest) -> AppResult<GenerationOutcome> {
        log::info!("Generating {} flashcards", request.num_cards.get());

        let mut flashcards = match split_normalization(self.generator.generate_flashcards(&request).await)? {
            Ok(flashcards) => flashcards,
            Err(failure) => {
                log::warn!("Flashcard output unusable: {}", failure.kind.message());
                return Ok(Err(failure));
            }
        };

        let cards = flashcards["flashcards"].as_array().cloned().unwrap_or_default();
        let incomplete = incomplete_cards(&cards);
        if !incomplete.is_empty() {
            log::warn!("Flashcards missing a term or definition: {:?}", incomplete);
        }

        let set = self
            .repository
            .create(FlashcardSet::new(request.topic, request.content, cards))
            .await?;
        log::info!("Saved flashcard set {} ({} cards)", set.id, set.num_cards);

        if let Value::Object(map) = &mut flashcards {
            map.insert("id".to_string(), Value::String(set.id));
        }
        Ok(Ok(flashcards))
    }

    pub async fn history(&self) -> AppResult<Vec<FlashcardSet>> {
        self.repository.list_recent(HISTORY_LIMIT).await
    }

    pub async fn get_set(&self, id: &str) -> AppResult<FlashcardSet> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flashcard set with id '{}' not found", id)))
    }

    pub async fn delete_set(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted flashcard set {}", id);
        Ok(())
    }

    pub async fn stats(&self) -> AppResult<FlashcardStats> {
        self.repository.stats(Utc::now()).await
    }
}
