use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{created_on_day_filter, sum_field, Database},
    errors::{AppError, AppResult},
    models::domain::{FlashcardSet, FlashcardStats},
};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FlashcardSetRepository: Send + Sync {
    async fn create(&self, set: FlashcardSet) -> AppResult<FlashcardSet>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<FlashcardSet>>;
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<FlashcardSet>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn stats(&self, now: DateTime<Utc>) -> AppResult<FlashcardStats>;
}

pub struct MongoFlashcardSetRepository {
    collection: Collection<FlashcardSet>,
}

impl MongoFlashcardSetRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("flashcard_sets");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for flashcard_sets collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for flashcard_sets collection");
        Ok(())
    }
}

#[async_trait]
impl FlashcardSetRepository for MongoFlashcardSetRepository {
    async fn create(&self, set: FlashcardSet) -> AppResult<FlashcardSet> {
        self.collection.insert_one(&set).await?;
        Ok(set)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FlashcardSet>> {
        let set = self.collection.find_one(doc! { "id": id }).await?;
        Ok(set)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<FlashcardSet>> {
        let sets = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(sets)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Flashcard set with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<FlashcardStats> {
        let total_flashcard_sets = self.collection.count_documents(doc! {}).await?;
        let total_flashcards_generated = sum_field(&self.collection, "num_cards").await?;
        let sets_created_today = self
            .collection
            .count_documents(created_on_day_filter(now))
            .await?;

        Ok(FlashcardStats {
            total_flashcard_sets,
            total_flashcards_generated,
            sets_created_today,
        })
    }
}
