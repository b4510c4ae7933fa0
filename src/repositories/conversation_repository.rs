use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{created_on_day_filter, sum_field, Database},
    errors::{AppError, AppResult},
    models::domain::{Conversation, ConversationStats},
};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create(&self, conversation: Conversation) -> AppResult<Conversation>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Conversation>>;
    /// Newest first.
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<Conversation>>;
    /// Case-insensitive match on topic or dialogue text, newest first.
    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<Conversation>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn stats(&self, now: DateTime<Utc>) -> AppResult<ConversationStats>;
}

pub struct MongoConversationRepository {
    collection: Collection<Conversation>,
}

impl MongoConversationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("conversations");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for conversations collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(created_at_index).await?;

        log::info!("Successfully created indexes for conversations collection");
        Ok(())
    }
}

#[async_trait]
impl ConversationRepository for MongoConversationRepository {
    async fn create(&self, conversation: Conversation) -> AppResult<Conversation> {
        self.collection.insert_one(&conversation).await?;
        Ok(conversation)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Conversation>> {
        let conversation = self.collection.find_one(doc! { "id": id }).await?;
        Ok(conversation)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<Conversation>> {
        let conversations = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(conversations)
    }

    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<Conversation>> {
        let pattern = regex::escape(query);
        let filter = doc! {
            "$or": [
                { "topic": { "$regex": &pattern, "$options": "i" } },
                { "result": { "$regex": &pattern, "$options": "i" } },
            ]
        };

        let conversations = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(conversations)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Conversation with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<ConversationStats> {
        let total_conversations = self.collection.count_documents(doc! {}).await?;
        let total_turns = sum_field(&self.collection, "turns").await?;
        let unique_topics = self.collection.distinct("topic", doc! {}).await?.len() as u64;
        let today_sessions = self
            .collection
            .count_documents(created_on_day_filter(now))
            .await?;

        Ok(ConversationStats {
            total_conversations,
            total_turns,
            unique_topics,
            today_sessions,
        })
    }
}
