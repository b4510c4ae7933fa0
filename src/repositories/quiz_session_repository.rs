use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{created_on_day_filter, sum_field, Database},
    errors::{AppError, AppResult},
    models::domain::{QuizSession, QuizStats},
};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizSessionRepository: Send + Sync {
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>>;
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<QuizSession>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn stats(&self, now: DateTime<Utc>) -> AppResult<QuizStats>;
}

pub struct MongoQuizSessionRepository {
    collection: Collection<QuizSession>,
}

impl MongoQuizSessionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_sessions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_sessions collection");

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

        log::info!("Successfully created indexes for quiz_sessions collection");
        Ok(())
    }
}

#[async_trait]
impl QuizSessionRepository for MongoQuizSessionRepository {
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession> {
        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>> {
        let session = self.collection.find_one(doc! { "id": id }).await?;
        Ok(session)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<QuizSession>> {
        let sessions = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(sessions)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz session with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<QuizStats> {
        let total_quizzes = self.collection.count_documents(doc! {}).await?;
        let total_questions = sum_field(&self.collection, "num_questions").await?;
        let total_score = sum_field(&self.collection, "score").await?;
        let quizzes_today = self
            .collection
            .count_documents(created_on_day_filter(now))
            .await?;

        Ok(QuizStats::from_totals(
            total_quizzes,
            total_questions,
            total_score,
            quizzes_today,
        ))
    }
}
