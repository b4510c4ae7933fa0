//! In-process repositories. They honour the same contracts as the MongoDB
//! implementations and back the service and handler tests. Test-only: the
//! integration suites under `tests/` mount this file with `#[path]` and
//! re-export `errors`, `models` and `repositories` at their crate root.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        Conversation, ConversationStats, FlashcardSet, FlashcardStats, QuizSession, QuizStats,
    },
    repositories::{ConversationRepository, FlashcardSetRepository, QuizSessionRepository},
};

fn newest_first<T, F>(items: &mut [T], created_at: F)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
}

fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

#[derive(Default, Clone)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<String, Conversation>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, conversation: Conversation) -> AppResult<Conversation> {
        let mut conversations = self.conversations.write().await;
        if conversations.contains_key(&conversation.id) {
            return Err(AppError::DatabaseError(format!(
                "Conversation with id '{}' already exists",
                conversation.id
            )));
        }
        conversations.insert(conversation.id.clone(), conversation.clone());
        Ok(conversation)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Conversation>> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<Conversation>> {
        let conversations = self.conversations.read().await;
        let mut items: Vec<_> = conversations.values().cloned().collect();
        newest_first(&mut items, |c| c.created_at);
        Ok(items.into_iter().take(limit.max(0) as usize).collect())
    }

    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<Conversation>> {
        let conversations = self.conversations.read().await;
        let mut items: Vec<_> = conversations
            .values()
            .filter(|c| c.matches(query))
            .cloned()
            .collect();
        newest_first(&mut items, |c| c.created_at);
        Ok(items.into_iter().take(limit.max(0) as usize).collect())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut conversations = self.conversations.write().await;
        if conversations.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Conversation with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<ConversationStats> {
        let conversations = self.conversations.read().await;
        let mut topics: Vec<&str> = conversations.values().map(|c| c.topic.as_str()).collect();
        topics.sort_unstable();
        topics.dedup();

        Ok(ConversationStats {
            total_conversations: conversations.len() as u64,
            total_turns: conversations.values().map(|c| c.turns as i64).sum(),
            unique_topics: topics.len() as u64,
            today_sessions: conversations
                .values()
                .filter(|c| same_day(c.created_at, now))
                .count() as u64,
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryQuizSessionRepository {
    sessions: Arc<RwLock<HashMap<String, QuizSession>>>,
}

impl InMemoryQuizSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizSessionRepository for InMemoryQuizSessionRepository {
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::DatabaseError(format!(
                "Quiz session with id '{}' already exists",
                session.id
            )));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<QuizSession>> {
        let sessions = self.sessions.read().await;
        let mut items: Vec<_> = sessions.values().cloned().collect();
        newest_first(&mut items, |s| s.created_at);
        Ok(items.into_iter().take(limit.max(0) as usize).collect())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz session with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<QuizStats> {
        let sessions = self.sessions.read().await;
        Ok(QuizStats::from_totals(
            sessions.len() as u64,
            sessions.values().map(|s| s.num_questions as i64).sum(),
            sessions.values().map(|s| s.score as i64).sum(),
            sessions
                .values()
                .filter(|s| same_day(s.created_at, now))
                .count() as u64,
        ))
    }
}

#[derive(Default, Clone)]
pub struct InMemoryFlashcardSetRepository {
    sets: Arc<RwLock<HashMap<String, FlashcardSet>>>,
}

impl InMemoryFlashcardSetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashcardSetRepository for InMemoryFlashcardSetRepository {
    async fn create(&self, set: FlashcardSet) -> AppResult<FlashcardSet> {
        let mut sets = self.sets.write().await;
        if sets.contains_key(&set.id) {
            return Err(AppError::DatabaseError(format!(
                "Flashcard set with id '{}' already exists",
                set.id
            )));
        }
        sets.insert(set.id.clone(), set.clone());
        Ok(set)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets.get(id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<FlashcardSet>> {
        let sets = self.sets.read().await;
        let mut items: Vec<_> = sets.values().cloned().collect();
        newest_first(&mut items, |s| s.created_at);
        Ok(items.into_iter().take(limit.max(0) as usize).collect())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut sets = self.sets.write().await;
        if sets.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Flashcard set with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn stats(&self, now: DateTime<Utc>) -> AppResult<FlashcardStats> {
        let sets = self.sets.read().await;
        Ok(FlashcardStats {
            total_flashcard_sets: sets.len() as u64,
            total_flashcards_generated: sets.values().map(|s| s.num_cards as i64).sum(),
            sets_created_today: sets
                .values()
                .filter(|s| same_day(s.created_at, now))
                .count() as u64,
        })
    }
}
