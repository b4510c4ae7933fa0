use chrono::{Duration, Utc};
use serde_json::json;

use thinkmate_server::{
    errors::AppError,
    models::domain::{Conversation, DialogueRequest, FlashcardSet, QuizSession},
    repositories::{ConversationRepository, FlashcardSetRepository, QuizSessionRepository},
};
use thinkmate_server::{errors, models, repositories};

#[path = "../src/repositories/memory.rs"]
mod memory;

use memory::{
    InMemoryConversationRepository, InMemoryFlashcardSetRepository, InMemoryQuizSessionRepository,
};

fn conversation(topic: &str, dialogue: &str, minutes_ago: i64) -> Conversation {
    let mut conversation = Conversation::new(&DialogueRequest::new(topic, 2), dialogue);
    conversation.created_at = Utc::now() - Duration::minutes(minutes_ago);
    conversation
}

fn session(score: i32, num_questions: i32) -> QuizSession {
    QuizSession::new(
        Some("Algebra".to_string()),
        None,
        num_questions,
        vec![json!({"type": "MCQ"})],
        json!({"0": "x = 2"}),
        vec![json!("x = 2")],
        score,
    )
}

#[tokio::test]
async fn conversation_repository_contract() {
    let repo = InMemoryConversationRepository::new();

    let older = repo
        .create(conversation("Volcanoes", "Student: Why do they erupt?", 10))
        .await
        .unwrap();
    let newer = repo
        .create(conversation("Glaciers", "Teacher: Ice moves, slowly.", 1))
        .await
        .unwrap();

    // Ids are unique.
    assert!(matches!(
        repo.create(older.clone()).await,
        Err(AppError::DatabaseError(_))
    ));

    assert_eq!(repo.find_by_id(&older.id).await.unwrap(), Some(older.clone()));
    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);

    let recent = repo.list_recent(20).await.unwrap();
    assert_eq!(
        recent.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec![newer.id.as_str(), older.id.as_str()]
    );
    assert_eq!(repo.list_recent(1).await.unwrap().len(), 1);

    let by_text = repo.search("ICE MOVES", 10).await.unwrap();
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].id, newer.id);

    let by_topic = repo.search("volcano", 10).await.unwrap();
    assert_eq!(by_topic[0].id, older.id);

    let stats = repo.stats(Utc::now()).await.unwrap();
    assert_eq!(stats.total_conversations, 2);
    assert_eq!(stats.total_turns, 4);
    assert_eq!(stats.unique_topics, 2);

    repo.delete(&older.id).await.unwrap();
    assert!(matches!(
        repo.delete(&older.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn conversation_stats_count_today_only() {
    let repo = InMemoryConversationRepository::new();
    repo.create(conversation("Rivers", "Student: Where do they start?", 0))
        .await
        .unwrap();
    repo.create(conversation("Rivers", "Student: Where do they end?", 60 * 24 * 3))
        .await
        .unwrap();

    let stats = repo.stats(Utc::now()).await.unwrap();
    assert_eq!(stats.total_conversations, 2);
    assert_eq!(stats.unique_topics, 1);
    assert_eq!(stats.today_sessions, 1);
}

#[tokio::test]
async fn quiz_session_repository_contract() {
    let repo = InMemoryQuizSessionRepository::new();

    let empty = repo.stats(Utc::now()).await.unwrap();
    assert_eq!(empty.total_quizzes, 0);
    assert_eq!(empty.average_score, 0.0);

    let first = repo.create(session(3, 5)).await.unwrap();
    repo.create(session(4, 5)).await.unwrap();
    repo.create(session(4, 10)).await.unwrap();

    let stats = repo.stats(Utc::now()).await.unwrap();
    assert_eq!(stats.total_quizzes, 3);
    assert_eq!(stats.total_questions, 20);
    assert_eq!(stats.average_score, 3.67);
    assert_eq!(stats.quizzes_today, 3);

    assert_eq!(
        repo.find_by_id(&first.id).await.unwrap().map(|s| s.score),
        Some(3)
    );

    repo.delete(&first.id).await.unwrap();
    assert_eq!(repo.list_recent(20).await.unwrap().len(), 2);
    assert!(matches!(
        repo.delete(&first.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn flashcard_set_repository_contract() {
    let repo = InMemoryFlashcardSetRepository::new();

    let mut old = FlashcardSet::new(
        Some("Spanish".to_string()),
        None,
        vec![json!({"term": "hola", "definition": "hello"})],
    );
    old.created_at = Utc::now() - Duration::days(2);
    let old = repo.create(old).await.unwrap();

    let new = repo
        .create(FlashcardSet::new(
            None,
            Some("Mitochondria produce ATP.".to_string()),
            vec![
                json!({"term": "ATP", "definition": "Energy carrier"}),
                json!({"term": "Mitochondria", "definition": "Powerhouse"}),
            ],
        ))
        .await
        .unwrap();

    let recent = repo.list_recent(20).await.unwrap();
    assert_eq!(recent[0].id, new.id);
    assert_eq!(recent[1].id, old.id);

    let stats = repo.stats(Utc::now()).await.unwrap();
    assert_eq!(stats.total_flashcard_sets, 2);
    assert_eq!(stats.total_flashcards_generated, 3);
    assert_eq!(stats.sets_created_today, 1);

    repo.delete(&new.id).await.unwrap();
    assert_eq!(repo.find_by_id(&new.id).await.unwrap(), None);
}
