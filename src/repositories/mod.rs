pub mod conversation_repository;
pub mod flashcard_set_repository;
#[cfg(test)]
pub mod memory;
pub mod quiz_session_repository;

pub use conversation_repository::{ConversationRepository, MongoConversationRepository};
pub use flashcard_set_repository::{FlashcardSetRepository, MongoFlashcardSetRepository};
#[cfg(test)]
pub use memory::{
    InMemoryConversationRepository, InMemoryFlashcardSetRepository, InMemoryQuizSessionRepository,
};
pub use quiz_session_repository::{MongoQuizSessionRepository, QuizSessionRepository};
