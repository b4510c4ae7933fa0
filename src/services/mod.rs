pub mod completion_client;
pub mod conversation_service;
pub mod flashcard_service;
pub mod generation_service;
pub mod output_normalizer;
pub mod prompt_composer;
pub mod quiz_session_service;

pub use completion_client::{CompletionClient, OpenAiCompletionClient};
pub use conversation_service::ConversationService;
pub use flashcard_service::FlashcardService;
pub use generation_service::{GenerationOutcome, GenerationService};
pub use quiz_session_service::QuizSessionService;
