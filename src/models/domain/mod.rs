pub mod conversation;
pub mod flashcard_set;
pub mod generation;
pub mod quiz_question;
pub mod quiz_session;
pub mod stats;
pub mod timestamp;

pub use conversation::Conversation;
pub use flashcard_set::{Flashcard, FlashcardSet};
pub use generation::{
    ArtifactKind, DialogueMode, DialogueRequest, DialogueStyle, FlashcardRequest,
    GenerationRequest, ItemCount, QuizRequest, SourceMaterial,
};
pub use quiz_question::QuizQuestion;
pub use quiz_session::QuizSession;
pub use stats::{ConversationStats, FlashcardStats, QuizStats};
