#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::{Conversation, DialogueRequest, FlashcardSet, QuizSession};

    pub fn conversation(topic: &str, dialogue: &str) -> Conversation {
        Conversation::new(&DialogueRequest::new(topic, 3), dialogue)
    }

    pub fn quiz_payload() -> Value {
        json!({
            "quiz": [
                {
                    "type": "MCQ",
                    "question": "Which planet is largest?",
                    "options": ["Mars", "Jupiter", "Venus", "Mercury"],
                    "answer": "Jupiter",
                    "explanation": "Jupiter is the largest planet."
                },
                {
                    "type": "True/False",
                    "question": "The Sun is a star.",
                    "options": ["True", "False"],
                    "answer": "True",
                    "explanation": "It is a G-type main-sequence star."
                }
            ]
        })
    }

    pub fn quiz_session(topic: &str, score: i32) -> QuizSession {
        let quiz = quiz_payload()["quiz"].as_array().cloned().unwrap_or_default();
        QuizSession::new(
            Some(topic.to_string()),
            None,
            quiz.len() as i32,
            quiz,
            json!({"0": "Jupiter", "1": "False"}),
            vec![json!("Jupiter"), json!("True")],
            score,
        )
    }

    pub fn flashcard_set(topic: &str) -> FlashcardSet {
        FlashcardSet::new(
            Some(topic.to_string()),
            None,
            vec![
                json!({"term": "Orbit", "definition": "Path around a body"}),
                json!({"term": "Comet", "definition": "Icy small body"}),
            ],
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        repositories::{
            InMemoryConversationRepository, InMemoryFlashcardSetRepository,
            InMemoryQuizSessionRepository,
        },
        services::completion_client::MockCompletionClient,
    };

    /// Application state over in-memory storage and a canned model reply.
    pub fn state_with_reply(reply: &'static str) -> AppState {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(move |_| Ok(reply.to_string()));
        state_with_client(client)
    }

    pub fn state_with_client(client: MockCompletionClient) -> AppState {
        AppState::from_parts(
            Arc::new(client),
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(InMemoryQuizSessionRepository::new()),
            Arc::new(InMemoryFlashcardSetRepository::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_session() {
        let session = quiz_session("Planets", 1);
        assert_eq!(session.num_questions, 2);
        assert_eq!(session.correct_answers.len(), 2);
    }

    #[test]
    fn test_fixtures_flashcard_set() {
        let set = flashcard_set("Space");
        assert_eq!(set.num_cards, 2);
        assert_eq!(set.topic.as_deref(), Some("Space"));
    }
}
