use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConversationStats {
    pub total_conversations: u64,
    pub total_turns: i64,
    pub unique_topics: u64,
    pub today_sessions: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuizStats {
    pub total_quizzes: u64,
    pub total_questions: i64,
    pub average_score: f64,
    pub quizzes_today: u64,
}

impl QuizStats {
    /// Average score is rounded to two decimals and 0.0 with no quizzes.
    pub fn from_totals(
        total_quizzes: u64,
        total_questions: i64,
        total_score: i64,
        quizzes_today: u64,
    ) -> Self {
        let average_score = if total_quizzes > 0 {
            let average = total_score as f64 / total_quizzes as f64;
            (average * 100.0).round() / 100.0
        } else {
            0.0
        };

        QuizStats {
            total_quizzes,
            total_questions,
            average_score,
            quizzes_today,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlashcardStats {
    pub total_flashcard_sets: u64,
    pub total_flashcards_generated: i64,
    pub sets_created_today: u64,
}
