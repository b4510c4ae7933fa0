use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated quiz question as the model is asked to produce it.
///
/// Deserialization is deliberately forgiving: models vary key names and
/// omit fields, and the quiz is stored as received. Use [`QuizQuestion::issues`]
/// to find out what a question is missing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "type", default)]
    pub question_type: QuizQuestionType,
    #[serde(alias = "question_text", alias = "questionText", default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(alias = "correct_answer", alias = "correctAnswer", default)]
    pub answer: String,
    #[serde(alias = "rationale", default)]
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum QuizQuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "True/False", alias = "TrueFalse", alias = "true/false")]
    TrueFalse,
    #[serde(rename = "Fill-in-the-blank", alias = "FillBlank", alias = "fill-in-the-blank")]
    FillBlank,
    #[default]
    #[serde(other)]
    Unknown,
}

impl QuizQuestion {
    pub const MCQ_OPTION_COUNT: usize = 4;

    /// Reads a question leniently; values that cannot be read yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Structural problems with this question, empty when it is well formed.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.question.trim().is_empty() {
            issues.push("missing question text".to_string());
        }
        if self.answer.trim().is_empty() {
            issues.push("missing answer".to_string());
        }

        match self.question_type {
            QuizQuestionType::Mcq if self.options.len() != Self::MCQ_OPTION_COUNT => {
                issues.push(format!(
                    "MCQ has {} options, expected {}",
                    self.options.len(),
                    Self::MCQ_OPTION_COUNT
                ));
            }
            QuizQuestionType::TrueFalse
                if !matches!(self.answer.trim().to_lowercase().as_str(), "true" | "false") =>
            {
                issues.push(format!("True/False answer '{}' is not True or False", self.answer));
            }
            QuizQuestionType::Unknown => issues.push("unknown question type".to_string()),
            _ => {}
        }

        issues
    }
}

/// Collects per-question issues for a quiz array, labelled by position.
pub fn quiz_issues(quiz: &[Value]) -> Vec<String> {
    quiz.iter()
        .enumerate()
        .flat_map(|(index, value)| match QuizQuestion::from_value(value) {
            Some(question) => question
                .issues()
                .into_iter()
                .map(|issue| format!("question {}: {}", index + 1, issue))
                .collect(),
            None => vec![format!("question {}: not a question object", index + 1)],
        })
        .collect()
}
