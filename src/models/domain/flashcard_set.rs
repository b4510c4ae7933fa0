use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flashcard {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
}

impl Flashcard {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn is_complete(&self) -> bool {
        !self.term.trim().is_empty() && !self.definition.trim().is_empty()
    }
}

/// Positions (1-based) of cards lacking a term or definition.
pub fn incomplete_cards(cards: &[Value]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, value)| !Flashcard::from_value(value).is_some_and(|card| card.is_complete()))
        .map(|(index, _)| index + 1)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FlashcardSet {
    pub id: String,
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_cards: i32,
    pub cards: Vec<Value>,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl FlashcardSet {
    /// `num_cards` records how many cards were actually generated.
    pub fn new(topic: Option<String>, content: Option<String>, cards: Vec<Value>) -> Self {
        FlashcardSet {
            id: Uuid::new_v4().to_string(),
            topic,
            content,
            num_cards: i32::try_from(cards.len()).unwrap_or(i32::MAX),
            cards,
            created_at: Utc::now(),
        }
    }
}
