use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::generation::DialogueRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Conversation {
    pub id: String,
    pub topic: String,
    pub style: String,
    pub mode: String,
    pub turns: i32,
    pub result: String, // generated dialogue text
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(request: &DialogueRequest, result: &str) -> Self {
        Conversation {
            id: Uuid::new_v4().to_string(),
            topic: request.topic.clone(),
            style: request.style.clone(),
            mode: request.mode.clone(),
            turns: i32::try_from(request.turns).unwrap_or(i32::MAX),
            result: result.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match on topic or dialogue text.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.topic.to_lowercase().contains(&needle) || self.result.to_lowercase().contains(&needle)
    }
}
