use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GenerationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Dialogue,
    Quiz,
    Flashcards,
}

/// Number of questions or cards to generate. Always between one and `MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCount(u32);

impl ItemCount {
    pub const DEFAULT: u32 = 5;
    pub const MAX: u32 = 50;

    /// Counts outside `1..=MAX` fall back to the default.
    pub fn new(value: i64) -> Self {
        match u32::try_from(value) {
            Ok(n) if (1..=Self::MAX).contains(&n) => ItemCount(n),
            _ => ItemCount(Self::DEFAULT),
        }
    }

    /// Resolves a loosely typed JSON field: integers, integral floats and
    /// numeric strings are honoured, everything else yields the default.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(parse_loose_integer) {
            Some(n) => Self::new(n),
            None => ItemCount(Self::DEFAULT),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Stored form of the count; `MAX` keeps it within `i32`.
    pub fn stored(&self) -> i32 {
        i32::try_from(self.0).unwrap_or(Self::MAX as i32)
    }
}

impl Default for ItemCount {
    fn default() -> Self {
        ItemCount(Self::DEFAULT)
    }
}

fn parse_loose_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DialogueStyle {
    #[default]
    Natural,
    Formal,
    Humorous,
    Technical,
}

impl DialogueStyle {
    pub const ALL: [DialogueStyle; 4] = [
        DialogueStyle::Natural,
        DialogueStyle::Formal,
        DialogueStyle::Humorous,
        DialogueStyle::Technical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DialogueStyle::Natural => "natural",
            DialogueStyle::Formal => "formal",
            DialogueStyle::Humorous => "humorous",
            DialogueStyle::Technical => "technical",
        }
    }

    pub fn descriptor(&self) -> &'static str {
        match self {
            DialogueStyle::Natural => "in a friendly, conversational tone",
            DialogueStyle::Formal => "in a formal, academic tone",
            DialogueStyle::Humorous => "with light humor and wit",
            DialogueStyle::Technical => "with precise, technical language",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    /// Unknown styles resolve to `Natural`.
    pub fn resolve(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DialogueMode {
    #[default]
    StudentFirst,
    TeacherFirst,
}

impl DialogueMode {
    pub const ALL: [DialogueMode; 2] = [DialogueMode::StudentFirst, DialogueMode::TeacherFirst];

    pub fn name(&self) -> &'static str {
        match self {
            DialogueMode::StudentFirst => "student-first",
            DialogueMode::TeacherFirst => "teacher-first",
        }
    }

    pub fn starter_rule(&self) -> &'static str {
        match self {
            DialogueMode::StudentFirst => "The student starts by asking about the topic.",
            DialogueMode::TeacherFirst => {
                "The teacher begins with a question or prompt to the student."
            }
        }
    }

    /// Only the two known modes are accepted; there is no fallback.
    pub fn parse(name: &str) -> Result<Self, GenerationError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| GenerationError::InvalidMode(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogueRequest {
    pub topic: String,
    pub turns: u32,
    pub style: String,
    pub mode: String,
}

impl DialogueRequest {
    pub const DEFAULT_TURNS: u32 = 3;
    pub const MAX_TURNS: u32 = 50;

    pub fn new(topic: impl Into<String>, turns: u32) -> Self {
        Self {
            topic: topic.into().trim().to_string(),
            turns,
            style: DialogueStyle::default().name().to_string(),
            mode: DialogueMode::default().name().to_string(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::InvalidRequest("Missing 'topic'".to_string()));
        }
        check_turns_range(self.turns)?;
        DialogueMode::parse(&self.mode)?;
        Ok(())
    }
}

/// Reads the `turns` field of a chat request. Absent means the default,
/// anything that is not an integer is rejected.
pub fn parse_turns(value: Option<&Value>) -> Result<u32, GenerationError> {
    let not_an_integer = || GenerationError::InvalidRequest("'turns' must be an integer".to_string());

    let turns = match value {
        None | Some(Value::Null) => return Ok(DialogueRequest::DEFAULT_TURNS),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(not_an_integer)?,
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| not_an_integer())?,
        Some(_) => return Err(not_an_integer()),
    };

    let turns = u32::try_from(turns.max(0)).unwrap_or(u32::MAX);
    check_turns_range(turns)?;
    Ok(turns)
}

fn check_turns_range(turns: u32) -> Result<(), GenerationError> {
    if turns == 0 {
        return Err(GenerationError::InvalidRequest(
            "'turns' must be at least 1".to_string(),
        ));
    }
    if turns > DialogueRequest::MAX_TURNS {
        return Err(GenerationError::InvalidRequest(format!(
            "'turns' must be at most {}",
            DialogueRequest::MAX_TURNS
        )));
    }
    Ok(())
}

/// What a quiz or flashcard set is generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMaterial<'a> {
    Content(&'a str),
    Topic(&'a str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizRequest {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_questions: ItemCount,
}

impl QuizRequest {
    pub fn new(topic: Option<String>, content: Option<String>, num_questions: ItemCount) -> Self {
        Self {
            topic: non_blank(topic),
            content: non_blank(content),
            num_questions,
        }
    }

    pub fn source(&self) -> Result<SourceMaterial<'_>, GenerationError> {
        source_material(self.topic.as_deref(), self.content.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlashcardRequest {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub num_cards: ItemCount,
}

impl FlashcardRequest {
    pub fn new(topic: Option<String>, content: Option<String>, num_cards: ItemCount) -> Self {
        Self {
            topic: non_blank(topic),
            content: non_blank(content),
            num_cards,
        }
    }

    pub fn source(&self) -> Result<SourceMaterial<'_>, GenerationError> {
        source_material(self.topic.as_deref(), self.content.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationRequest {
    Dialogue(DialogueRequest),
    Quiz(QuizRequest),
    Flashcards(FlashcardRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            GenerationRequest::Dialogue(_) => ArtifactKind::Dialogue,
            GenerationRequest::Quiz(_) => ArtifactKind::Quiz,
            GenerationRequest::Flashcards(_) => ArtifactKind::Flashcards,
        }
    }
}

// Content wins over topic when both are present.
fn source_material<'a>(
    topic: Option<&'a str>,
    content: Option<&'a str>,
) -> Result<SourceMaterial<'a>, GenerationError> {
    match (content, topic) {
        (Some(content), _) => Ok(SourceMaterial::Content(content)),
        (None, Some(topic)) => Ok(SourceMaterial::Topic(topic)),
        (None, None) => Err(GenerationError::InvalidRequest(
            "Provide either 'topic' or 'content'".to_string(),
        )),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
