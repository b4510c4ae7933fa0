//! Turns raw completion text into the JSON shape stored for an artifact.
//!
//! Models wrap JSON in code fences and leave trailing commas behind; both
//! are repaired textually before parsing. The original text always travels
//! with a failure.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::{
    errors::{NormalizationErrorKind, NormalizationFailure},
    models::domain::ArtifactKind,
};

pub type NormalizationResult = Result<Value, NormalizationFailure>;

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```(?i:json)?\s*").expect("LEADING_FENCE is a valid regex pattern")
});

static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```$").expect("TRAILING_FENCE is a valid regex pattern"));

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*([\]}])").expect("TRAILING_COMMA is a valid regex pattern")
});

pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let without_leading = LEADING_FENCE.replace(trimmed, "");
    TRAILING_FENCE.replace(&without_leading, "").into_owned()
}

/// Drops any comma sitting directly before a closing bracket or brace.
pub fn repair_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

pub fn clean(raw_text: &str) -> String {
    repair_trailing_commas(&strip_code_fence(raw_text))
}

/// Dialogues are prose and only trimmed; quizzes and flashcards must parse.
pub fn normalize(raw_text: &str, kind: ArtifactKind) -> NormalizationResult {
    match kind {
        ArtifactKind::Dialogue => Ok(Value::String(raw_text.trim().to_string())),
        ArtifactKind::Quiz => parse(raw_text).and_then(|parsed| reconcile_quiz(parsed, raw_text)),
        ArtifactKind::Flashcards => {
            parse(raw_text).and_then(|parsed| reconcile_flashcards(parsed, raw_text))
        }
    }
}

fn parse(raw_text: &str) -> NormalizationResult {
    serde_json::from_str(&clean(raw_text))
        .map_err(|_| NormalizationFailure::new(NormalizationErrorKind::ParseError, raw_text))
}

fn reconcile_quiz(parsed: Value, raw_text: &str) -> NormalizationResult {
    match parsed.get("quiz") {
        Some(Value::Array(_)) => Ok(parsed),
        _ => Err(NormalizationFailure::new(
            NormalizationErrorKind::UnexpectedShape,
            raw_text,
        )),
    }
}

fn reconcile_flashcards(parsed: Value, raw_text: &str) -> NormalizationResult {
    match parsed {
        Value::Array(cards) => Ok(json!({ "flashcards": cards })),
        Value::Object(ref map) if map.contains_key("flashcards") => Ok(parsed),
        _ => Err(NormalizationFailure::new(
            NormalizationErrorKind::UnexpectedShape,
            raw_text,
        )),
    }
}
