use std::sync::Arc;

use serde_json::Value;

use crate::{
    errors::{AppResult, GenerationError, NormalizationFailure},
    models::domain::{DialogueRequest, FlashcardRequest, GenerationRequest, QuizRequest},
    services::{
        completion_client::CompletionClient, output_normalizer::normalize,
        prompt_composer::compose,
    },
};

/// A generated artifact, or the model output that could not be used.
pub type GenerationOutcome = Result<Value, NormalizationFailure>;

/// Separates unusable model output, which callers report back as data, from
/// every other failure.
pub fn split_normalization(result: Result<Value, GenerationError>) -> AppResult<GenerationOutcome> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(GenerationError::Normalization(failure)) => Ok(Err(failure)),
        Err(err) => Err(err.into()),
    }
}

/// Builds artifacts: compose a prompt, make one completion call, normalize.
///
/// Holds no state besides the injected client and never retries; failures
/// go back to the caller with the raw model text attached.
pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        if let GenerationRequest::Dialogue(dialogue) = request {
            dialogue.validate()?;
        }
        let prompt = compose(request)?;
        let raw = self.client.complete(&prompt).await?;
        Ok(normalize(&raw, request.kind())?)
    }

    pub async fn generate_dialogue(
        &self,
        request: &DialogueRequest,
    ) -> Result<String, GenerationError> {
        let text = self
            .generate(&GenerationRequest::Dialogue(request.clone()))
            .await?;
        match text {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }

    pub async fn generate_quiz(&self, request: &QuizRequest) -> Result<Value, GenerationError> {
        self.generate(&GenerationRequest::Quiz(request.clone())).await
    }

    pub async fn generate_flashcards(
        &self,
        request: &FlashcardRequest,
    ) -> Result<Value, GenerationError> {
        self.generate(&GenerationRequest::Flashcards(request.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::NormalizationErrorKind,
        models::domain::ItemCount,
        services::{completion_client::MockCompletionClient, prompt_composer::ComposedPrompt},
    };
    use serde_json::json;

    fn service_returning(reply: &'static str) -> GenerationService {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(move |_| Ok(reply.to_string()));
        GenerationService::new(Arc::new(client))
    }

    fn service_never_called() -> GenerationService {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();
        GenerationService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn dialogue_returns_model_text() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt: &ComposedPrompt| {
                prompt.user_prompt == "Topic: Gravity" && prompt.system_prompt.contains("(so 6 messages)")
            })
            .times(1)
            .returning(|_| Ok("Student: Why do apples fall?".to_string()));
        let service = GenerationService::new(Arc::new(client));

        let text = service
            .generate_dialogue(&DialogueRequest::new("Gravity", 3))
            .await
            .unwrap();
        assert_eq!(text, "Student: Why do apples fall?");
    }

    #[tokio::test]
    async fn dialogue_text_is_trimmed() {
        let service = service_returning("\n  Teacher: Shall we begin?\n");
        let text = service
            .generate_dialogue(&DialogueRequest::new("Magnets", 1))
            .await
            .unwrap();
        assert_eq!(text, "Teacher: Shall we begin?");
    }

    #[tokio::test]
    async fn oversized_turns_never_reach_the_model() {
        let service = service_never_called();
        let result = service
            .generate(&GenerationRequest::Dialogue(DialogueRequest::new(
                "Gravity",
                3_000_000_000,
            )))
            .await;
        assert_eq!(
            result,
            Err(GenerationError::InvalidRequest(
                "'turns' must be at most 50".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn invalid_dialogue_is_rejected_before_model_call() {
        let service = service_never_called();

        let missing_topic = service.generate_dialogue(&DialogueRequest::new("", 3)).await;
        assert!(matches!(missing_topic, Err(GenerationError::InvalidRequest(_))));

        let bad_mode = service
            .generate_dialogue(&DialogueRequest::new("Gravity", 3).with_mode("nobody-first"))
            .await;
        assert!(matches!(bad_mode, Err(GenerationError::InvalidMode(_))));
    }

    #[tokio::test]
    async fn quiz_is_normalized() {
        let service = service_returning("```json\n{\"quiz\": [{\"type\": \"MCQ\"},]}\n```");
        let request = QuizRequest::new(Some("Optics".to_string()), None, ItemCount::new(1));

        let quiz = service.generate_quiz(&request).await.unwrap();
        assert_eq!(quiz, json!({"quiz": [{"type": "MCQ"}]}));
    }

    #[tokio::test]
    async fn quiz_parse_failure_surfaces_raw_text() {
        let service = service_returning("Sorry, I can't do that.");
        let request = QuizRequest::new(Some("Optics".to_string()), None, ItemCount::default());

        match service.generate_quiz(&request).await {
            Err(GenerationError::Normalization(failure)) => {
                assert_eq!(failure.kind, NormalizationErrorKind::ParseError);
                assert_eq!(failure.raw_output, "Sorry, I can't do that.");
            }
            other => panic!("expected normalization failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn quiz_without_source_is_rejected() {
        let service = service_never_called();
        let request = QuizRequest::new(None, Some("   ".to_string()), ItemCount::default());

        assert!(matches!(
            service.generate_quiz(&request).await,
            Err(GenerationError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn flashcard_array_is_wrapped() {
        let service = service_returning(r#"[{"term": "Ion", "definition": "Charged atom"}]"#);
        let request = FlashcardRequest::new(Some("Chemistry".to_string()), None, ItemCount::new(1));

        let cards = service.generate_flashcards(&request).await.unwrap();
        assert_eq!(cards["flashcards"][0]["term"], "Ion");
    }

    #[test]
    fn split_normalization_keeps_failures_as_data() {
        let failure = NormalizationFailure::new(NormalizationErrorKind::UnexpectedShape, "[]");
        let outcome = split_normalization(Err(GenerationError::Normalization(failure.clone())));
        assert_eq!(outcome.unwrap(), Err(failure));

        let provider = split_normalization(Err(GenerationError::Provider("down".to_string())));
        assert!(matches!(provider, Err(crate::errors::AppError::ProviderError(_))));
    }

    #[tokio::test]
    async fn provider_errors_are_not_retried() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_| Err(GenerationError::Provider("rate limited".to_string())));
        let service = GenerationService::new(Arc::new(client));
        let request = FlashcardRequest::new(Some("Chemistry".to_string()), None, ItemCount::default());

        assert_eq!(
            service.generate_flashcards(&request).await,
            Err(GenerationError::Provider("rate limited".to_string()))
        );
    }
}
