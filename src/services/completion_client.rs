use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{config::Config, errors::GenerationError, services::prompt_composer::ComposedPrompt};

/// One request/response exchange with a text-generation backend.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Single attempt; an error or empty reply is a `GenerationError::Provider`.
    async fn complete(&self, prompt: &ComposedPrompt) -> Result<String, GenerationError>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.completion_timeout_secs),
        }
    }

    fn request_body(&self, prompt: &ComposedPrompt) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system_prompt },
                { "role": "user", "content": prompt.user_prompt },
            ],
            "max_tokens": prompt.max_tokens,
            "temperature": prompt.temperature,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &ComposedPrompt) -> Result<String, GenerationError> {
        let chat = self.client.chat();
        let call = chat.create_byot::<Value, Value>(self.request_body(prompt));

        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                GenerationError::Provider(format!(
                    "completion timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        extract_message_content(&response)
    }
}

/// Pulls the first choice's message text out of a chat completion response.
pub fn extract_message_content(response: &Value) -> Result<String, GenerationError> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GenerationError::Provider("completion returned no content".to_string()))
}
