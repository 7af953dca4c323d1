use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One text-completion call: a system instruction plus a user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that can turn a prompt into a single textual reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

/// Chat-completions backend for OpenAI and API-compatible servers.
pub struct OpenAiCompletionProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionProvider {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.completion_model.clone(),
        }
    }

    fn request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt }
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_text(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| {
                AppError::ProviderCallFailure("completion contained no choices".to_string())
            })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting completion from model {} (max_tokens={}, temperature={})",
            self.model,
            request.max_tokens,
            request.temperature
        );

        let reply: ChatCompletionReply = self
            .client
            .chat()
            .create_byot(self.request_body(&request))
            .await?;

        reply.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CompletionRequest {
        CompletionRequest {
            system: "system text".to_string(),
            prompt: "user text".to_string(),
            max_tokens: 4000,
            temperature: 0.3,
        }
    }

    #[test]
    fn request_body_carries_model_messages_and_bounds() {
        let provider = OpenAiCompletionProvider::new(&Config::test_config());
        let body = provider.request_body(&sample_request());

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "system text");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "user text");
        assert_eq!(body["max_tokens"], 4000);
    }

    #[test]
    fn reply_text_is_first_choice_content() {
        let reply: ChatCompletionReply = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "[1, 2]" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();

        assert_eq!(reply.into_text().unwrap(), "[1, 2]");
    }

    #[test]
    fn reply_without_choices_is_a_provider_failure() {
        let reply: ChatCompletionReply = serde_json::from_value(json!({ "choices": [] })).unwrap();

        assert!(matches!(
            reply.into_text(),
            Err(AppError::ProviderCallFailure(_))
        ));
    }

    #[test]
    fn null_content_becomes_empty_text() {
        let reply: ChatCompletionReply = serde_json::from_value(json!({
            "choices": [{ "message": { "content": null } }]
        }))
        .unwrap();

        assert_eq!(reply.into_text().unwrap(), "");
    }
}
