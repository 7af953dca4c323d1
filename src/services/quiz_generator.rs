use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::Config,
    constants::quiz_prompt::{quiz_batch_prompt, QUIZ_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{BatchRequest, QuestionRecord},
        dto::response::BatchResponse,
    },
    services::completion_provider::{CompletionProvider, CompletionRequest},
};

const LOG_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub strict_reply_parsing: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.3,
            strict_reply_parsing: false,
        }
    }
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_tokens: config.completion_max_tokens,
            temperature: config.completion_temperature,
            strict_reply_parsing: config.strict_reply_parsing,
        }
    }
}

/// What came back from the provider once fences were stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedReply {
    /// A non-empty JSON array; elements are not yet normalized.
    Items(Vec<Value>),
    /// Text that is not JSON at all, with the parser's message.
    Malformed(String),
}

pub struct QuizBatchGenerator {
    provider: Arc<dyn CompletionProvider>,
    settings: GenerationSettings,
}

impl QuizBatchGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Produces one batch of questions. Unreadable provider text is replaced
    /// by a single fallback question unless strict parsing is on; a reply
    /// that is JSON but not a non-empty array is always an error.
    pub async fn generate(&self, request: &BatchRequest) -> AppResult<BatchResponse> {
        request.ensure_valid()?;

        let limited_questions = request.questions_for_batch();
        let starting_id = request.starting_id();

        log::info!(
            "Generating {} questions for topic '{}' (batch {}, starting id {})",
            limited_questions,
            request.topic,
            request.batch,
            starting_id
        );

        let raw = self
            .provider
            .complete(CompletionRequest {
                system: QUIZ_SYSTEM_PROMPT.to_string(),
                prompt: quiz_batch_prompt(&request.topic, limited_questions, starting_id),
                max_tokens: self.settings.max_tokens,
                temperature: self.settings.temperature,
            })
            .await?;
        log::debug!("Raw provider reply: {}", preview(&raw));

        let cleaned = strip_code_fences(&raw);
        log::debug!("Cleaned provider reply: {}", preview(cleaned));

        let (questions, used_fallback) = match decode_reply(cleaned)? {
            DecodedReply::Items(items) => {
                let questions: Vec<QuestionRecord> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        QuestionRecord::normalize(item, index, starting_id, &request.topic)
                    })
                    .collect();
                (questions, false)
            }
            DecodedReply::Malformed(reason) if self.settings.strict_reply_parsing => {
                return Err(AppError::InvalidProviderResponse(format!(
                    "reply is not valid JSON: {reason}"
                )));
            }
            DecodedReply::Malformed(reason) => {
                log::warn!(
                    "Provider reply for topic '{}' is not valid JSON ({}); using fallback question",
                    request.topic,
                    reason
                );
                (vec![QuestionRecord::fallback(starting_id, &request.topic)], true)
            }
        };

        log::info!(
            "Returning {} questions for batch {} of topic '{}'",
            questions.len(),
            request.batch,
            request.topic
        );

        Ok(BatchResponse::new(request, questions, used_fallback))
    }
}

/// Removes a leading "```json" or "```" marker and a trailing "```" from a
/// trimmed reply. Purely textual: fences elsewhere are left alone.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };

    let body = body.trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

pub fn decode_reply(cleaned: &str) -> AppResult<DecodedReply> {
    let value: Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(err) => return Ok(DecodedReply::Malformed(err.to_string())),
    };

    match value {
        Value::Array(items) if !items.is_empty() => Ok(DecodedReply::Items(items)),
        Value::Array(_) => Err(AppError::InvalidProviderResponse(
            "expected a non-empty array of questions, got an empty array".to_string(),
        )),
        other => Err(AppError::InvalidProviderResponse(format!(
            "expected a non-empty array of questions, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    format!("{head}...")
}
