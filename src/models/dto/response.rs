use serde::{Deserialize, Serialize};

use crate::models::domain::{BatchRequest, QuestionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
    pub topic: String,
    pub batch: u32,
    pub questions_in_batch: usize,
    pub total_questions: u32,
    pub has_more_batches: bool,
    /// Only serialized when the fallback question replaced an unreadable reply.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub used_fallback: bool,
}

impl BatchResponse {
    pub fn new(request: &BatchRequest, questions: Vec<QuestionRecord>, used_fallback: bool) -> Self {
        Self {
            success: true,
            questions_in_batch: questions.len(),
            questions,
            topic: request.topic.clone(),
            batch: request.batch,
            total_questions: request.total_questions,
            has_more_batches: request.has_more_batches(),
            used_fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
