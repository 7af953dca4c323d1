use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::BatchRequest,
};

/// Body of `POST /api/generate-quiz`. Every field is optional at the serde
/// level so missing values surface as validation errors rather than as
/// extractor failures.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(
        required(message = "Topic is required"),
        length(min = 1, message = "Topic is required")
    )]
    pub topic: Option<String>,

    #[validate(
        required(message = "Number of questions is required"),
        range(min = 1, message = "Number of questions must be a positive integer")
    )]
    pub num_questions: Option<i64>,

    #[validate(range(min = 1, message = "Batch must be a positive integer"))]
    pub batch: Option<i64>,

    #[validate(range(min = 1, message = "Total questions must be a positive integer"))]
    pub total_questions: Option<i64>,
}

impl TryFrom<GenerateQuizRequest> for BatchRequest {
    type Error = AppError;

    fn try_from(request: GenerateQuizRequest) -> AppResult<Self> {
        request.validate()?;

        let (Some(topic), Some(num_questions)) = (request.topic, request.num_questions) else {
            return Err(AppError::InvalidRequest(
                "Topic and number of questions are required".to_string(),
            ));
        };

        BatchRequest::new(
            topic,
            to_count("numQuestions", num_questions)?,
            request.batch.map(|b| to_count("batch", b)).transpose()?,
            request
                .total_questions
                .map(|t| to_count("totalQuestions", t))
                .transpose()?,
        )
    }
}

fn to_count(field: &str, value: i64) -> AppResult<u32> {
    u32::try_from(value)
        .map_err(|_| AppError::InvalidRequest(format!("{field} is out of range: {value}")))
}
