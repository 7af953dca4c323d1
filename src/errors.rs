use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

const GENERATION_FAILED: &str = "Failed to generate quiz";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Completion provider call failed: {0}")]
    ProviderCallFailure(String),

    #[error("Invalid question format: {0}")]
    InvalidProviderResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::InvalidRequest(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            AppError::ProviderCallFailure(_)
            | AppError::InvalidProviderResponse(_)
            | AppError::InternalError(_) => ErrorResponse {
                error: GENERATION_FAILED.to_string(),
                details: Some(self.to_string()),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderCallFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidProviderResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderCallFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
