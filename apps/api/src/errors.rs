use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::search::request::RequestError;
use crate::tokens::TokenizerError;
use crate::vocabulary::VocabularyError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Vocabulary unavailable: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Vocabulary(e) => {
                tracing::error!("Vocabulary error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "VOCABULARY_UNAVAILABLE",
                    "The word list could not be loaded".to_string(),
                )
            }
            AppError::Tokenizer(e) => {
                tracing::error!("Tokenizer error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TOKENIZER_ERROR",
                    "The tokenizer service failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
