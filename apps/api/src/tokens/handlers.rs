use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValidateTokenRequest {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    pub word: String,
    pub valid: bool,
    pub backend: &'static str,
}

/// POST /api/v1/tokens/validate
pub async fn handle_validate_token(
    State(state): State<AppState>,
    AppJson(request): AppJson<ValidateTokenRequest>,
) -> Result<Json<ValidateTokenResponse>, AppError> {
    let valid = state
        .token_validator
        .is_valid_word_token(&request.word)
        .await?;

    Ok(Json(ValidateTokenResponse {
        word: request.word,
        valid,
        backend: state.token_validator.backend(),
    }))
}
