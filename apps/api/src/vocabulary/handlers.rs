use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::vocabulary::VocabularySummary;

/// GET /api/v1/vocabulary
/// Loads the vocabulary if needed and reports its size and origin.
pub async fn handle_vocabulary_summary(
    State(state): State<AppState>,
) -> Result<Json<VocabularySummary>, AppError> {
    let vocabulary = state.vocabulary.get().await?;
    Ok(Json(vocabulary.summary()))
}
