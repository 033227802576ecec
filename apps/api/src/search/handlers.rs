//! Axum route handlers for the word search API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::search::export::{export_text, EXPORT_FILE_NAME};
use crate::search::filter::find_words;
use crate::search::highlight::highlight_letter;
use crate::search::request::{FilterRequest, LengthRange, RequestError, MAX_LENGTH, MIN_LENGTH};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Missing letter fields deserialize as empty strings so they fail
/// validation with a readable message instead of a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub mandatory: String,
    #[serde(default)]
    pub complementary: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    MIN_LENGTH
}

fn default_max_length() -> usize {
    MAX_LENGTH
}

impl SearchRequest {
    pub fn to_filter_request(&self) -> Result<FilterRequest, RequestError> {
        let range = LengthRange::new(self.min_length, self.max_length)?;
        FilterRequest::new(&self.mandatory, &self.complementary, range)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultWord {
    pub word: String,
    pub length: usize,
    pub highlighted: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    Empty,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: SearchStatus,
    pub count: usize,
    pub message: String,
    pub words: Vec<ResultWord>,
}

impl SearchResponse {
    fn new(words: Vec<String>, mandatory: char) -> Self {
        if words.is_empty() {
            return Self {
                status: SearchStatus::Empty,
                count: 0,
                message: "No words found.".to_string(),
                words: vec![],
            };
        }

        let words: Vec<ResultWord> = words
            .into_iter()
            .map(|word| ResultWord {
                length: word.chars().count(),
                highlighted: highlight_letter(&word, mandatory),
                word,
            })
            .collect();

        Self {
            status: SearchStatus::Found,
            count: words.len(),
            message: format!("{} words found", words.len()),
            words,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Validates the request before touching the vocabulary, then runs the pipeline.
async fn run_search(
    state: &AppState,
    request: &SearchRequest,
) -> Result<(FilterRequest, Vec<String>), AppError> {
    let filter = request.to_filter_request()?;
    let vocabulary = state.vocabulary.get().await?;
    let words = find_words(&vocabulary, &filter);

    debug!(
        "Search mandatory={:?} complementary={:?} range={}..={}: {} of {} words",
        filter.mandatory(),
        filter.complementary(),
        filter.length_range().min(),
        filter.length_range().max(),
        words.len(),
        vocabulary.len()
    );

    Ok((filter, words))
}

/// POST /api/v1/words/search
///
/// Returns the matching words with length and highlighted form, or an
/// `empty` status when nothing matches.
pub async fn handle_search(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let (filter, words) = run_search(&state, &request).await?;
    Ok(Json(SearchResponse::new(words, filter.mandatory())))
}

/// POST /api/v1/words/export
///
/// Same search, returned as a downloadable plain-text list.
pub async fn handle_export(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (_, words) = run_search(&state, &request).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, export_text(&words)))
}
