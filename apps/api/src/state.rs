use std::sync::Arc;

use crate::tokens::TokenValidator;
use crate::vocabulary::VocabularyCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once, read-only afterwards.
    pub vocabulary: Arc<VocabularyCache>,
    /// Pluggable token check. Default: AlphabeticTokenValidator. Swap via TOKENIZER_URL.
    pub token_validator: Arc<dyn TokenValidator>,
}
