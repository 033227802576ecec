// Word list loading and the read-only cache shared by every request.

pub mod cache;
pub mod handlers;
pub mod loader;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

pub use cache::VocabularyCache;
pub use loader::load_vocabulary;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The loaded word list. Entries are lowercase, at least four characters
/// long, and kept in file order. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<String>,
    source: String,
    loaded_at: DateTime<Utc>,
    lines_read: usize,
}

/// Load metadata returned by `GET /api/v1/vocabulary`.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularySummary {
    pub entries: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

impl Vocabulary {
    pub fn new(entries: Vec<String>, source: impl Into<String>) -> Self {
        Self {
            lines_read: entries.len(),
            entries,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Records how many source lines produced these entries.
    pub fn with_lines_read(mut self, lines_read: usize) -> Self {
        self.lines_read = lines_read;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> VocabularySummary {
        VocabularySummary {
            entries: self.entries.len(),
            source: self.source.clone(),
            loaded_at: self.loaded_at,
            lines_read: self.lines_read,
            lines_skipped: self.lines_read.saturating_sub(self.entries.len()),
        }
    }
}
