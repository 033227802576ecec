use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::warn;

use crate::vocabulary::{load_vocabulary, Vocabulary, VocabularyError};

/// Load-once holder for the vocabulary, shared through `AppState`.
///
/// The first successful load is kept for the life of the process and is
/// read-only afterwards. A failed load is returned to the caller that
/// triggered it and the next caller tries again.
pub struct VocabularyCache {
    path: PathBuf,
    cell: OnceCell<Arc<Vocabulary>>,
}

impl VocabularyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// A cache that is already initialised with `vocabulary`.
    #[cfg(test)]
    pub fn preloaded(vocabulary: Vocabulary) -> Self {
        Self {
            path: PathBuf::new(),
            cell: OnceCell::new_with(Some(Arc::new(vocabulary))),
        }
    }

    pub async fn get(&self) -> Result<Arc<Vocabulary>, VocabularyError> {
        self.cell
            .get_or_try_init(|| async { load_vocabulary(&self.path).await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    /// Startup warm-up. Failure is logged and left for the first request to retry.
    pub async fn warm_up(&self) {
        if let Err(e) = self.get().await {
            warn!("Vocabulary not loaded at startup: {e}");
        }
    }
}
