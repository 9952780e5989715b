//! Search service: backend multi-search followed by transformation.

use std::sync::Arc;

use log::{debug, warn};

use crate::backend::SearchBackend;
use crate::error::Result;
use crate::transform::Transformer;

/// Runs multi-search requests against a backend and returns public responses.
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    transformer: Transformer,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("backend", &self.backend.name())
            .field("transformer", &self.transformer)
            .finish()
    }
}

impl SearchService {
    /// Create a new service.
    pub fn new(backend: Arc<dyn SearchBackend>, transformer: Transformer) -> Self {
        SearchService {
            backend,
            transformer,
        }
    }

    /// Get the transformer used by this service.
    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// Send `body` as a multi-search to `index`/`doc_type` and transform the answer.
    ///
    /// `query` is the user's original query text, used for fallback suggestions.
    pub fn search(&self, index: &str, doc_type: &str, body: &[u8], query: &str) -> Result<Vec<u8>> {
        debug!(
            "Multi-search on {}/{} via {} backend",
            index,
            doc_type,
            self.backend.name()
        );

        let raw = self
            .backend
            .multi_search(index, doc_type, body)
            .inspect_err(|e| warn!("Backend multi-search failed: {e}"))?;

        self.transformer.transform(&raw, query)
    }

    /// Fetch the backend health status unchanged.
    pub fn status(&self) -> Result<Vec<u8>> {
        self.backend.status()
    }
}
