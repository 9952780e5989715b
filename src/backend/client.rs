//! Backend client seam.
//!
//! The transport (HTTP, request signing, retries) lives outside this crate.
//! Anything that can hand back raw response bytes implements [`SearchBackend`].

use parking_lot::Mutex;

use crate::error::{Result, TransformError};

/// Trait for search backends that answer raw query bodies with raw response bytes.
pub trait SearchBackend: Send + Sync {
    /// Run a single search against `index`/`doc_type`.
    fn search(&self, index: &str, doc_type: &str, body: &[u8]) -> Result<Vec<u8>>;

    /// Run a batched multi-search against `index`/`doc_type`.
    fn multi_search(&self, index: &str, doc_type: &str, body: &[u8]) -> Result<Vec<u8>>;

    /// Fetch the backend health status.
    fn status(&self) -> Result<Vec<u8>>;

    /// Get the name of this backend.
    fn name(&self) -> &str;
}

/// The kind of request a [`StaticBackend`] received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendAction {
    Search,
    MultiSearch,
    Status,
}

/// A request recorded by [`StaticBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCall {
    pub action: BackendAction,
    pub index: Option<String>,
    pub doc_type: Option<String>,
    pub body: Vec<u8>,
}

/// Backend that answers every request with a fixed payload (or a fixed failure)
/// and records what it was asked.
///
/// Lets the search service run without a live search engine.
#[derive(Debug)]
pub struct StaticBackend {
    payload: std::result::Result<Vec<u8>, String>,
    calls: Mutex<Vec<BackendCall>>,
}

impl StaticBackend {
    /// Create a backend answering with `payload`.
    pub fn new<P: Into<Vec<u8>>>(payload: P) -> Self {
        StaticBackend {
            payload: Ok(payload.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a backend failing every request with `message`.
    pub fn failing<S: Into<String>>(message: S) -> Self {
        StaticBackend {
            payload: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    fn respond(&self, call: BackendCall) -> Result<Vec<u8>> {
        self.calls.lock().push(call);
        self.payload.clone().map_err(TransformError::backend)
    }
}

impl SearchBackend for StaticBackend {
    fn search(&self, index: &str, doc_type: &str, body: &[u8]) -> Result<Vec<u8>> {
        self.respond(BackendCall {
            action: BackendAction::Search,
            index: Some(index.to_string()),
            doc_type: Some(doc_type.to_string()),
            body: body.to_vec(),
        })
    }

    fn multi_search(&self, index: &str, doc_type: &str, body: &[u8]) -> Result<Vec<u8>> {
        self.respond(BackendCall {
            action: BackendAction::MultiSearch,
            index: Some(index.to_string()),
            doc_type: Some(doc_type.to_string()),
            body: body.to_vec(),
        })
    }

    fn status(&self) -> Result<Vec<u8>> {
        self.respond(BackendCall {
            action: BackendAction::Status,
            index: None,
            doc_type: None,
            body: Vec::new(),
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_backend_records_calls() {
        let backend = StaticBackend::new("moo");

        let res = backend.search("index", "doctype", b"search request").unwrap();
        assert_eq!(res, b"moo");
        let res = backend.multi_search("index", "doctype", b"multi request").unwrap();
        assert_eq!(res, b"moo");
        backend.status().unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].action, BackendAction::Search);
        assert_eq!(calls[0].index.as_deref(), Some("index"));
        assert_eq!(calls[0].doc_type.as_deref(), Some("doctype"));
        assert_eq!(calls[0].body, b"search request");
        assert_eq!(calls[1].action, BackendAction::MultiSearch);
        assert_eq!(calls[1].body, b"multi request");
        assert_eq!(calls[2].action, BackendAction::Status);
        assert!(calls[2].index.is_none());
    }

    #[test]
    fn test_failing_backend() {
        let backend = StaticBackend::failing("http error");

        let err = backend.multi_search("index", "doctype", b"body").unwrap_err();
        assert_eq!(err.to_string(), "Backend error: http error");
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(StaticBackend::new(Vec::new()).name(), "static");
    }
}
