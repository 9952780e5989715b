//! # search-transformer
//!
//! Converts raw multi-search responses from a search backend into a stable,
//! versioned public search API shape.
//!
//! ## Features
//!
//! - Merging of multi-search sub-responses
//! - Match span reconstruction from highlight markup
//! - Content-type counts from aggregation buckets
//! - Backend suggestions plus query-term fallback for empty results
//! - Stateless, safe to share across threads
//!
//! ```
//! use search_transformer::prelude::*;
//!
//! let transformer = Transformer::new();
//! let err = transformer.transform(br#"{"responses": []}"#, "cpi").unwrap_err();
//! assert!(matches!(err, TransformError::EmptyResponse));
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod response;
pub mod service;
pub mod transform;

pub mod prelude {
    pub use crate::backend::{BackendResponse, SearchBackend, StaticBackend};
    pub use crate::config::{HighlightMarkers, TransformerConfig};
    pub use crate::error::{Result, TransformError};
    pub use crate::highlight::{ExtractedFragment, MatchExtractor};
    pub use crate::response::PublicResponse;
    pub use crate::service::SearchService;
    pub use crate::transform::Transformer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
