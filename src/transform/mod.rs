//! Backend-to-public response transformation.
//!
//! [`Transformer`] is the entry point. The remaining modules hold the mapping
//! steps it is built from:
//!
//! - [`content`] - hit to content item
//! - [`aggregation`] - buckets to content-type counts
//! - [`suggestion`] - backend suggestions and the zero-result query fallback
//! - [`merger`] - combination of multi-search sub-responses

pub mod aggregation;
pub mod content;
pub mod merger;
pub mod suggestion;
pub mod transformer;

pub use transformer::Transformer;
