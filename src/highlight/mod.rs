//! Reconstruction of match spans from backend highlight markup.
//!
//! - [`extractor::MatchExtractor`] - strips markers from one fragment and records spans
//! - [`fields::build_matches`] - applies the extractor to every tracked field of a hit

pub mod extractor;
pub mod fields;

pub use extractor::*;
pub use fields::*;
