//! Aggregation bucket mapping.

use crate::backend::{BackendAggregations, Bucket};
use crate::response::ContentType;

/// Map one bucket to a content-type count.
pub fn build_content_type(bucket: &Bucket) -> ContentType {
    ContentType {
        content_type: bucket.key.clone(),
        count: bucket.doc_count,
    }
}

/// Map every bucket of the doc-count aggregation, in bucket order.
pub fn build_content_types(aggregations: &BackendAggregations) -> Vec<ContentType> {
    aggregations
        .doc_counts
        .buckets
        .iter()
        .map(build_content_type)
        .collect()
}
