//! Multi-search response merging.

use crate::backend::BackendSubResponse;
use crate::error::{Result, TransformError};
use crate::highlight::MatchExtractor;
use crate::response::PublicResponse;
use crate::transform::aggregation::build_content_types;
use crate::transform::content::build_content_item;
use crate::transform::suggestion::collect_suggestions;

/// Merge sub-responses, in received order, into one public response.
///
/// The count is the first sub-response's hit total; it is not summed. Elapsed
/// times are summed. Items, content types and suggestions are concatenated.
pub fn merge_responses(
    responses: &[BackendSubResponse],
    extractor: &MatchExtractor,
) -> Result<PublicResponse> {
    let first = responses.first().ok_or(TransformError::EmptyResponse)?;

    let mut merged = PublicResponse {
        count: first.hits.total.value(),
        ..Default::default()
    };
    let mut suggestions = Vec::new();

    for response in responses {
        merged.items.extend(
            response
                .hits
                .hits
                .iter()
                .map(|hit| build_content_item(hit, extractor)),
        );
        merged
            .content_types
            .extend(build_content_types(&response.aggregations));
        suggestions.extend(collect_suggestions(&response.suggest));
        merged.took = merged.took.saturating_add(response.took);
    }

    if !suggestions.is_empty() {
        merged.suggestions = Some(suggestions);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sub_response(value: serde_json::Value) -> BackendSubResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_responses() {
        let err = merge_responses(&[], &MatchExtractor::default()).unwrap_err();
        assert!(matches!(err, TransformError::EmptyResponse));
    }

    #[test]
    fn test_count_from_first_took_summed() {
        let responses = vec![
            sub_response(json!({"took": 5, "hits": {"total": 10}})),
            sub_response(json!({"took": 7, "hits": {"total": 99}})),
            sub_response(json!({"took": 1, "hits": {"total": 3}})),
        ];

        let merged = merge_responses(&responses, &MatchExtractor::default()).unwrap();
        assert_eq!(merged.count, 10);
        assert_eq!(merged.took, 13);
        assert!(merged.suggestions.is_none());
    }

    #[test]
    fn test_took_saturates() {
        let responses = vec![
            sub_response(json!({"took": u64::MAX, "hits": {"total": 1}})),
            sub_response(json!({"took": 1, "hits": {"total": 1}})),
        ];

        let merged = merge_responses(&responses, &MatchExtractor::default()).unwrap();
        assert_eq!(merged.took, u64::MAX);
    }

    #[test]
    fn test_lists_concatenated_in_order() {
        let responses = vec![
            sub_response(json!({
                "hits": {"total": 2, "hits": [
                    {"_source": {"type": "a", "uri": "/1"}},
                    {"_source": {"type": "a", "uri": "/2"}}
                ]},
                "aggregations": {"docCounts": {"buckets": [{"key": "a", "doc_count": 2}]}},
                "suggest": {"search_suggest": [{"options": [{"text": "s1"}]}]}
            })),
            sub_response(json!({
                "hits": {"total": 1, "hits": [{"_source": {"type": "b", "uri": "/3"}}]},
                "aggregations": {"docCounts": {"buckets": [{"key": "b", "doc_count": 1}]}},
                "suggest": {"search_suggest": [{"options": [{"text": "s2"}]}]}
            })),
        ];

        let merged = merge_responses(&responses, &MatchExtractor::default()).unwrap();
        let uris: Vec<&str> = merged.items.iter().map(|item| item.uri.as_str()).collect();
        assert_eq!(uris, vec!["/1", "/2", "/3"]);

        let types: Vec<(&str, u64)> = merged
            .content_types
            .iter()
            .map(|ct| (ct.content_type.as_str(), ct.count))
            .collect();
        assert_eq!(types, vec![("a", 2), ("b", 1)]);

        assert_eq!(
            merged.suggestions,
            Some(vec!["s1".to_string(), "s2".to_string()])
        );
    }
}
