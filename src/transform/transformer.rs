//! The transformation entry point.

use log::debug;

use crate::backend::BackendResponse;
use crate::config::TransformerConfig;
use crate::error::{Result, TransformError};
use crate::highlight::MatchExtractor;
use crate::response::PublicResponse;
use crate::transform::merger::merge_responses;
use crate::transform::suggestion::build_additional_suggestions;

/// Turns raw multi-search backend responses into public responses.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and requests.
///
/// # Examples
///
/// ```
/// use search_transformer::transform::Transformer;
///
/// let transformer = Transformer::new();
/// let raw = br#"{"responses": [{"took": 2, "hits": {"total": 0, "hits": []}}]}"#;
///
/// let public = transformer.transform(raw, "cpi").unwrap();
/// assert_eq!(
///     String::from_utf8(public).unwrap(),
///     r#"{"count":0,"took":2,"content_types":[],"items":[],"additional_suggestions":["cpi"]}"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformerConfig,
    extractor: MatchExtractor,
}

impl Transformer {
    /// Create a transformer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with a validated configuration.
    pub fn with_config(config: TransformerConfig) -> Result<Self> {
        config.validate()?;
        let extractor = MatchExtractor::new(config.markers.clone());
        Ok(Transformer { config, extractor })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Decode a backend payload, transform it, and encode the public response.
    ///
    /// `query` is the caller's original query text and is only used for
    /// additional suggestions when nothing matched.
    pub fn transform(&self, raw: &[u8], query: &str) -> Result<Vec<u8>> {
        let source: BackendResponse = serde_json::from_slice(raw).map_err(TransformError::decode)?;

        let response = self.transform_response(&source, query)?;

        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(&response)
        } else {
            serde_json::to_vec(&response)
        };
        encoded.map_err(TransformError::encode)
    }

    /// Transform an already decoded backend envelope.
    pub fn transform_response(
        &self,
        source: &BackendResponse,
        query: &str,
    ) -> Result<PublicResponse> {
        debug!("Transforming {} sub-responses", source.responses.len());

        let mut response = merge_responses(&source.responses, &self.extractor)?;

        if response.count == 0 && self.config.fallback_suggestions {
            let terms = build_additional_suggestions(query);
            debug!("No results, offering {} query terms as suggestions", terms.len());
            if !terms.is_empty() {
                response.additional_suggestions = Some(terms);
            }
        }

        debug!(
            "Transformed response: count={} took={} items={}",
            response.count,
            response.took,
            response.items.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::config::HighlightMarkers;

    fn transform_to_value(transformer: &Transformer, raw: Value, query: &str) -> Value {
        let bytes = transformer
            .transform(raw.to_string().as_bytes(), query)
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_malformed_json() {
        let err = Transformer::new().transform(b"{not json", "q").unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn test_wrong_shape() {
        let err = Transformer::new()
            .transform(br#"{"responses": "nope"}"#, "q")
            .unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn test_zero_sub_responses() {
        let err = Transformer::new()
            .transform(br#"{"responses": []}"#, "q")
            .unwrap_err();
        assert!(matches!(err, TransformError::EmptyResponse));

        let err = Transformer::new().transform(b"{}", "q").unwrap_err();
        assert!(matches!(err, TransformError::EmptyResponse));
    }

    #[test]
    fn test_zero_count_adds_query_terms() {
        let output = transform_to_value(
            &Transformer::new(),
            json!({"responses": [{"took": 1, "hits": {"total": 0, "hits": []}}]}),
            r#"foo "bar baz""#,
        );

        assert_eq!(output["additional_suggestions"], json!(["foo", "bar baz"]));
    }

    #[test]
    fn test_nonzero_count_has_no_additional_suggestions() {
        let output = transform_to_value(
            &Transformer::new(),
            json!({"responses": [{"hits": {"total": 1, "hits": []}}]}),
            "foo",
        );

        assert!(output.get("additional_suggestions").is_none());
    }

    #[test]
    fn test_fallback_disabled() {
        let transformer =
            Transformer::with_config(TransformerConfig::new().fallback_suggestions(false)).unwrap();
        let output = transform_to_value(
            &transformer,
            json!({"responses": [{"hits": {"total": 0}}]}),
            "foo",
        );

        assert!(output.get("additional_suggestions").is_none());
    }

    #[test]
    fn test_blank_query_omits_additional_suggestions() {
        let output = transform_to_value(
            &Transformer::new(),
            json!({"responses": [{"hits": {"total": 0}}]}),
            "   ",
        );

        assert!(output.get("additional_suggestions").is_none());
    }

    #[test]
    fn test_custom_markers() {
        let transformer = Transformer::with_config(
            TransformerConfig::new().markers(HighlightMarkers::for_tag("em")),
        )
        .unwrap();
        let output = transform_to_value(
            &transformer,
            json!({"responses": [{"hits": {"total": 1, "hits": [{
                "_source": {"type": "article", "uri": "/a", "description": {"title": "abcdef"}},
                "highlight": {"description.title": ["abc<em>def</em>"]}
            }]}}]}),
            "def",
        );

        assert_eq!(
            output["items"][0]["matches"]["description"]["title"],
            json!([{"start": 4, "end": 6}])
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = Transformer::with_config(
            TransformerConfig::new().markers(HighlightMarkers::new("", "</em>")),
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::InvalidConfig(_)));
    }

    #[test]
    fn test_pretty_output() {
        let raw = br#"{"responses": [{"took": 4, "hits": {"total": 2}}]}"#;
        let compact = Transformer::new().transform(raw, "q").unwrap();
        let pretty = Transformer::with_config(TransformerConfig::new().pretty(true))
            .unwrap()
            .transform(raw, "q")
            .unwrap();

        assert!(String::from_utf8(pretty.clone()).unwrap().contains('\n'));
        assert!(!String::from_utf8(compact.clone()).unwrap().contains('\n'));
        assert_eq!(
            serde_json::from_slice::<Value>(&pretty).unwrap(),
            serde_json::from_slice::<Value>(&compact).unwrap()
        );
    }
}
