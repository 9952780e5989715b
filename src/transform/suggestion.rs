//! Suggestion collection and the zero-result query fallback.

use lazy_static::lazy_static;
use regex::Regex;

use crate::backend::BackendSuggest;

lazy_static! {
    /// A double-quoted phrase, or a run of non-whitespace characters.
    static ref QUERY_TERM: Regex =
        Regex::new(r#""([^"]*)"|\S+"#).expect("Query term pattern should be valid");
}

/// Flatten every suggestion option, in group then option order.
pub fn collect_suggestions(suggest: &BackendSuggest) -> Vec<String> {
    suggest
        .search_suggest
        .iter()
        .flat_map(|group| group.options.iter())
        .map(|option| option.text.clone())
        .collect()
}

/// Split a query into the terms offered when a search found nothing.
///
/// A quoted phrase is one term without its quotes; anything else splits on
/// whitespace. Quotes are not escapable and empty phrases are dropped.
///
/// ```
/// use search_transformer::transform::suggestion::build_additional_suggestions;
///
/// assert_eq!(
///     build_additional_suggestions(r#"foo "bar baz""#),
///     vec!["foo", "bar baz"]
/// );
/// ```
pub fn build_additional_suggestions(query: &str) -> Vec<String> {
    QUERY_TERM
        .captures_iter(query)
        .filter_map(|caps| {
            let term = caps.get(1).or_else(|| caps.get(0))?.as_str();
            (!term.is_empty()).then(|| term.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_suggestions_order() {
        let suggest: BackendSuggest = serde_json::from_str(
            r#"{"search_suggest": [
                {"options": [{"text": "rpi"}, {"text": "cpi"}]},
                {"options": []},
                {"options": [{"text": "cpih"}]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(collect_suggestions(&suggest), vec!["rpi", "cpi", "cpih"]);
    }

    #[test]
    fn test_collect_suggestions_absent() {
        assert!(collect_suggestions(&BackendSuggest::default()).is_empty());
    }

    #[test]
    fn test_whitespace_terms() {
        assert_eq!(
            build_additional_suggestions("  retail\tsales \n index "),
            vec!["retail", "sales", "index"]
        );
    }

    #[test]
    fn test_quoted_phrase() {
        assert_eq!(
            build_additional_suggestions(r#"foo "bar baz""#),
            vec!["foo", "bar baz"]
        );
        assert_eq!(
            build_additional_suggestions(r#""house prices" in "north east" 2024"#),
            vec!["house prices", "in", "north east", "2024"]
        );
    }

    #[test]
    fn test_unbalanced_quote() {
        assert_eq!(
            build_additional_suggestions(r#"foo "bar baz"#),
            vec!["foo", "\"bar", "baz"]
        );
    }

    #[test]
    fn test_empty_phrase_and_empty_query() {
        assert_eq!(build_additional_suggestions(r#"a "" b"#), vec!["a", "b"]);
        assert!(build_additional_suggestions("").is_empty());
        assert!(build_additional_suggestions("   ").is_empty());
    }
}
