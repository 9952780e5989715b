//! Content item mapping.

use crate::backend::{BackendHit, SourceDescription};
use crate::highlight::{MatchExtractor, build_matches};
use crate::response::{Contact, ContentItem, Description, Matches};

/// Map one backend hit to a public content item.
///
/// A match record is always attached, even when the hit carried no highlights.
pub fn build_content_item(hit: &BackendHit, extractor: &MatchExtractor) -> ContentItem {
    let matches = match &hit.highlight {
        Some(highlight) => build_matches(highlight, extractor),
        None => Matches::default(),
    };

    ContentItem {
        description: build_description(&hit.source.description),
        content_type: hit.source.content_type.clone(),
        uri: hit.source.uri.clone(),
        matches,
    }
}

/// Translate backend description fields to their public names.
///
/// Empty optional strings are treated as absent.
pub fn build_description(source: &SourceDescription) -> Description {
    Description {
        contact: source.contact.as_ref().map(|contact| Contact {
            telephone: non_empty(&contact.telephone),
            ..contact.clone()
        }),
        dataset_id: non_empty(&source.dataset_id),
        edition: non_empty(&source.edition),
        headline1: non_empty(&source.headline1),
        headline2: non_empty(&source.headline2),
        headline3: non_empty(&source.headline3),
        keywords: source.keywords.clone(),
        latest_release: source.latest_release,
        language: non_empty(&source.language),
        meta_description: non_empty(&source.meta_description),
        national_statistic: source.national_statistic,
        next_release: non_empty(&source.next_release),
        pre_unit: non_empty(&source.pre_unit),
        release_date: non_empty(&source.release_date),
        source: non_empty(&source.source),
        summary: source.summary.clone(),
        title: source.title.clone(),
        unit: non_empty(&source.unit),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
