//! Per-field match assembly for one search hit.

use crate::backend::Highlight;
use crate::highlight::extractor::MatchExtractor;
use crate::response::{DescriptionMatches, MatchDetails, Matches};

/// Build the match record for a hit's highlight map.
///
/// Fields without a highlight entry stay `None`. Keyword spans carry the whole
/// de-marked fragment they came from as their value.
pub fn build_matches(highlight: &Highlight, extractor: &MatchExtractor) -> Matches {
    Matches {
        description: DescriptionMatches {
            summary: field_matches(highlight.summary.as_deref(), extractor),
            title: field_matches(highlight.title.as_deref(), extractor),
            edition: field_matches(highlight.edition.as_deref(), extractor),
            meta_description: field_matches(highlight.meta_description.as_deref(), extractor),
            keywords: keyword_matches(highlight.keywords.as_deref(), extractor),
            dataset_id: field_matches(highlight.dataset_id.as_deref(), extractor),
        },
    }
}

fn field_matches(
    fragments: Option<&[String]>,
    extractor: &MatchExtractor,
) -> Option<Vec<MatchDetails>> {
    let fragments = fragments?;
    Some(
        fragments
            .iter()
            .flat_map(|fragment| extractor.extract(fragment).spans)
            .collect(),
    )
}

fn keyword_matches(
    fragments: Option<&[String]>,
    extractor: &MatchExtractor,
) -> Option<Vec<MatchDetails>> {
    let fragments = fragments?;
    let mut matches = Vec::new();
    for fragment in fragments {
        let extracted = extractor.extract(fragment);
        matches.extend(
            extracted
                .spans
                .into_iter()
                .map(|span| span.with_value(extracted.text.as_str())),
        );
    }
    Some(matches)
}
