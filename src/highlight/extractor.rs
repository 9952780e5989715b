//! Match span extraction from highlighted fragments.
//!
//! A fragment is field text in which matched substrings are wrapped by a start
//! and an end marker. Extraction removes the markers and reports where each
//! matched substring sits in the remaining text.
//!
//! # Offsets
//!
//! Offsets are byte offsets, not character offsets, so fragments containing
//! multi-byte UTF-8 characters yield positions that must be applied to the
//! byte representation of the text.
//!
//! For the span found at byte `a` of the text still being scanned, with a
//! matched substring of `m` bytes, the reported span is `{start: a + 1, end: a + m}`,
//! shifted by the number of de-marked bytes already emitted.
//!
//! # Examples
//!
//! ```
//! use search_transformer::highlight::MatchExtractor;
//!
//! let extractor = MatchExtractor::default();
//! let extracted = extractor.extract("abc<strong>def</strong>ghi");
//!
//! assert_eq!(extracted.text, "abcdefghi");
//! assert_eq!(extracted.spans[0].start, 4);
//! assert_eq!(extracted.spans[0].end, 6);
//! ```

use log::warn;

use crate::config::HighlightMarkers;
use crate::response::MatchDetails;

/// Result of extracting one fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFragment {
    /// Match spans in the order they appear.
    pub spans: Vec<MatchDetails>,
    /// The fragment with all consumed markers removed.
    pub text: String,
}

/// Extracts match spans using a configurable marker pair.
#[derive(Debug, Clone, Default)]
pub struct MatchExtractor {
    markers: HighlightMarkers,
}

impl MatchExtractor {
    /// Create an extractor for the given markers.
    pub fn new(markers: HighlightMarkers) -> Self {
        MatchExtractor { markers }
    }

    /// Get the markers used by this extractor.
    pub fn markers(&self) -> &HighlightMarkers {
        &self.markers
    }

    /// Extract spans and de-marked text from `fragment`.
    ///
    /// A start marker with no end marker after it ends the scan: that marker
    /// and everything after it are kept verbatim and no span is recorded.
    /// An empty start marker matches nothing.
    pub fn extract(&self, fragment: &str) -> ExtractedFragment {
        let start_tag = self.markers.start.as_str();
        let end_tag = self.markers.end.as_str();

        if start_tag.is_empty() {
            return ExtractedFragment {
                spans: Vec::new(),
                text: fragment.to_string(),
            };
        }

        let mut spans = Vec::new();
        let mut text = String::with_capacity(fragment.len());
        let mut offset = 0;
        let mut rest = fragment;

        while let Some(start) = rest.find(start_tag) {
            let right = &rest[start + start_tag.len()..];
            let Some(end) = right.find(end_tag) else {
                warn!("Unterminated highlight marker at byte {}", offset + start);
                break;
            };

            let left = &rest[..start];
            let mid = &right[..end];

            spans.push(MatchDetails::new(offset + start + 1, offset + start + end));

            text.push_str(left);
            text.push_str(mid);
            offset += left.len() + mid.len();
            rest = &right[end + end_tag.len()..];
        }

        text.push_str(rest);

        ExtractedFragment { spans, text }
    }
}
