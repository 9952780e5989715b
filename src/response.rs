//! Public search response schema.
//!
//! These types define the versioned API shape handed to consumers. Field names
//! are snake_case and every optional field is omitted from the encoded JSON
//! when absent, never emitted as `null` or an empty array.

use serde::{Deserialize, Serialize};

/// The merged response returned to API consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicResponse {
    /// Total matches reported by the first sub-response.
    pub count: u64,
    /// Elapsed time summed over all sub-responses, in milliseconds.
    pub took: u64,
    pub content_types: Vec<ContentType>,
    pub items: Vec<ContentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// Query terms offered as alternatives when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_suggestions: Option<Vec<String>>,
}

/// Number of matching documents of one content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    #[serde(rename = "type")]
    pub content_type: String,
    pub count: u64,
}

/// One search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub description: Description,
    #[serde(rename = "type")]
    pub content_type: String,
    pub uri: String,
    pub matches: Matches,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_statistic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub summary: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Contact details of a publication. Same shape on both sides of the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "crate::backend::response::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, deserialize_with = "crate::backend::response::null_as_default")]
    pub email: String,
}

/// Highlighted match positions for one content item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matches {
    pub description: DescriptionMatches,
}

/// Match spans per highlighted description field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionMatches {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<MatchDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<MatchDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<Vec<MatchDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Vec<MatchDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<MatchDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<Vec<MatchDetails>>,
}

/// A matched span as byte offsets into the de-marked fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Set for keyword matches only; holds the whole de-marked fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl MatchDetails {
    /// Create a span without a value.
    pub fn new(start: usize, end: usize) -> Self {
        MatchDetails {
            value: None,
            start,
            end,
        }
    }

    /// Attach a value to this span.
    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }
}
