//! Multi-search envelope returned by the search backend.
//!
//! Every section is optional on the wire; absent or `null` sections decode to
//! their empty value so a sparse sub-response is still usable.

use serde::{Deserialize, Deserializer, Serialize};

use crate::response::Contact;

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level multi-search envelope: one sub-response per submitted query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<BackendSubResponse>,
}

/// The answer to one query of a multi-search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSubResponse {
    /// Elapsed time in milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub took: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: BackendHits,
    #[serde(deserialize_with = "null_as_default")]
    pub aggregations: BackendAggregations,
    #[serde(deserialize_with = "null_as_default")]
    pub suggest: BackendSuggest,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendHits {
    #[serde(deserialize_with = "null_as_default")]
    pub total: HitTotal,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: Vec<BackendHit>,
}

/// Total hit count, either as a bare integer or in the `{"value": n}` object form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HitTotal {
    Count(u64),
    Object {
        value: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relation: Option<TotalRelation>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalRelation {
    Eq,
    Gte,
}

impl Default for HitTotal {
    fn default() -> Self {
        HitTotal::Count(0)
    }
}

impl HitTotal {
    /// The numeric hit count regardless of wire form.
    pub fn value(&self) -> u64 {
        match self {
            HitTotal::Count(count) => *count,
            HitTotal::Object { value, .. } => *value,
        }
    }
}

/// One search hit: the stored document plus any highlighted fragments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendHit {
    #[serde(rename = "_source", default, deserialize_with = "null_as_default")]
    pub source: SourceDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub description: SourceDescription,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// Descriptive fields of a stored document, in backend (camelCase) naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDescription {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_statistic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline3: Option<String>,
}

/// Highlighted fragments per tracked field. `None` means the backend sent no
/// entry for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    #[serde(rename = "description.title", skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<String>>,
    #[serde(rename = "description.edition", skip_serializing_if = "Option::is_none")]
    pub edition: Option<Vec<String>>,
    #[serde(rename = "description.summary", skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<String>>,
    #[serde(
        rename = "description.metaDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta_description: Option<Vec<String>>,
    #[serde(rename = "description.keywords", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(rename = "description.datasetId", skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendAggregations {
    #[serde(rename = "docCounts", deserialize_with = "null_as_default")]
    pub doc_counts: DocCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub buckets: Vec<Bucket>,
}

/// Document count for one content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doc_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSuggest {
    #[serde(deserialize_with = "null_as_default")]
    pub search_suggest: Vec<SuggestGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<SuggestOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOption {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}
