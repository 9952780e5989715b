//! Configuration for response transformation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Opening emphasis tag emitted by the backend highlighter.
pub const DEFAULT_START_TAG: &str = "<strong>";

/// Closing emphasis tag emitted by the backend highlighter.
pub const DEFAULT_END_TAG: &str = "</strong>";

/// The pair of literal strings that delimit a highlighted substring.
///
/// Markers are never escaped or nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarkers {
    /// Marker preceding a matched substring.
    pub start: String,
    /// Marker following a matched substring.
    pub end: String,
}

impl Default for HighlightMarkers {
    fn default() -> Self {
        HighlightMarkers {
            start: DEFAULT_START_TAG.to_string(),
            end: DEFAULT_END_TAG.to_string(),
        }
    }
}

impl HighlightMarkers {
    /// Create a marker pair from arbitrary strings.
    pub fn new<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        HighlightMarkers {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Build markers for an HTML element name, e.g. `"em"` gives `<em>` and `</em>`.
    pub fn for_tag(tag: &str) -> Self {
        HighlightMarkers {
            start: format!("<{tag}>"),
            end: format!("</{tag}>"),
        }
    }

    /// Reject marker pairs that would make extraction loop on empty input.
    pub fn validate(&self) -> Result<()> {
        if self.start.is_empty() {
            return Err(TransformError::invalid_config(
                "highlight start marker must not be empty",
            ));
        }
        if self.end.is_empty() {
            return Err(TransformError::invalid_config(
                "highlight end marker must not be empty",
            ));
        }
        Ok(())
    }
}

/// Configuration for a [`Transformer`](crate::transform::Transformer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Emphasis markers used by the backend highlighter.
    pub markers: HighlightMarkers,
    /// Whether to tokenize the query into additional suggestions when nothing matched.
    pub fallback_suggestions: bool,
    /// Pretty-print the encoded public response.
    pub pretty: bool,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        TransformerConfig {
            markers: HighlightMarkers::default(),
            fallback_suggestions: true,
            pretty: false,
        }
    }
}

impl TransformerConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highlight markers.
    pub fn markers(mut self, markers: HighlightMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Enable or disable fallback suggestions.
    pub fn fallback_suggestions(mut self, enabled: bool) -> Self {
        self.fallback_suggestions = enabled;
        self
    }

    /// Enable or disable pretty-printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.markers.validate()
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: TransformerConfig = serde_json::from_str(&content).map_err(|e| {
            TransformError::invalid_config(format!(
                "{}: {e}",
                path.as_ref().display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }
}
