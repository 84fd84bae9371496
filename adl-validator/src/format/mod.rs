//! Format sniffing for ADL documents.
//!
//! Each sub-module attempts one strict parse:
//! - `json`: any JSON value (object, array or literal)
//! - `yaml`: a YAML stream whose documents are all mappings or sequences
//!
//! A failed parse is not an error, it is the signal to try the next format.
//! Documents that parse as neither are classified as freeform text.

pub mod json;
pub mod yaml;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::document::Document;

/// The serialization format a document was classified as.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFormat {
    /// The document parsed as JSON.
    Json,
    /// The document parsed as a YAML stream of mappings/sequences.
    Yaml,
    /// Neither strict parse succeeded.
    Freeform,
}

impl DetectedFormat {
    /// The lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Freeform => "freeform",
        }
    }

    /// Whether the document was successfully parsed as a structured format.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        !matches!(self, Self::Freeform)
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a document: JSON first, then YAML, otherwise freeform.
#[must_use]
pub fn sniff_format(document: &Document<'_>) -> DetectedFormat {
    let text = document.text();
    let format = if json::parses_as_json(text) {
        DetectedFormat::Json
    } else if yaml::parses_as_yaml(text) {
        DetectedFormat::Yaml
    } else {
        DetectedFormat::Freeform
    };
    debug!(%format, bytes = text.len(), "sniffed document format");
    format
}
