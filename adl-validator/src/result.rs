//! Validation result types.
//!
//! Field names on the wire follow the service contract: `syntax_errors`,
//! `used_tools`, `references` and `language`.

use serde::Serialize;

use crate::format::DetectedFormat;

/// A single structural defect found in a freeform document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct SyntaxIssue {
    /// Line number of the defect. The structural checks report a character
    /// offset inside `message` instead, so this is currently always `None`.
    pub line: Option<usize>,
    /// Human-readable description of the defect.
    pub message: String,
}

impl SyntaxIssue {
    /// Create an issue without a line number.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
        }
    }
}

/// The outcome of validating one document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationResult {
    /// Structural issues, in checker order (delimiters, quotes, indentation).
    /// Always empty for documents detected as JSON or YAML.
    #[serde(rename = "syntax_errors")]
    pub syntax_issues: Vec<SyntaxIssue>,
    /// Distinct tool names, sorted.
    pub used_tools: Vec<String>,
    /// Distinct references, sorted.
    pub references: Vec<String>,
    /// The format the document was classified as.
    #[serde(rename = "language")]
    pub detected_format: Option<DetectedFormat>,
}

impl ValidationResult {
    /// Whether no structural issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.syntax_issues.is_empty()
    }
}
