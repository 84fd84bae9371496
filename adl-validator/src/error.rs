//! Error types for ADL validation.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A request that cannot be analysed at all.
///
/// This is the only error intrinsic to the validation engine. Every other
/// defect in a document is reported as a [`crate::SyntaxIssue`] inside a
/// successful [`crate::ValidationResult`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    /// The document was empty or contained only whitespace.
    #[error("no content provided")]
    NoContent,
}

/// The kind of scan-level failure that prevented a file from being validated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file was empty or whitespace-only, so there was nothing to validate.
    EmptyDocument,
    /// The resolved path is outside the scan root (symlink escape).
    OutsideRoot,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached, truncating the scan.
    LimitExceeded,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A scan-level error: a file that could not be validated at all.
///
/// These are distinct from [`crate::SyntaxIssue`] (a defect found inside a
/// document that was analysed). A `ScanError` means the file never reached the
/// validation engine.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Create a scan error for `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message() {
        assert_eq!(RequestError::NoContent.to_string(), "no content provided");
    }

    #[test]
    fn test_format_scan_error() {
        let err = ScanError::new(
            "docs/big.adl",
            ScanErrorKind::FileTooLarge,
            "File exceeds maximum size of 10 bytes".to_owned(),
        );

        let formatted = err.format_human_readable();
        assert!(formatted.starts_with("docs/big.adl: [scan error]"));
        assert!(formatted.contains("maximum size"));
    }

    #[test]
    fn test_scan_error_kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&ScanErrorKind::EmptyDocument).unwrap();
        assert_eq!(json, "\"EmptyDocument\"");
    }
}
