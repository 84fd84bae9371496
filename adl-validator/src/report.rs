//! Batch validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;
use crate::result::ValidationResult;

/// The validation result for one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileReport {
    /// The file that was validated.
    pub file: PathBuf,
    /// What the engine found in it.
    pub result: ValidationResult,
}

impl FileReport {
    /// Pair a file with its validation result.
    #[must_use]
    pub const fn new(file: PathBuf, result: ValidationResult) -> Self {
        Self { file, result }
    }
}

/// Result of a batch validation run.
///
/// A non-empty `scan_errors` means some files never reached the engine;
/// callers gating on `ok` treat that as a failure.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files successfully read and validated.
    pub scanned_files: usize,
    /// Number of files that could not be validated (read failures, blank files, limits).
    pub failed_files: usize,
    /// Whether every validated file is free of syntax issues AND no scan errors occurred.
    pub ok: bool,
    /// Per-file results, in path order.
    pub files: Vec<FileReport>,
    /// Scan-level errors: files that could not be read or validated.
    pub scan_errors: Vec<ScanError>,
}

impl ValidationReport {
    /// Build a report; `ok` is derived from the file results and scan errors.
    #[must_use]
    pub fn new(files: Vec<FileReport>, scan_errors: Vec<ScanError>, failed_files: usize) -> Self {
        let ok = scan_errors.is_empty() && files.iter().all(|f| f.result.is_clean());
        Self {
            scanned_files: files.len(),
            failed_files,
            ok,
            files,
            scan_errors,
        }
    }

    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Total number of syntax issues across all files.
    #[must_use]
    pub fn issues_count(&self) -> usize {
        self.files.iter().map(|f| f.result.syntax_issues.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;
    use crate::result::SyntaxIssue;

    fn result_with_issues(count: usize) -> ValidationResult {
        ValidationResult {
            syntax_issues: (0..count).map(|i| SyntaxIssue::new(format!("issue {i}"))).collect(),
            used_tools: vec![],
            references: vec![],
            detected_format: None,
        }
    }

    #[test]
    fn test_report_ok_when_all_clean() {
        let report = ValidationReport::new(
            vec![FileReport::new(PathBuf::from("a.adl"), result_with_issues(0))],
            vec![],
            0,
        );
        assert!(report.ok);
        assert_eq!(report.scanned_files, 1);
        assert_eq!(report.issues_count(), 0);
    }

    #[test]
    fn test_report_counts_issues() {
        let report = ValidationReport::new(
            vec![
                FileReport::new(PathBuf::from("a.adl"), result_with_issues(2)),
                FileReport::new(PathBuf::from("b.adl"), result_with_issues(1)),
            ],
            vec![],
            0,
        );
        assert!(!report.ok);
        assert_eq!(report.issues_count(), 3);
    }

    #[test]
    fn test_report_not_ok_with_scan_errors() {
        let report = ValidationReport::new(
            vec![],
            vec![ScanError::new(
                "blank.adl",
                ScanErrorKind::EmptyDocument,
                "no content provided".to_owned(),
            )],
            1,
        );
        assert!(!report.ok);
        assert_eq!(report.files_attempted(), 1);
    }
}
