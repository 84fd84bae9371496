//! # adl-validator
//!
//! Heuristic validator for ADL (agent description language) documents.
//!
//! An ADL document has no fixed format. The engine classifies it (JSON,
//! YAML or freeform text), runs structural checks on freeform text
//! (delimiter balance, quote parity, mixed indentation), and always
//! extracts the tools and references the document mentions.
//!
//! The engine is a pure function of its input: no shared state, no I/O, and
//! identical output for identical text. Batch validation of files on disk is
//! layered on top as a separate input strategy.
//!
//! ## Quick Start
//!
//! ```rust
//! use adl_validator::{DetectedFormat, validate};
//!
//! let result = validate("Call run_search(query) and see https://example.com (draft").unwrap();
//! assert_eq!(result.detected_format, Some(DetectedFormat::Freeform));
//! assert_eq!(result.used_tools, vec!["search".to_owned()]);
//! assert_eq!(result.references, vec!["https://example.com".to_owned()]);
//! assert_eq!(result.syntax_issues.len(), 1);
//! ```

pub mod checks;
mod config;
mod document;
mod error;
pub mod extract;
mod format;
pub mod output;
mod report;
mod result;
mod strategy;

pub use config::{DEFAULT_EXTENSIONS, FsSourceConfig};
pub use document::{Document, decode_text};
pub use error::{RequestError, ScanError, ScanErrorKind};
pub use extract::{ReferenceFamily, ToolFamily, extract_references, extract_tools};
pub use format::{DetectedFormat, sniff_format};
pub use report::{FileReport, ValidationReport};
pub use result::{SyntaxIssue, ValidationResult};

use tracing::{debug, warn};

use strategy::fs::{find_files, read_file_bounded};

/// Validate one ADL document.
///
/// # Errors
///
/// Returns [`RequestError::NoContent`] if `text` is empty or whitespace-only.
/// Malformed documents are not errors: their defects are reported in
/// [`ValidationResult::syntax_issues`].
pub fn validate(text: &str) -> Result<ValidationResult, RequestError> {
    let document = Document::new(text)?;
    Ok(validate_document(&document))
}

/// Decode raw bytes (UTF-8, falling back to Latin-1) and validate them.
///
/// # Errors
///
/// Returns [`RequestError::NoContent`] if the decoded text is empty or
/// whitespace-only.
pub fn validate_bytes(bytes: &[u8]) -> Result<ValidationResult, RequestError> {
    let document = Document::from_bytes(bytes)?;
    Ok(validate_document(&document))
}

/// Validate an already-constructed (and therefore non-blank) document.
///
/// Structural checks only run on freeform documents: a successful JSON or
/// YAML parse is taken as proof of structure. Tool and reference extraction
/// runs whatever the format.
#[must_use]
pub fn validate_document(document: &Document<'_>) -> ValidationResult {
    let format = sniff_format(document);
    let syntax_issues = if format.is_structured() {
        Vec::new()
    } else {
        checks::structural_issues(document)
    };
    let used_tools: Vec<String> = extract_tools(document.text()).into_iter().collect();
    let references: Vec<String> = extract_references(document.text()).into_iter().collect();

    debug!(
        %format,
        issues = syntax_issues.len(),
        tools = used_tools.len(),
        references = references.len(),
        "document validated"
    );

    ValidationResult {
        syntax_issues,
        used_tools,
        references,
        detected_format: Some(format),
    }
}

/// Validate ADL files on disk.
///
/// # Errors
///
/// Returns an error if `config.paths` is empty or if any provided path does not exist.
/// Returns `Ok` with `scanned_files: 0` if paths exist but contain no matching files.
/// Per-file failures (unreadable, oversized or blank files, resource limits)
/// are reported in `report.scan_errors` and never silently discarded.
pub fn validate_fs(config: &FsSourceConfig) -> anyhow::Result<ValidationReport> {
    if config.paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    for path in &config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_files(config);

    let mut file_reports = Vec::with_capacity(files.len());
    // Discovery-stage failures are already in scan_errors. Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if file_reports.len() + failed_files >= config.max_files {
            scan_errors.push(ScanError::new(
                file_path.clone(),
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not scanned",
                    config.max_files
                ),
            ));
            failed_files += 1;
            break;
        }

        let bytes = match read_file_bounded(file_path, config.max_file_size) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %file_path.display(), kind = ?e.kind, "{}", e.message);
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = bytes.len() as u64;
        if total_bytes.saturating_add(file_bytes) > config.max_total_bytes {
            scan_errors.push(ScanError::new(
                file_path.clone(),
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not scanned",
                    config.max_total_bytes
                ),
            ));
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        match validate_bytes(&bytes) {
            Ok(result) => {
                debug!(
                    file = %file_path.display(),
                    issues = result.syntax_issues.len(),
                    "file validated"
                );
                file_reports.push(FileReport::new(file_path.clone(), result));
            }
            Err(err) => {
                warn!(file = %file_path.display(), "{err}");
                scan_errors.push(ScanError::new(
                    file_path.clone(),
                    ScanErrorKind::EmptyDocument,
                    err.to_string(),
                ));
                failed_files += 1;
            }
        }
    }

    Ok(ValidationReport::new(file_reports, scan_errors, failed_files))
}
