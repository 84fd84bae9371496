//! Shared output formatting for validation results and reports.
//!
//! Provides JSON and plain-text formatters. Color/terminal formatting is
//! intentionally excluded from this core module; that concern belongs to the
//! CLI layer.

use std::io::Write;

use crate::format::DetectedFormat;
use crate::report::ValidationReport;
use crate::result::ValidationResult;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a single `ValidationResult` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_result_json(result: &ValidationResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write the body of one result: format, issues, tools, references.
fn write_result_body(result: &ValidationResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    let format = result.detected_format.map_or("unknown", DetectedFormat::as_str);
    writeln!(writer, "  format:     {format}")?;

    for issue in &result.syntax_issues {
        match issue.line {
            Some(line) => writeln!(writer, "  issue:      line {line}: {}", issue.message)?,
            None => writeln!(writer, "  issue:      {}", issue.message)?,
        }
    }
    if !result.used_tools.is_empty() {
        writeln!(writer, "  tools:      {}", result.used_tools.join(", "))?;
    }
    if !result.references.is_empty() {
        writeln!(writer, "  references: {}", result.references.join(", "))?;
    }
    Ok(())
}

/// Format a single `ValidationResult` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_result_human(result: &ValidationResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_result_body(result, writer)?;
    if result.is_clean() {
        writeln!(writer, "\u{2713} No syntax issues found")?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} syntax issue(s) found",
            result.syntax_issues.len()
        )?;
    }
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  ADL VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:  {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer, "  Issues found:   {}", report.issues_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be validated)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.files.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FILES")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for file_report in &report.files {
            writeln!(writer, "{}", file_report.file.display())?;
            write_result_body(&file_report.result, writer)?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed validation",
            report.scanned_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be validated",
                report.failed_files
            )?;
        }
        let issues = report.issues_count();
        if issues > 0 {
            writeln!(writer, "\u{2717} {issues} syntax issue(s) found")?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
