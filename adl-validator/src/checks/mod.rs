//! Structural checks for freeform documents.
//!
//! Each sub-module is an independent heuristic:
//! - `delimiters`: stack-based `()`, `[]`, `{}` balance
//! - `quotes`: parity of `"` and `'`
//! - `indentation`: tabs and spaces mixed across the document
//!
//! None of them understands string literals or escapes; they are literal
//! character scans and report best-effort diagnostics.

pub mod delimiters;
pub mod indentation;
pub mod quotes;

use crate::document::Document;
use crate::result::SyntaxIssue;

/// Run every structural check, concatenating issues in a fixed order:
/// delimiters, then quotes, then indentation.
#[must_use]
pub fn structural_issues(document: &Document<'_>) -> Vec<SyntaxIssue> {
    let mut issues = delimiters::check_delimiters(document.text());
    issues.extend(quotes::check_quotes(document.text()));
    issues.extend(indentation::check_indentation(document.lines()));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_issues_fixed_order() {
        let doc = Document::new("\tstep (one\n  step \"two\n").unwrap();
        let messages: Vec<String> = structural_issues(&doc)
            .into_iter()
            .map(|issue| issue.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "unclosed `(` starting at position 6".to_owned(),
                "unclosed quote `\"`".to_owned(),
                "mixed tabs and spaces for indentation".to_owned(),
            ]
        );
    }

    #[test]
    fn test_structural_issues_clean_document() {
        let doc = Document::new("Call (search) with [\"query\"] and {'k': 'v'}.\n  next").unwrap();
        assert!(structural_issues(&doc).is_empty());
    }
}
