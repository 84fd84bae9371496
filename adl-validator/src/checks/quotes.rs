//! Quote parity checking.

use crate::result::SyntaxIssue;

/// Quote characters checked, in reporting order.
const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Report each quote character that occurs an odd number of times.
///
/// Escapes and nesting are ignored; this is a pure parity count.
#[must_use]
pub fn check_quotes(text: &str) -> Vec<SyntaxIssue> {
    QUOTE_CHARS
        .into_iter()
        .filter(|&quote| text.matches(quote).count() % 2 == 1)
        .map(|quote| SyntaxIssue::new(format!("unclosed quote `{quote}`")))
        .collect()
}
