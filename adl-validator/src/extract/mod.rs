//! Tool and reference extraction.
//!
//! Each extractor is an ordered list of independent pattern families. Every
//! family scans the whole document on its own; the extractor unions their
//! matches into a `BTreeSet`, which deduplicates and keeps a stable
//! lexicographic order regardless of discovery order.
//!
//! Extraction is case-preserving: keywords match case-insensitively, but the
//! captured names keep the casing found in the document.

pub mod references;
pub mod tools;

use std::collections::BTreeSet;

use regex::Regex;

pub use references::{ReferenceFamily, extract_references};
pub use tools::{ToolFamily, extract_tools};

/// Insert capture group 1 of every match of `pattern` into `found`.
fn collect_group(pattern: &Regex, text: &str, found: &mut BTreeSet<String>) {
    found.extend(
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned()),
    );
}

/// Whether the match starting at byte `start` begins a token: start of text
/// or right after a non-word character.
fn starts_token(text: &str, start: usize) -> bool {
    text.get(..start)
        .and_then(|before| before.chars().next_back())
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Build a static pattern, panicking on an invalid literal.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid extraction regex: {err}"),
    }
}
