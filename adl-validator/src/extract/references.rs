//! Reference extraction.

use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{collect_group, compile, starts_token};

/// `http://` or `https://` up to whitespace, a quote or an angle bracket.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r#"https?://[^\s'"<>]+"#));

/// File-like paths: optional drive, a separator, path characters, then `.ext`.
///
/// Matches anywhere in the text, so `docs/policy.md` yields `/policy.md`.
/// Matches starting inside a URL are dropped in code.
static FILE_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?:[A-Za-z]:)?",      // optional drive letter
        r"[\\/]",               // leading separator
        r"[A-Za-z0-9_\-./\\]+", // path characters
        r"\.[A-Za-z0-9]+",      // extension
    ))
});

/// `ref: x`, `References=y`, `refs z`: keyword, optional `:`/`=`, then a token.
static KEYWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"\b(?i:references|reference|refs|ref)\b", // keyword as a whole word, any case
        r"[:=]?\s*",                               // optional separator, optional whitespace
        r"([A-Za-z0-9_./:-]+)",                    // the referenced token
    ))
});

/// `#use_case_id`; the token-start and trailing-character rules are applied in code.
static USE_CASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"#([A-Za-z0-9_/-]+)"));

/// One independent rule for discovering references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFamily {
    /// `http(s)://...` URLs, reported whole.
    Url,
    /// File-like paths such as `/etc/agent.yaml` or `C:\docs\a.md`.
    FilePath,
    /// `ref`, `refs`, `reference`, `references` followed by a token.
    Keyword,
    /// `#use_case` references to other use cases, reported without the `#`.
    UseCase,
}

impl ReferenceFamily {
    /// Every family, in the order the extractor runs them.
    pub const ALL: [Self; 4] = [Self::Url, Self::FilePath, Self::Keyword, Self::UseCase];

    /// Short name used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::FilePath => "path",
            Self::Keyword => "keyword",
            Self::UseCase => "use_case",
        }
    }

    /// All distinct references this family finds in `text`.
    #[must_use]
    pub fn find(self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        match self {
            Self::Url => found.extend(URL_PATTERN.find_iter(text).map(|m| m.as_str().to_owned())),
            Self::FilePath => {
                let urls: Vec<Range<usize>> =
                    URL_PATTERN.find_iter(text).map(|m| m.range()).collect();
                found.extend(
                    FILE_PATH_PATTERN
                        .find_iter(text)
                        .filter(|m| !urls.iter().any(|url| url.contains(&m.start())))
                        .map(|m| m.as_str().to_owned()),
                );
            }
            Self::Keyword => collect_group(&KEYWORD_PATTERN, text, &mut found),
            Self::UseCase => found.extend(
                USE_CASE_PATTERN
                    .captures_iter(text)
                    .filter(|caps| caps.get(0).is_some_and(|m| starts_token(text, m.start())))
                    .filter_map(|caps| caps.get(1))
                    .filter(|m| ends_use_case_reference(text.get(m.end()..)))
                    .map(|m| m.as_str().to_owned()),
            ),
        }
        found
    }
}

/// A use-case id must be followed by whitespace, `.`, `,` or the end of the text.
fn ends_use_case_reference(after: Option<&str>) -> bool {
    match after.and_then(|rest| rest.chars().next()) {
        None => true,
        Some(c) => c.is_whitespace() || c == '.' || c == ',',
    }
}

/// Union of every [`ReferenceFamily`] over `text`: distinct references, sorted.
#[must_use]
pub fn extract_references(text: &str) -> BTreeSet<String> {
    let mut references = BTreeSet::new();
    for family in ReferenceFamily::ALL {
        let found = family.find(text);
        trace!(family = family.name(), count = found.len(), "reference family scanned");
        references.extend(found);
    }
    references
}
