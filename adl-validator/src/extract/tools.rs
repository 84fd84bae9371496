//! Tool-usage extraction.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{collect_group, compile, starts_token};

/// `tools: search`, `uses=fetch`, `Tool web.lookup`: keyword, optional `:`/`=`, then a name.
static KEYWORD_DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"\b(?i:tools|tool|uses|use)\b", // keyword as a whole word, any case
        r"[:=]?\s*",                     // optional separator, optional whitespace
        r"([A-Za-z0-9_.-]+)",            // the declared name
    ))
});

/// An identifier immediately followed by `(`; the prefix filter is applied in code.
static CALL_STYLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b([A-Za-z_][A-Za-z0-9_]*)\("));

/// `@name`; the `@` must start a token, which is checked in code.
static ANNOTATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"@([A-Za-z0-9_-]+)"));

/// Prefixes that mark a call as a tool invocation, compared case-insensitively.
const CALL_PREFIXES: [&str; 4] = ["run_", "call_", "invoke_", "tool_"];

/// One independent rule for discovering tool names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFamily {
    /// `tools:`, `tool`, `uses`, `use` followed by a name.
    KeywordDeclaration,
    /// `run_x(`, `call_x(`, `invoke_x(`, `tool_x(`; yields `x`.
    CallStyle,
    /// `@x`; yields `x`.
    Annotation,
}

impl ToolFamily {
    /// Every family, in the order the extractor runs them.
    pub const ALL: [Self; 3] = [Self::KeywordDeclaration, Self::CallStyle, Self::Annotation];

    /// Short name used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KeywordDeclaration => "keyword",
            Self::CallStyle => "call",
            Self::Annotation => "annotation",
        }
    }

    /// All distinct tool names this family finds in `text`.
    #[must_use]
    pub fn find(self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        match self {
            Self::KeywordDeclaration => collect_group(&KEYWORD_DECLARATION_PATTERN, text, &mut found),
            Self::CallStyle => found.extend(
                CALL_STYLE_PATTERN
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(1))
                    .filter_map(|m| strip_call_prefix(m.as_str()))
                    .map(str::to_owned),
            ),
            Self::Annotation => found.extend(
                ANNOTATION_PATTERN
                    .captures_iter(text)
                    .filter(|caps| caps.get(0).is_some_and(|m| starts_token(text, m.start())))
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str().to_owned()),
            ),
        }
        found
    }
}

/// The tool name behind a call-style identifier, e.g. `Foo` for `RUN_Foo`.
///
/// Returns `None` when no prefix matches or nothing follows the prefix.
fn strip_call_prefix(identifier: &str) -> Option<&str> {
    CALL_PREFIXES.iter().find_map(|prefix| {
        let (head, rest) = identifier.split_at_checked(prefix.len())?;
        (head.eq_ignore_ascii_case(prefix) && !rest.is_empty()).then_some(rest)
    })
}

/// Union of every [`ToolFamily`] over `text`: distinct names, sorted.
#[must_use]
pub fn extract_tools(text: &str) -> BTreeSet<String> {
    let mut tools = BTreeSet::new();
    for family in ToolFamily::ALL {
        let found = family.find(text);
        trace!(family = family.name(), count = found.len(), "tool family scanned");
        tools.extend(found);
    }
    tools
}
