//! JSON sniffing.

use serde::de::IgnoredAny;
use tracing::trace;

/// Whether `content` is a single well-formed JSON value.
///
/// Literals (`42`, `"text"`, `null`) count: the JSON grammar accepts them at
/// the top level. The value is discarded; only grammar conformance matters.
#[must_use]
pub fn parses_as_json(content: &str) -> bool {
    match serde_json::from_str::<IgnoredAny>(content) {
        Ok(_) => true,
        Err(e) => {
            trace!(error = %e, "not JSON");
            false
        }
    }
}
