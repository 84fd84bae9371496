//! YAML sniffing.
//!
//! Almost any line of prose is a valid YAML plain scalar, so a stream only
//! counts as YAML when every document in it is a mapping or a sequence.
//! Streams of bare scalars, or with no documents at all, are not structured.

use serde_json::Value;
use tracing::trace;

/// Whether `content` parses as a YAML stream of mappings and sequences.
#[must_use]
pub fn parses_as_yaml(content: &str) -> bool {
    let documents: Vec<Value> = match serde_saphyr::from_multiple(content) {
        Ok(docs) => docs,
        Err(e) => {
            trace!(error = %e, "not YAML");
            return false;
        }
    };

    !documents.is_empty()
        && documents
            .iter()
            .all(|doc| matches!(doc, Value::Object(_) | Value::Array(_)))
}
