//! The document handed to the validation engine.
//!
//! A [`Document`] is never blank: construction rejects empty and
//! whitespace-only input with [`RequestError::NoContent`], so every analysis
//! step downstream is a total function over real text.

use std::borrow::Cow;
use std::str::Lines;

use crate::error::RequestError;

/// An immutable, non-blank ADL document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    text: Cow<'a, str>,
}

impl<'a> Document<'a> {
    /// Wrap already-decoded text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NoContent`] if `text` is empty or whitespace-only.
    pub fn new(text: &'a str) -> Result<Self, RequestError> {
        Self::from_cow(Cow::Borrowed(text))
    }

    /// Decode raw bytes (see [`decode_text`]) and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NoContent`] if the decoded text is empty or
    /// whitespace-only.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, RequestError> {
        Self::from_cow(decode_text(bytes))
    }

    fn from_cow(text: Cow<'a, str>) -> Result<Self, RequestError> {
        if text.trim().is_empty() {
            return Err(RequestError::NoContent);
        }
        Ok(Self { text })
    }

    /// The full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document split on newlines. Only the indentation check looks at lines.
    pub fn lines(&self) -> Lines<'_> {
        self.text.lines()
    }
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1 when they are not valid UTF-8.
///
/// The fallback maps every byte to the code point of the same value, so
/// decoding never fails and never drops input.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}
