//! Content payloads and builder input values.
//!
//! This module provides the [`Payload`] sum type carried by every content
//! entry (exactly one of UTF-8 text or a raw byte sequence) and the
//! [`ContentValue`] input type the builder accepts, which additionally
//! models absent values.

use std::fmt;

use bytes::Bytes;
use derive_more::From;
use hipstr::HipStr;

/// The data carried by a single content entry.
///
/// Exactly one of the two kinds is present: UTF-8 text or a raw byte
/// sequence. Payloads are immutable and cheap to clone; both backing
/// types are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(From)]
pub enum Payload {
    /// UTF-8 text content.
    Text(HipStr<'static>),
    /// Raw binary content.
    Binary(Bytes),
}

impl Payload {
    /// Returns the text, if this is a text payload.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Binary(_) => None,
        }
    }

    /// Returns the raw bytes, if this is a binary payload.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(_) => None,
            Self::Binary(bytes) => Some(bytes),
        }
    }

    /// Returns `true` if this is a text payload.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns `true` if this is a binary payload.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    /// Returns `true` if the payload is blank: empty or whitespace-only
    /// text, or a zero-length byte sequence.
    ///
    /// Blank payloads are filtered by the builder's append policy.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Binary(bytes) => bytes.is_empty(),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Binary(bytes) => write!(f, "[Binary data: {} bytes]", bytes.len()),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(HipStr::from(text))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(HipStr::from(text))
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(bytes))
    }
}

/// A possibly-absent input value for the builder.
///
/// Absent values (`None` inputs) append nothing, exactly like blank ones;
/// see the builder's append policy. Anything convertible to a [`Payload`]
/// converts to a present `ContentValue`, and `Option`s of those convert with
/// `None` meaning absent.
#[derive(Debug, Clone, Default)]
pub struct ContentValue(Option<Payload>);

impl ContentValue {
    /// An explicitly absent value.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Returns `true` if no value is present.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn into_payload(self) -> Option<Payload> {
        self.0
    }
}

impl From<Payload> for ContentValue {
    fn from(payload: Payload) -> Self {
        Self(Some(payload))
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self(Some(Payload::from(text)))
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self(Some(Payload::from(text)))
    }
}

impl From<HipStr<'static>> for ContentValue {
    fn from(text: HipStr<'static>) -> Self {
        Self(Some(Payload::Text(text)))
    }
}

impl From<&[u8]> for ContentValue {
    fn from(bytes: &[u8]) -> Self {
        Self(Some(Payload::from(bytes)))
    }
}

impl From<Vec<u8>> for ContentValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Some(Payload::from(bytes)))
    }
}

impl From<Bytes> for ContentValue {
    fn from(bytes: Bytes) -> Self {
        Self(Some(Payload::Binary(bytes)))
    }
}

impl<T: Into<Payload>> From<Option<T>> for ContentValue {
    fn from(value: Option<T>) -> Self {
        Self(value.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_kind_views() {
        let text = Payload::from("Hello");
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("Hello"));
        assert_eq!(text.as_bytes(), None);

        let binary = Payload::from(vec![1u8, 2, 3]);
        assert!(binary.is_binary());
        assert_eq!(binary.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(binary.as_text(), None);
    }

    #[test]
    fn test_payload_size() {
        assert_eq!(Payload::from("Hello").size(), 5);
        assert_eq!(Payload::from(vec![1u8, 2, 3]).size(), 3);
    }

    #[test]
    fn test_blank_detection() {
        assert!(Payload::from("").is_blank());
        assert!(Payload::from("    ").is_blank());
        assert!(Payload::from(Vec::<u8>::new()).is_blank());

        assert!(!Payload::from("foo").is_blank());
        assert!(!Payload::from(vec![0u8]).is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(Payload::from("Say it").to_string(), "Say it");
        assert_eq!(
            Payload::from(vec![1u8, 2, 3]).to_string(),
            "[Binary data: 3 bytes]"
        );
    }

    #[test]
    fn test_content_value_conversions() {
        assert!(!ContentValue::from("foo").is_absent());
        assert!(!ContentValue::from(vec![1u8]).is_absent());
        assert!(!ContentValue::from(Bytes::from_static(b"x")).is_absent());

        assert!(ContentValue::absent().is_absent());
        assert!(ContentValue::from(Option::<&str>::None).is_absent());
        assert!(!ContentValue::from(Some("foo")).is_absent());
    }
}
