//! Explicit JSON decoding for content entries.
//!
//! The wire form is the map projection produced by [`Content::to_map`]:
//! `mimeType` (required, non-empty string), `content` (required string),
//! and `locale` (optional BCP 47 language tag). Entries whose MIME type is
//! outside the `text/` top-level family carry their payload as a standard
//! base64 string and decode to binary; everything else decodes to text.
//! Unknown fields are ignored.
//!
//! Decoding validates the raw fields and then goes through the normal
//! constructors, so the entry invariants cannot be bypassed.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::de::{Deserialize, Deserializer, Error as _};
use unic_langid::LanguageIdentifier;

use super::{Content, Contents, Payload};
use crate::error::{Error, ErrorKind, Result};

/// Raw mirror of the wire form, prior to validation.
#[derive(serde::Deserialize)]
struct RawContent {
    #[serde(rename = "mimeType")]
    mime_type: String,
    content: String,
    locale: Option<String>,
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContent::deserialize(deserializer)?;
        decode(raw).map_err(D::Error::custom)
    }
}

impl Content {
    /// Decodes a single entry from its JSON object form.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the input is not valid JSON or
    /// does not satisfy the wire contract.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            Error::new(ErrorKind::Deserialization)
                .with_message("could not decode content entry")
                .with_source(err)
        })
    }
}

impl Contents {
    /// Decodes a collection from its JSON array form.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the input is not valid JSON or
    /// any element does not satisfy the wire contract.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            Error::new(ErrorKind::Deserialization)
                .with_message("could not decode contents")
                .with_source(err)
        })
    }
}

/// Returns `true` for MIME types in the `text/` top-level family.
fn is_text_family(mime_type: &str) -> bool {
    mime_type.starts_with("text/")
}

fn decode(raw: RawContent) -> Result<Content> {
    if raw.mime_type.is_empty() {
        return Err(Error::new(ErrorKind::Deserialization)
            .with_message("missing or empty mimeType field"));
    }

    let payload = if is_text_family(&raw.mime_type) {
        Payload::from(raw.content)
    } else {
        let bytes = BASE64_STANDARD.decode(raw.content.as_bytes()).map_err(|err| {
            Error::new(ErrorKind::Deserialization)
                .with_message(format!("invalid base64 content for '{}'", raw.mime_type))
                .with_source(err)
        })?;
        Payload::from(bytes)
    };

    let locale = raw.locale.map(|tag| parse_locale(&tag)).transpose()?;

    Content::from_parts(raw.mime_type, payload, locale)
}

fn parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    tag.parse().map_err(|err: unic_langid::LanguageIdentifierError| {
        Error::new(ErrorKind::Deserialization)
            .with_message(format!("invalid locale tag '{tag}'"))
            .with_source(err)
    })
}
