//! A single content entry combining a MIME type, a payload, and an
//! optional locale.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use hipstr::HipStr;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

use super::Payload;
use crate::error::{Error, ErrorKind, Result};
use crate::mime::MimeType;

/// Projection key carrying the MIME-type identity string.
const KEY_MIME_TYPE: &str = "mimeType";

/// Projection key carrying the payload.
const KEY_CONTENT: &str = "content";

/// Projection key carrying the locale; absent when the entry has none.
const KEY_LOCALE: &str = "locale";

/// An immutable content entry: MIME type, payload, optional locale.
///
/// The MIME type is stored as its composed string form so entries for types
/// unknown to the current catalog round-trip untouched. The locale, when
/// present, participates only in primary-language comparison; region and
/// script subtags are ignored for matching.
///
/// # Example
///
/// ```
/// use ccf_core::{Content, MimeType};
///
/// let entry = Content::new(MimeType::TEXT_BODY.mime_type(), "Say it")?;
///
/// assert!(entry.matches_type(&MimeType::TEXT_BODY));
/// assert!(entry.locale().is_none());
/// # Ok::<(), ccf_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    mime_type: HipStr<'static>,
    payload: Payload,
    locale: Option<LanguageIdentifier>,
}

impl Content {
    /// Creates an entry without a locale.
    ///
    /// `mime_type` is expected in composed form, but is not validated
    /// against the catalog; any non-empty string is accepted.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `mime_type` is empty.
    pub fn new(mime_type: impl Into<String>, payload: impl Into<Payload>) -> Result<Self> {
        Self::from_parts(mime_type.into(), payload.into(), None)
    }

    /// Creates an entry carrying a locale.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `mime_type` is empty.
    pub fn localized(
        mime_type: impl Into<String>,
        payload: impl Into<Payload>,
        locale: LanguageIdentifier,
    ) -> Result<Self> {
        Self::from_parts(mime_type.into(), payload.into(), Some(locale))
    }

    pub(crate) fn from_parts(
        mime_type: String,
        payload: Payload,
        locale: Option<LanguageIdentifier>,
    ) -> Result<Self> {
        if mime_type.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput)
                .with_message("content MIME type must not be empty"));
        }

        Ok(Self {
            mime_type: HipStr::from(mime_type),
            payload,
            locale,
        })
    }

    /// Infallible constructor for the builder, which only ever passes
    /// catalog-composed MIME types.
    pub(crate) fn from_mime(
        mime: &MimeType,
        payload: Payload,
        locale: Option<LanguageIdentifier>,
    ) -> Self {
        Self {
            mime_type: HipStr::from(mime.mime_type()),
            payload,
            locale,
        }
    }

    /// Returns the composed MIME-type string of this entry.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the payload of this entry.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the locale of this entry, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }

    /// Returns `true` iff this entry's MIME type equals the composed form
    /// of `mime`.
    ///
    /// Matching is exact on the composed string, so a parameterized variant
    /// and its base type never match each other.
    #[must_use]
    pub fn matches_type(&self, mime: &MimeType) -> bool {
        mime.eq_composed(self.mime_type.as_str())
    }

    /// Returns `true` iff [`matches_type`](Self::matches_type) holds and
    /// this entry's locale has the same primary-language subtag as
    /// `locale`.
    ///
    /// An entry without a locale never matches a locale-qualified query.
    #[must_use]
    pub fn matches_type_and_locale(&self, mime: &MimeType, locale: &LanguageIdentifier) -> bool {
        self.matches_type(mime)
            && self
                .locale
                .as_ref()
                .is_some_and(|own| own.language == locale.language)
    }

    /// Projects this entry to its language-neutral map form.
    ///
    /// Key order is `mimeType`, `content`, then `locale`; the locale key is
    /// absent (not null) when the entry carries none. Binary payloads are
    /// rendered as standard base64 strings.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert(
            KEY_MIME_TYPE.to_owned(),
            Value::String(self.mime_type.to_string()),
        );
        map.insert(KEY_CONTENT.to_owned(), Value::String(self.content_string()));

        if let Some(locale) = &self.locale {
            map.insert(KEY_LOCALE.to_owned(), Value::String(locale.to_string()));
        }

        map
    }

    /// The `content` field in wire form: text verbatim, binary as standard
    /// base64.
    fn content_string(&self) -> String {
        match &self.payload {
            Payload::Text(text) => text.to_string(),
            Payload::Binary(bytes) => BASE64_STANDARD.encode(bytes),
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Content [mimeType={}, content={}",
            self.mime_type, self.payload
        )?;

        if let Some(locale) = &self.locale {
            write!(f, ", locale={locale}")?;
        }

        write!(f, "]")
    }
}

impl Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.locale.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(fields))?;

        map.serialize_entry(KEY_MIME_TYPE, self.mime_type.as_str())?;
        map.serialize_entry(KEY_CONTENT, &self.content_string())?;

        if let Some(locale) = &self.locale {
            map.serialize_entry(KEY_LOCALE, &locale.to_string())?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> LanguageIdentifier {
        tag.parse().unwrap()
    }

    #[test]
    fn test_rejects_empty_mime_type() {
        let err = Content::new("", "value").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_structural_equality() {
        let a = Content::new("type", "value").unwrap();
        let b = Content::new("type", "value").unwrap();
        let c = Content::localized("type", "value", locale("en")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_has_pretty_display() {
        let without_locale = Content::new("type", "value").unwrap();
        let rendered = without_locale.to_string();
        assert!(rendered.contains("mimeType=type"));
        assert!(rendered.contains("content=value"));
        assert!(!rendered.contains("locale="));

        let with_locale = Content::localized("type", "value", locale("en")).unwrap();
        assert!(with_locale.to_string().contains("locale=en"));
    }

    #[test]
    fn test_display_renders_binary_placeholder() {
        let entry = Content::new("image/vnd.content.appicon", vec![1u8, 2, 3]).unwrap();
        assert!(entry.to_string().contains("[Binary data: 3 bytes]"));
    }

    #[test]
    fn test_matches_type_is_exact() {
        let entry = Content::new(MimeType::TEXT_BODY.mime_type(), "Say it").unwrap();

        assert!(entry.matches_type(&MimeType::TEXT_BODY));
        assert!(!entry.matches_type(&MimeType::TEXT_SUBJECT));

        let variant = MimeType::TEXT_BODY.with_params("foo").unwrap();
        assert!(!entry.matches_type(&variant));
    }

    #[test]
    fn test_variant_entry_does_not_match_base() {
        let variant = MimeType::TEXT_BODY.with_params("foo").unwrap();
        let entry = Content::new(variant.mime_type(), "variant").unwrap();

        assert!(entry.matches_type(&variant));
        assert!(!entry.matches_type(&MimeType::TEXT_BODY));
    }

    #[test]
    fn test_locale_matching_ignores_region() {
        let entry =
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Hello", locale("en-GB")).unwrap();

        assert!(entry.matches_type_and_locale(&MimeType::TEXT_BODY, &locale("en")));
        assert!(!entry.matches_type_and_locale(&MimeType::TEXT_BODY, &locale("sv")));
    }

    #[test]
    fn test_entry_without_locale_never_matches_locale_query() {
        let entry = Content::new(MimeType::TEXT_BODY.mime_type(), "Say it").unwrap();

        assert!(!entry.matches_type_and_locale(&MimeType::TEXT_BODY, &locale("en")));
    }

    #[test]
    fn test_to_map_keys_and_order() {
        let entry =
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap();
        let map = entry.to_map();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mimeType", "content", "locale"]);

        assert_eq!(
            map.get("mimeType").and_then(Value::as_str),
            Some("text/vnd.content.body")
        );
        assert_eq!(map.get("content").and_then(Value::as_str), Some("Säg det"));
        assert_eq!(map.get("locale").and_then(Value::as_str), Some("sv"));
    }

    #[test]
    fn test_to_map_omits_absent_locale_key() {
        let entry = Content::new(MimeType::TEXT_BODY.mime_type(), "Say it").unwrap();
        let map = entry.to_map();

        assert!(!map.contains_key("locale"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_to_map_encodes_binary_as_base64() {
        let entry = Content::new(MimeType::IMAGE_APPICON.mime_type(), vec![1u8, 2, 3]).unwrap();
        let map = entry.to_map();

        assert_eq!(map.get("content").and_then(Value::as_str), Some("AQID"));
    }

    #[test]
    fn test_serializes_in_projection_form() {
        let entry =
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap();
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"mimeType":"text/vnd.content.body","content":"Säg det","locale":"sv"}"#
        );
    }
}
