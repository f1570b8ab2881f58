//! Ordered, queryable collections of content entries.

use derive_more::{AsRef, Deref};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

use super::builder::{Appending, ContentsBuilder};
use super::{Content, Payload};
use crate::error::{Error, ErrorKind, Result};
use crate::mime::MimeType;

/// An ordered, append-only collection of content entries.
///
/// Insertion order is significant: lookups return the first matching entry,
/// which is how "variant before default" precedence is expressed when the
/// caller orders appends accordingly. A collection is immutable once built;
/// clones are cheap because entry payloads are reference counted.
///
/// Collections serialize transparently as the JSON array of entry
/// projections.
///
/// # Example
///
/// ```
/// use ccf_core::prelude::*;
///
/// let contents = Contents::with_mime_type(MimeType::TEXT_BODY)
///     .and_value("Say it")
///     .and_localized_value("Säg det", "sv".parse()?)
///     .into_contents();
///
/// let value = contents.for_mime_type(&MimeType::TEXT_BODY);
/// assert_eq!(value.and_then(Payload::as_text), Some("Say it"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(AsRef, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contents {
    /// The entries, in insertion order.
    #[deref]
    #[as_ref]
    values: Vec<Content>,
}

impl Contents {
    /// Creates a collection from an externally supplied ordered sequence.
    #[must_use]
    pub fn new(values: Vec<Content>) -> Self {
        Self { values }
    }

    /// Starts a new contents builder, seeded with the given MIME type.
    #[must_use]
    pub fn with_mime_type(mime_type: MimeType) -> ContentsBuilder<Appending> {
        ContentsBuilder::start(mime_type)
    }

    /// Retrieves the payload of the first entry, in insertion order, whose
    /// MIME type equals the composed form of `mime`.
    ///
    /// The base type and each parameterized variant are independent
    /// buckets; among entries of the same exact MIME type, first inserted
    /// wins. Returns `None` when nothing matches.
    #[must_use]
    pub fn for_mime_type(&self, mime: &MimeType) -> Option<&Payload> {
        self.values
            .iter()
            .find(|content| content.matches_type(mime))
            .map(Content::payload)
    }

    /// Retrieves the payload of the first entry matching both the MIME type
    /// and the primary-language subtag of `locale`.
    ///
    /// Returns `None` when nothing matches.
    #[must_use]
    pub fn for_mime_type_and_locale(
        &self,
        mime: &MimeType,
        locale: &LanguageIdentifier,
    ) -> Option<&Payload> {
        self.values
            .iter()
            .find(|content| content.matches_type_and_locale(mime, locale))
            .map(Content::payload)
    }

    /// Returns a read-only, order-preserving copy of the entries.
    #[must_use]
    pub fn as_list(&self) -> Vec<Content> {
        self.values.clone()
    }

    /// Returns the map projection of every entry, in insertion order.
    #[must_use]
    pub fn as_map(&self) -> Vec<Map<String, Value>> {
        self.values.iter().map(Content::to_map).collect()
    }

    /// Serializes the entries to a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails; this should be
    /// unreachable for well-formed entries.
    pub fn as_json(&self) -> Result<String> {
        serde_json::to_string(&self.values).map_err(|err| {
            Error::new(ErrorKind::Serialization)
                .with_message("could not write contents as JSON string")
                .with_source(err)
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the collection holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.values.iter()
    }

    pub(crate) fn push(&mut self, content: Content) {
        self.values.push(content);
    }
}

impl From<Vec<Content>> for Contents {
    fn from(values: Vec<Content>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Content> for Contents {
    fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Contents {
    type Item = Content;
    type IntoIter = std::vec::IntoIter<Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Contents {
    type Item = &'a Content;
    type IntoIter = std::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> LanguageIdentifier {
        tag.parse().unwrap()
    }

    fn body(text: &str) -> Content {
        Content::new(MimeType::TEXT_BODY.mime_type(), text).unwrap()
    }

    #[test]
    fn test_retrieves_content_by_mime_type() {
        let contents = Contents::new(vec![
            body("Say it"),
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap(),
        ]);

        let value = contents.for_mime_type(&MimeType::TEXT_BODY);
        assert_eq!(value.and_then(Payload::as_text), Some("Say it"));
    }

    #[test]
    fn test_retrieves_content_by_mime_type_and_locale() {
        let contents = Contents::new(vec![
            body("Say it"),
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap(),
        ]);

        let value = contents.for_mime_type_and_locale(&MimeType::TEXT_BODY, &locale("sv"));
        assert_eq!(value.and_then(Payload::as_text), Some("Säg det"));
    }

    #[test]
    fn test_first_inserted_wins_among_equal_types() {
        let contents = Contents::new(vec![body("first"), body("second")]);

        let value = contents.for_mime_type(&MimeType::TEXT_BODY);
        assert_eq!(value.and_then(Payload::as_text), Some("first"));
    }

    #[test]
    fn test_variant_and_base_are_independent_buckets() {
        let variant = MimeType::TEXT_BODY.with_params("foo").unwrap();
        let contents = Contents::new(vec![
            Content::new(variant.mime_type(), "variant").unwrap(),
            body("default"),
        ]);

        assert_eq!(
            contents
                .for_mime_type(&MimeType::TEXT_BODY)
                .and_then(Payload::as_text),
            Some("default")
        );
        assert_eq!(
            contents.for_mime_type(&variant).and_then(Payload::as_text),
            Some("variant")
        );
    }

    #[test]
    fn test_variant_only_collection_misses_base_query() {
        let variant = MimeType::TEXT_BODY.with_params("x").unwrap();
        let contents = Contents::new(vec![Content::new(variant.mime_type(), "variant").unwrap()]);

        assert!(contents.for_mime_type(&MimeType::TEXT_BODY).is_none());
    }

    #[test]
    fn test_lookup_on_empty_collection_is_absent() {
        let contents = Contents::default();

        assert!(contents.for_mime_type(&MimeType::TEXT_BODY).is_none());
        assert!(
            contents
                .for_mime_type_and_locale(&MimeType::TEXT_BODY, &locale("en"))
                .is_none()
        );
    }

    #[test]
    fn test_as_list_is_an_order_preserving_copy() {
        let contents = Contents::new(vec![body("first"), body("second")]);
        let list = contents.as_list();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].payload().as_text(), Some("first"));
        assert_eq!(list[1].payload().as_text(), Some("second"));
        assert_eq!(contents.len(), 2);
    }

    #[test]
    fn test_as_map_is_idempotent() {
        let contents = Contents::new(vec![
            body("Say it"),
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap(),
        ]);

        assert_eq!(contents.as_map(), contents.as_map());
    }

    #[test]
    fn test_as_json_renders_projection_array() {
        let contents = Contents::new(vec![
            body("Say it"),
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap(),
        ]);

        let json = contents.as_json().unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"mimeType":"text/vnd.content.body","content":"Say it"},"#,
                r#"{"mimeType":"text/vnd.content.body","content":"Säg det","locale":"sv"}]"#
            )
        );
    }

    #[test]
    fn test_json_round_trip_preserves_entries() {
        let contents = Contents::new(vec![
            body("Say it"),
            Content::localized(MimeType::TEXT_BODY.mime_type(), "Säg det", locale("sv")).unwrap(),
            Content::new(MimeType::IMAGE_APPICON.mime_type(), vec![1u8, 2, 3]).unwrap(),
        ]);

        let json = contents.as_json().unwrap();
        let decoded = Contents::from_json(&json).unwrap();

        assert_eq!(decoded, contents);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let contents: Contents = vec![body("a"), body("b")].into_iter().collect();

        let texts: Vec<&str> = contents
            .iter()
            .filter_map(|content| content.payload().as_text())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
