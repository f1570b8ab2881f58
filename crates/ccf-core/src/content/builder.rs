//! Chaining builder for content collections.
//!
//! The protocol is a small state machine. A builder starts in the
//! [`Appending`] stage, where the only move is to append a value under the
//! current MIME type. The first append advances to the [`Buildable`] stage,
//! which additionally allows switching the current MIME type (returning to
//! [`Appending`] for the new type) and the terminal operations. The builder
//! moves by value through the chain, so the append sequence is single-owner
//! by construction.

use std::marker::PhantomData;

use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

use super::{Content, ContentValue, Contents};
use crate::TRACING_TARGET_CONTENT;
use crate::error::Result;
use crate::mime::MimeType;

/// Marker for the append-only builder stage.
#[derive(Debug)]
pub enum Appending {}

/// Marker for the stage reached after the first append, where the current
/// MIME type can be switched and the terminal operations are available.
#[derive(Debug)]
pub enum Buildable {}

/// Chaining builder over one owned entry buffer.
///
/// Obtained from [`Contents::with_mime_type`]; see the module docs for the
/// stage protocol and [`Contents`] for the resulting collection.
///
/// # Example
///
/// ```
/// use ccf_core::prelude::*;
///
/// let list = Contents::with_mime_type(MimeType::TEXT_SUBJECT)
///     .and_value("Introducing, the magnificent")
///     .and_with_mime_type(MimeType::TEXT_BODY)
///     .and_value("Welcome to the first day of the rest of your life!")
///     .as_list();
///
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug)]
pub struct ContentsBuilder<Stage> {
    mime_type: MimeType,
    contents: Contents,
    _stage: PhantomData<Stage>,
}

impl<Stage> ContentsBuilder<Stage> {
    fn into_stage<Next>(self) -> ContentsBuilder<Next> {
        ContentsBuilder {
            mime_type: self.mime_type,
            contents: self.contents,
            _stage: PhantomData,
        }
    }

    /// Appends an entry unless the value is absent or blank.
    fn append(&mut self, value: ContentValue, locale: Option<LanguageIdentifier>) {
        match value.into_payload() {
            Some(payload) if !payload.is_blank() => {
                self.contents
                    .push(Content::from_mime(&self.mime_type, payload, locale));
            }
            _ => {
                tracing::trace!(
                    target: TRACING_TARGET_CONTENT,
                    mime_type = %self.mime_type,
                    "Skipping blank or absent content value"
                );
            }
        }
    }
}

impl ContentsBuilder<Appending> {
    pub(crate) fn start(mime_type: MimeType) -> Self {
        Self {
            mime_type,
            contents: Contents::default(),
            _stage: PhantomData,
        }
    }

    /// Appends a value under the current MIME type.
    ///
    /// Blank text, zero-length binary, and absent values append nothing;
    /// the chain continues either way.
    pub fn and_value(mut self, value: impl Into<ContentValue>) -> ContentsBuilder<Buildable> {
        self.append(value.into(), None);
        self.into_stage()
    }

    /// Appends a value with a locale under the current MIME type.
    ///
    /// The same filtering applies as for [`and_value`](Self::and_value).
    pub fn and_localized_value(
        mut self,
        value: impl Into<ContentValue>,
        locale: LanguageIdentifier,
    ) -> ContentsBuilder<Buildable> {
        self.append(value.into(), Some(locale));
        self.into_stage()
    }
}

impl ContentsBuilder<Buildable> {
    /// Appends another value under the current MIME type.
    ///
    /// Blank text, zero-length binary, and absent values append nothing.
    pub fn and_value(mut self, value: impl Into<ContentValue>) -> Self {
        self.append(value.into(), None);
        self
    }

    /// Appends another value with a locale under the current MIME type.
    pub fn and_localized_value(
        mut self,
        value: impl Into<ContentValue>,
        locale: LanguageIdentifier,
    ) -> Self {
        self.append(value.into(), Some(locale));
        self
    }

    /// Switches the current MIME type for subsequent appends.
    #[must_use]
    pub fn and_with_mime_type(mut self, mime_type: MimeType) -> ContentsBuilder<Appending> {
        self.mime_type = mime_type;
        self.into_stage()
    }

    /// Builds the accumulated entries as a read-only, order-preserving
    /// list copy.
    #[must_use]
    pub fn as_list(&self) -> Vec<Content> {
        self.contents.as_list()
    }

    /// Builds the accumulated entries as a list of map projections.
    #[must_use]
    pub fn as_map(&self) -> Vec<Map<String, Value>> {
        self.contents.as_map()
    }

    /// Builds the accumulated entries as a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn as_json(&self) -> Result<String> {
        self.contents.as_json()
    }

    /// Consumes the builder, yielding the queryable collection.
    #[must_use]
    pub fn into_contents(self) -> Contents {
        self.contents
    }
}
