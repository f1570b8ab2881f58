//! MIME-type identities for content entries.
//!
//! This module provides the [`MimeType`] value object: a fixed catalog of
//! recognized content-type identifiers, each extensible with a parameter
//! suffix via [`MimeType::with_params`]. The composed string form is the
//! sole identity of a MIME type, so a parameterized variant never compares
//! equal to its unparameterized base type.

use std::fmt;

use hipstr::HipStr;

use crate::error::{Error, ErrorKind, Result};

/// Raw identity strings for the recognized content MIME types.
pub mod names {
    /// Subject line text.
    pub const TEXT_SUBJECT: &str = "text/vnd.content.subject";

    /// Descriptive text.
    pub const TEXT_DESCRIPTION: &str = "text/vnd.content.description";

    /// Body text.
    pub const TEXT_BODY: &str = "text/vnd.content.body";

    /// Application icon, textual form.
    pub const TEXT_APPICON: &str = "text/vnd.content.appicon";

    /// Application icon, binary image form.
    pub const IMAGE_APPICON: &str = "image/vnd.content.appicon";
}

/// Separator between the base type and the parameter suffix.
const PARAMS_SEPARATOR: char = ';';

/// An immutable MIME-type identity with an optional parameter suffix.
///
/// Values come from the catalog of associated constants; variants are
/// derived with [`with_params`](Self::with_params). Equality is defined over
/// the composed string form (`base` plus, if present, `;` + `params`) and is
/// also available against raw strings in that form.
///
/// # Example
///
/// ```
/// use ccf_core::MimeType;
///
/// assert_eq!(MimeType::TEXT_BODY.mime_type(), "text/vnd.content.body");
/// assert!(MimeType::TEXT_BODY == "text/vnd.content.body");
///
/// let variant = MimeType::TEXT_BODY.with_params("foo")?;
/// assert_eq!(variant.mime_type(), "text/vnd.content.body;foo");
/// assert_ne!(variant, MimeType::TEXT_BODY);
/// # Ok::<(), ccf_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    base: &'static str,
    params: Option<HipStr<'static>>,
}

impl MimeType {
    /// Subject line of a content set.
    pub const TEXT_SUBJECT: MimeType = MimeType::from_static(names::TEXT_SUBJECT);

    /// Descriptive text of a content set.
    pub const TEXT_DESCRIPTION: MimeType = MimeType::from_static(names::TEXT_DESCRIPTION);

    /// Body text of a content set.
    pub const TEXT_BODY: MimeType = MimeType::from_static(names::TEXT_BODY);

    /// Application icon in textual form.
    pub const TEXT_APPICON: MimeType = MimeType::from_static(names::TEXT_APPICON);

    /// Application icon in binary image form.
    pub const IMAGE_APPICON: MimeType = MimeType::from_static(names::IMAGE_APPICON);

    const fn from_static(base: &'static str) -> Self {
        Self { base, params: None }
    }

    /// Returns the composed identity string of this MIME type.
    #[must_use]
    pub fn mime_type(&self) -> String {
        self.to_string()
    }

    /// Returns the unparameterized base type string.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base
    }

    /// Returns the parameter suffix, if any.
    #[must_use]
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Derives a parameterized variant of this MIME type.
    ///
    /// The variant carries the same base type and is a distinct identity: it
    /// never compares equal to the unparameterized base type. Deriving a
    /// variant from a variant replaces the parameter suffix.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `params` is empty, blank, or
    /// contains the `;` separator, which would break round-trip
    /// parseability of the composed form.
    pub fn with_params(&self, params: impl Into<String>) -> Result<Self> {
        let params = params.into();

        if params.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput)
                .with_message("MIME-type params must not be empty"));
        }

        if params.contains(PARAMS_SEPARATOR) {
            return Err(Error::new(ErrorKind::InvalidInput).with_message(format!(
                "MIME-type params must not contain '{PARAMS_SEPARATOR}': {params}"
            )));
        }

        Ok(Self {
            base: self.base,
            params: Some(HipStr::from(params)),
        })
    }

    /// Compares the composed identity against a raw string form.
    pub(crate) fn eq_composed(&self, other: &str) -> bool {
        match &self.params {
            None => other == self.base,
            Some(params) => other
                .strip_prefix(self.base)
                .and_then(|rest| rest.strip_prefix(PARAMS_SEPARATOR))
                .is_some_and(|rest| rest == params.as_str()),
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "{}{PARAMS_SEPARATOR}{}", self.base, params),
            None => f.write_str(self.base),
        }
    }
}

impl PartialEq<str> for MimeType {
    fn eq(&self, other: &str) -> bool {
        self.eq_composed(other)
    }
}

impl PartialEq<&str> for MimeType {
    fn eq(&self, other: &&str) -> bool {
        self.eq_composed(other)
    }
}

impl PartialEq<String> for MimeType {
    fn eq(&self, other: &String) -> bool {
        self.eq_composed(other)
    }
}

impl PartialEq<MimeType> for str {
    fn eq(&self, other: &MimeType) -> bool {
        other.eq_composed(self)
    }
}

impl PartialEq<MimeType> for &str {
    fn eq(&self, other: &MimeType) -> bool {
        other.eq_composed(self)
    }
}

impl PartialEq<MimeType> for String {
    fn eq(&self, other: &MimeType) -> bool {
        other.eq_composed(self)
    }
}

impl From<MimeType> for String {
    fn from(mime: MimeType) -> Self {
        mime.mime_type()
    }
}
