//! Convenient re-exports for common use.

pub use crate::content::{Content, ContentValue, Contents, ContentsBuilder, Payload};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::mime::MimeType;
pub use unic_langid::LanguageIdentifier;
