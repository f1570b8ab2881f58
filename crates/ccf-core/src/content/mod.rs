//! Content entries, payloads, and ordered collections.
//!
//! This module provides the core content-authoring types: the immutable
//! [`Content`] entry, its [`Payload`] sum type, the ordered [`Contents`]
//! collection with MIME-type and locale lookups, and the chaining
//! [`ContentsBuilder`] with its stage markers.
//!
//! # Core Types
//!
//! - [`Content`]: a single (MIME type, payload, optional locale) entry
//! - [`Contents`]: an ordered, queryable, serializable collection
//! - [`ContentsBuilder`]: the chaining builder obtained from
//!   [`Contents::with_mime_type`]
//! - [`Payload`] and [`ContentValue`]: entry data and builder input

mod builder;
mod collection;
mod decode;
mod entry;
mod payload;

// Re-export core types
pub use builder::{Appending, Buildable, ContentsBuilder};
pub use collection::Contents;
pub use entry::Content;
pub use payload::{ContentValue, Payload};
