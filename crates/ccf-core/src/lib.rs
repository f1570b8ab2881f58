#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # CCF Core
//!
//! This crate provides the foundational value types for the common content
//! format: MIME-type identities with parameterized variants, immutable
//! content entries with locale-aware matching, and ordered collections with
//! a chaining builder and a language-neutral map/JSON projection.

/// Tracing target for content authoring operations.
pub const TRACING_TARGET_CONTENT: &str = "ccf_core::content";

mod error;

pub mod content;
pub mod mime;
pub mod prelude;

// Re-export key types for convenience
pub use content::{Appending, Buildable, Content, ContentValue, Contents, ContentsBuilder, Payload};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use mime::MimeType;
pub use unic_langid;
