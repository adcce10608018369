#![deny(missing_docs)]
//! Subject, record, and error types for the gloss annotation registry.
//!
//! gloss attaches descriptive side-channel data (documentation, type
//! signatures, stability markers, authorship) to live objects without
//! modifying the objects themselves. This crate holds the vocabulary both
//! sides of that exchange share:
//!
//! - [`Subject`] — the dynamic value handed to registry operations. Only
//!   object-like subjects (an `Arc` behind [`Subject::Object`]) have the
//!   reference identity annotations key on; primitives are rejected.
//! - [`Record`] — an open-ended map from string keys to JSON values,
//!   built literally with the [`record!`] macro.
//! - [`Annotated`] — the trait an object implements to be annotatable,
//!   and through which it may carry its own embedded record. A single
//!   shared trait definition is what makes independently compiled
//!   consumers agree on where embedded metadata lives.
//! - [`AnnotationError`] — the one failure mode: a subject without
//!   reference identity.
//! - [`keys`] — conventional key names tooling reads from records.

pub mod assert;
pub mod error;
pub mod keys;
pub mod record;
pub mod subject;

pub use assert::*;
pub use error::*;
pub use record::*;
pub use subject::*;
