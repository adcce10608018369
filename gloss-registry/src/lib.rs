#![deny(missing_docs)]
//! Identity-keyed annotation registry.
//!
//! Associates open-ended [`Record`](gloss_types::Record)s with live
//! objects without touching the objects themselves. A lookup merges two
//! sources: the record an object carries on its own (through
//! [`Annotated::embedded`](gloss_types::Annotated::embedded)) and the
//! record held centrally here, with central keys winning on conflict.
//! Writing through the registry never modifies the object or its
//! embedded record.
//!
//! The registry holds only weak handles, so annotating an object never
//! extends its lifetime. Use an owned [`Registry`] when the scope of the
//! association should be explicit, or the [`global`] module when every
//! consumer in the process should see the same annotations.
//!
//! ```
//! use gloss_registry::Registry;
//! use gloss_types::{Annotated, Subject, record};
//!
//! struct Parser;
//! impl Annotated for Parser {}
//!
//! let registry = Registry::new();
//! let parser = Subject::object(Parser);
//! let parser = registry.set(parser, "name", "parser")?;
//! let parser = registry.update(parser, record! { "stability" => "stable" })?;
//!
//! let record = registry.get(&parser)?;
//! assert_eq!(record.get("name"), Some(&"parser".into()));
//! assert_eq!(record.get("stability"), Some(&"stable".into()));
//! # Ok::<(), gloss_types::AnnotationError>(())
//! ```

pub mod global;
pub mod registry;

pub use registry::*;
