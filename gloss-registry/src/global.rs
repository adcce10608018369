//! The process-wide registry instance.
//!
//! Documentation tooling rarely threads a registry through every call
//! site; this module holds one instance for the whole process, so
//! independent consumers annotating the same object see each other's
//! writes. Free-function forms of the three operations delegate to it.

use std::sync::LazyLock;

use gloss_types::{AnnotationError, Record, Subject};
use serde_json::Value;

use crate::registry::Registry;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Reads the merged record for `subject` from the process-wide registry.
///
/// See [`Registry::get`].
pub fn get(subject: &Subject) -> Result<Record, AnnotationError> {
    GLOBAL.get(subject)
}

/// Writes one key of the central record for `subject` in the
/// process-wide registry.
///
/// See [`Registry::set`].
pub fn set(
    subject: Subject,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Subject, AnnotationError> {
    GLOBAL.set(subject, key, value)
}

/// Shallow-merges `patch` into the central record for `subject` in the
/// process-wide registry.
///
/// See [`Registry::update`].
pub fn update(subject: Subject, patch: Record) -> Result<Subject, AnnotationError> {
    GLOBAL.update(subject, patch)
}
