//! Precondition checks shared by the registry operations.

use std::sync::Arc;

use crate::error::AnnotationError;
use crate::subject::{Annotated, Subject};

/// Asserts that `subject` is object-like, yielding the underlying object.
///
/// Runs at the top of every public registry operation, before any state
/// is touched; a rejected subject never leaves a partial write behind.
pub fn assert_object(subject: &Subject) -> Result<&Arc<dyn Annotated>, AnnotationError> {
    match subject {
        Subject::Object(object) => Ok(object),
        other => Err(AnnotationError::InvalidArgument { kind: other.kind() }),
    }
}
