//! Error types for the annotation crates.

/// Errors raised by annotation operations.
///
/// Every public registry operation validates its subject before touching
/// any state, so the only failure mode is being handed a value without
/// reference identity.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    /// The subject is a primitive value and cannot carry annotations.
    #[error("invalid argument: expected an object-like value, got {kind}")]
    InvalidArgument {
        /// Kind name of the rejected subject.
        kind: &'static str,
    },
}
