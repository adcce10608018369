//! Subject values and the embedded-annotation trait.

use std::fmt;
use std::sync::Arc;

use crate::record::Record;

/// Marker trait for values the registry can annotate.
///
/// Opting in is a one-line `impl Annotated for MyType {}`. A type that
/// ships its own metadata overrides [`embedded`](Self::embedded); that
/// record travels with the object and is merged into every lookup, which
/// covers the cases a central association cannot reach (objects crossing
/// a boundary the registry does not). Because every consumer links the
/// one definition of this trait, all of them agree on where embedded
/// metadata lives.
pub trait Annotated: Send + Sync {
    /// The annotation record the object carries itself, if any.
    fn embedded(&self) -> Option<Record> {
        None
    }
}

/// A dynamic value presented to the registry.
///
/// Only [`Subject::Object`] has reference identity: two clones of one
/// `Arc` are the same subject, while two structurally equal objects
/// behind different `Arc`s are different subjects. The primitive
/// variants exist to be rejected: every registry operation fails with
/// [`InvalidArgument`](crate::AnnotationError::InvalidArgument) when
/// handed one.
#[derive(Clone)]
pub enum Subject {
    /// Absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An object with reference identity.
    Object(Arc<dyn Annotated>),
}

impl Subject {
    /// Wraps `value` in a fresh `Arc` as an object-like subject.
    pub fn object<T: Annotated + 'static>(value: T) -> Self {
        Subject::Object(Arc::new(value))
    }

    /// Kind name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Subject::Null => "null",
            Subject::Bool(_) => "boolean",
            Subject::Int(_) => "integer",
            Subject::Float(_) => "float",
            Subject::Text(_) => "string",
            Subject::Object(_) => "object",
        }
    }

    /// Whether this subject is object-like.
    pub fn is_object(&self) -> bool {
        matches!(self, Subject::Object(_))
    }

    /// Identity comparison: true only when both subjects are the same
    /// object, meaning the same `Arc` allocation. Primitives never
    /// compare equal here, structural equality notwithstanding.
    pub fn same_object(&self, other: &Subject) -> bool {
        match (self, other) {
            (Subject::Object(a), Subject::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Null => f.write_str("Null"),
            Subject::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Subject::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Subject::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Subject::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Subject::Object(object) => f
                .debug_tuple("Object")
                .field(&format_args!("{:p}", Arc::as_ptr(object)))
                .finish(),
        }
    }
}

impl From<bool> for Subject {
    fn from(value: bool) -> Self {
        Subject::Bool(value)
    }
}

impl From<i64> for Subject {
    fn from(value: i64) -> Self {
        Subject::Int(value)
    }
}

impl From<f64> for Subject {
    fn from(value: f64) -> Self {
        Subject::Float(value)
    }
}

impl From<String> for Subject {
    fn from(value: String) -> Self {
        Subject::Text(value)
    }
}

impl From<&str> for Subject {
    fn from(value: &str) -> Self {
        Subject::Text(value.to_owned())
    }
}

impl<T: Annotated + 'static> From<Arc<T>> for Subject {
    fn from(object: Arc<T>) -> Self {
        Subject::Object(object)
    }
}

impl From<Arc<dyn Annotated>> for Subject {
    fn from(object: Arc<dyn Annotated>) -> Self {
        Subject::Object(object)
    }
}
