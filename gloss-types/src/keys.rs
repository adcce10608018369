//! Conventional record keys.
//!
//! The registry attaches no meaning to any key. These are the names
//! documentation generators and reflection tooling conventionally look
//! for in a record; nothing enforces their presence or their types.

/// Human-readable name of the annotated object.
pub const NAME: &str = "name";

/// Prose documentation, usually Markdown.
pub const DOCUMENTATION: &str = "documentation";

/// Free-form type description.
pub const TYPE: &str = "type";

/// Call signature, for function-like objects.
pub const SIGNATURE: &str = "signature";

/// Stability marker (`experimental`, `stable`, `deprecated`, ...).
pub const STABILITY: &str = "stability";

/// The object this one belongs to, such as the module owning a function.
pub const BELONGS_TO: &str = "belongsTo";

/// Module path of the annotated object.
pub const MODULE: &str = "module";

/// Authors of the annotated object.
pub const AUTHORS: &str = "authors";

/// Licence identifier.
pub const LICENCE: &str = "licence";

/// Platforms the annotated object supports.
pub const PLATFORMS: &str = "platforms";
