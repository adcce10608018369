//! Example: annotate a live object and read back the merged record.
//!
//! Run with: `cargo run --example describe -p gloss-registry`

use std::sync::Arc;

use gloss_registry::global;
use gloss_types::{Annotated, AnnotationError, Record, Subject, keys, record};

/// A library component that ships its own embedded description.
struct Tokenizer;

impl Annotated for Tokenizer {
    fn embedded(&self) -> Option<Record> {
        Some(record! {
            keys::NAME => "tokenizer",
            keys::STABILITY => "experimental",
        })
    }
}

fn main() -> Result<(), AnnotationError> {
    let tokenizer: Arc<Tokenizer> = Arc::new(Tokenizer);

    // Documentation attached after the fact, without touching the object.
    // The central record wins on the conflicting stability key.
    let subject = global::set(
        Subject::from(Arc::clone(&tokenizer)),
        keys::DOCUMENTATION,
        "Splits source text into tokens.",
    )?;
    let subject = global::update(subject, record! { keys::STABILITY => "stable" })?;

    let merged = global::get(&subject)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&merged).expect("records are plain JSON")
    );
    Ok(())
}
