//! The identity-keyed annotation store.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use gloss_types::{Annotated, AnnotationError, Record, Subject, assert_object};
use parking_lot::RwLock;
use serde_json::Value;

const SHARD_COUNT: usize = 16;

/// Central record plus the non-owning handle that validates its key.
struct Entry {
    /// Keeps the key's allocation address from being reused without
    /// keeping the object alive; an address hit in the map therefore
    /// always refers to the object that produced the address.
    target: Weak<dyn Annotated>,
    record: Record,
}

impl Entry {
    fn new(object: &Arc<dyn Annotated>) -> Self {
        Self {
            target: Arc::downgrade(object),
            record: Record::new(),
        }
    }

    fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }
}

/// Identity-keyed annotation registry.
///
/// Associates a [`Record`] with any object-like [`Subject`] without
/// modifying the object. Lookups merge the record the object carries
/// itself ([`Annotated::embedded`]) with the record held here; the
/// central record wins on conflicting keys.
///
/// Entries are keyed by `Arc` allocation address, so structurally equal
/// objects behind different `Arc`s never collide, and the registry holds
/// only [`Weak`] handles, so it never keeps an annotated object alive.
/// Entries left behind by dropped objects are swept on the next write to
/// their shard. Writers take one shard's write lock for the whole
/// insert-or-merge, making `set` and `update` atomic per object; readers
/// take only the shard's read lock.
pub struct Registry {
    shards: [RwLock<HashMap<usize, Entry>>; SHARD_COUNT],
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(HashMap::new())),
        }
    }

    /// Returns the merged annotation record for `subject`.
    ///
    /// Merge order: the subject's own embedded record first, overlaid by
    /// the central record, so central keys win on conflict. A subject
    /// with no metadata in either place yields an empty record. The
    /// result is a fresh record on every call; mutating it affects
    /// neither source nor later lookups.
    pub fn get(&self, subject: &Subject) -> Result<Record, AnnotationError> {
        let object = assert_object(subject)?;
        let mut merged = object.embedded().unwrap_or_default();
        let key = identity(object);
        let shard = self.shards[shard_index(key)].read();
        if let Some(entry) = shard.get(&key) {
            merged.merge(entry.record.clone());
        }
        Ok(merged)
    }

    /// Associates `value` with `key` in the central record for `subject`.
    ///
    /// Creates the central entry on first write; the subject's embedded
    /// record is never touched. Returns the subject it was given, so
    /// calls chain.
    pub fn set(
        &self,
        subject: Subject,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Subject, AnnotationError> {
        let object = assert_object(&subject)?;
        let key = key.into();
        tracing::debug!(key = %key, "gloss.registry.set");
        let id = identity(object);
        let mut shard = self.shards[shard_index(id)].write();
        shard.retain(|_, entry| entry.is_live());
        shard
            .entry(id)
            .or_insert_with(|| Entry::new(object))
            .record
            .insert(key, value);
        Ok(subject)
    }

    /// Shallow-merges `patch` into the central record for `subject`.
    ///
    /// Keys present in `patch` overwrite; keys absent are left alone.
    /// Creates the central entry on first write and returns the subject
    /// it was given.
    pub fn update(&self, subject: Subject, patch: Record) -> Result<Subject, AnnotationError> {
        let object = assert_object(&subject)?;
        tracing::debug!(keys = patch.len(), "gloss.registry.update");
        let id = identity(object);
        let mut shard = self.shards[shard_index(id)].write();
        shard.retain(|_, entry| entry.is_live());
        shard
            .entry(id)
            .or_insert_with(|| Entry::new(object))
            .record
            .merge(patch);
        Ok(subject)
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn identity(object: &Arc<dyn Annotated>) -> usize {
    Arc::as_ptr(object) as *const () as usize
}

fn shard_index(key: usize) -> usize {
    // Arc allocations are at least word-aligned; the low bits carry nothing.
    (key >> 3) & (SHARD_COUNT - 1)
}
