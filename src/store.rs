//! In-memory record collections
//!
//! Both resource types share one storage shape: a `DashMap` keyed by record
//! id. Every entry remembers the order it was inserted in so that listings
//! come back in creation order even though the map itself is unordered.

use crate::error::ApiError;
use dashmap::DashMap;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A record type that can live in a [`Collection`].
pub trait Resource: Clone + Send + Sync + 'static {
    /// Client-supplied fields, i.e. the record minus its id
    type Fields;

    /// Singular name used in error messages and logs
    const KIND: &'static str;

    /// Builds a full record from an id and its fields.
    fn assemble(id: String, fields: Self::Fields) -> Self;

    fn id(&self) -> &str;
}

/// Generates a fresh record identifier.
///
/// Identifiers are UUIDv4 values in their 32 character hex form.
fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

struct Entry<R> {
    seq: u64,
    record: R,
}

/// A full-replacement body for PUT requests.
///
/// The `id` is optional; when sent it must agree with the id in the path.
#[derive(Debug, Deserialize)]
pub struct Replacement<F> {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: F,
}

impl<F> Replacement<F> {
    /// Returns the fields once the body id (if any) is checked against `path_id`.
    pub fn into_fields(self, path_id: &str) -> Result<F, ApiError> {
        match self.id {
            Some(body_id) if body_id != path_id => Err(ApiError::IdMismatch {
                path: path_id.to_string(),
                body: body_id,
            }),
            _ => Ok(self.fields),
        }
    }
}

/// Unordered bag of records of one type, listed in insertion order.
pub struct Collection<R: Resource> {
    records: DashMap<String, Entry<R>>,
    next_seq: AtomicU64,
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Collection<R> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Returns every record, oldest first. An empty collection yields an empty vec.
    pub fn list(&self) -> Vec<R> {
        let mut entries: Vec<(u64, R)> = self
            .records
            .iter()
            .map(|entry| (entry.value().seq, entry.value().record.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    pub fn get(&self, id: &str) -> Result<R, ApiError> {
        self.records
            .get(id)
            .map(|entry| entry.value().record.clone())
            .ok_or_else(|| ApiError::not_found(R::KIND, id))
    }

    /// Stores a new record under a freshly generated id and returns it.
    pub fn create(&self, fields: R::Fields) -> R {
        let record = R::assemble(new_record_id(), fields);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.records.insert(
            record.id().to_string(),
            Entry {
                seq,
                record: record.clone(),
            },
        );
        tracing::debug!("created {} {}", R::KIND, record.id());

        record
    }

    /// Replaces the record stored under `id`, keeping its position in listings.
    pub fn update(&self, id: &str, fields: R::Fields) -> Result<R, ApiError> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| ApiError::not_found(R::KIND, id))?;

        entry.record = R::assemble(id.to_string(), fields);
        tracing::debug!("updated {} {}", R::KIND, id);

        Ok(entry.record.clone())
    }

    /// Removes the record stored under `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.records.remove(id).is_some();
        tracing::debug!("delete {} {} (existed: {})", R::KIND, id, removed);
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
