//! Server-confirmed collection mirror for one resource kind.
//!
//! DESIGN
//! ======
//! Records enter only through an acknowledged `list` (`replace_all`) or
//! `create` (`apply_created`) and leave only through an acknowledged delete
//! (`apply_deleted`). Creates go to the head so the feed stays newest-first;
//! the initial load keeps whatever order the service returned.
//!
//! Both apply operations are idempotent: a repeated create for an id already
//! present and a delete for an id already gone are no-ops.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::records::{Record, RecordId};

#[derive(Clone, Debug)]
pub struct CollectionStore<R: Record> {
    items: Vec<R>,
    load_error: Option<String>,
}

impl<R: Record> Default for CollectionStore<R> {
    fn default() -> Self {
        Self { items: Vec::new(), load_error: None }
    }
}

impl<R: Record> CollectionStore<R> {
    /// Total replacement with a freshly listed collection.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.items = records;
        self.load_error = None;
    }

    /// Prepend a newly created record. Returns `false` if the id was already present.
    pub fn apply_created(&mut self, record: R) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.items.insert(0, record);
        true
    }

    /// Remove the record with `id`. Returns `false` if it was absent.
    pub fn apply_deleted(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Record that the initial load for this kind failed. Items are left as-is.
    pub fn mark_load_failed(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
