//! In-process storage for tests and embedding.
//!
//! `MemoryStorage` keeps slots in a shared map. Clones share the same slots,
//! so a store and a runtime can be opened on one storage and a test can
//! inspect what was written.
//!
//! # Example
//!
//! ```rust
//! use form_builder::{MemoryStorage, TemplateStore};
//!
//! let storage = MemoryStorage::new();
//! let mut store = TemplateStore::open(storage.clone());
//! store.create_template("Survey");
//!
//! let blob = storage.get("templates").unwrap();
//! assert!(blob.contains("\"Survey\""));
//!
//! // A second store sees the persisted state.
//! let reopened = TemplateStore::open(storage);
//! assert_eq!(reopened.templates().len(), 1);
//! ```

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{Storage, StorageError};

/// Slots held in memory, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemorySlots>>,
}

#[derive(Debug, Default)]
struct MemorySlots {
    slots: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill a slot.
    pub fn with_slot(self, slot: impl Into<String>, contents: impl Into<String>) -> Self {
        self.inner
            .borrow_mut()
            .slots
            .insert(slot.into(), contents.into());
        self
    }

    /// Get the current contents of a slot.
    pub fn get(&self, slot: &str) -> Option<String> {
        self.inner.borrow().slots.get(slot).cloned()
    }

    /// Make every following write fail, as a full disk or exceeded quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(slot))
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Unavailable(format!(
                "writes to '{slot}' are disabled"
            )));
        }
        inner.slots.insert(slot.to_string(), contents.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_slots() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("templates", "x").unwrap();
        assert_eq!(b.read("templates").unwrap().as_deref(), Some("x"));
        assert_eq!(b.write_count(), 1);
    }

    #[test]
    fn failing_writes_keep_previous_contents() {
        let storage = MemoryStorage::new().with_slot("templates", "old");
        storage.set_fail_writes(true);

        let err = storage.write("templates", "new").unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(storage.get("templates").as_deref(), Some("old"));
        assert_eq!(storage.write_count(), 0);
    }
}
