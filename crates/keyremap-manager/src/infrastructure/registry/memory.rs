//! In-memory store for unit testing and dry runs.
//!
//! Clones share the same underlying value, so a test can hand one clone to a
//! session and inspect the other afterwards.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use super::{ScancodeMapStore, StoreError};

/// A [`ScancodeMapStore`] that keeps the blob in memory.
#[derive(Clone, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<Option<Vec<u8>>>>,
    deny_writes: Arc<AtomicBool>,
    unreadable: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Creates a store with no value, like a machine that was never remapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `blob`.
    pub fn with_blob(blob: Vec<u8>) -> Self {
        let store = Self::new();
        *store.value.lock().expect("lock poisoned") = Some(blob);
        store
    }

    /// Returns a copy of the stored value.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.value.lock().expect("lock poisoned").clone()
    }

    /// Makes subsequent writes and deletes fail with `PermissionDenied`,
    /// the way a non-elevated process fails against HKLM.
    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.store(deny, Ordering::SeqCst);
    }

    /// Makes subsequent reads fail with `WrongValueType`, the way a
    /// `Scancode Map` value of the wrong registry type fails to load.
    pub fn make_unreadable(&self, unreadable: bool) {
        self.unreadable.store(unreadable, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.deny_writes.load(Ordering::SeqCst) {
            return Err(StoreError::PermissionDenied {
                location: self.location(),
            });
        }
        Ok(())
    }
}

impl ScancodeMapStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        if self.unreadable.load(Ordering::SeqCst) {
            return Err(StoreError::WrongValueType {
                location: self.location(),
                found: "REG_SZ".to_string(),
            });
        }
        Ok(self.snapshot())
    }

    fn write(&self, blob: &[u8]) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.value.lock().expect("lock poisoned") = Some(blob.to_vec());
        Ok(())
    }

    fn delete(&self) -> Result<bool, StoreError> {
        self.check_writable()?;
        Ok(self.value.lock().expect("lock poisoned").take().is_some())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
