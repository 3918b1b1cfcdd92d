//! In-memory session store for tests and ephemeral sessions.

use crate::{SessionStore, Slot};
use std::collections::HashMap;
use std::sync::Mutex;
use vitrine_error::VitrineResult;

/// Mutex-backed in-memory store.
///
/// Documents live only as long as the store itself; useful for tests and for
/// sessions that deliberately skip durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<Slot, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemoryStore {
    async fn read(&self, slot: Slot) -> VitrineResult<Option<String>> {
        Ok(self.slots.lock().expect("store poisoned").get(&slot).cloned())
    }

    async fn write(&self, slot: Slot, document: &str) -> VitrineResult<()> {
        self.slots
            .lock()
            .expect("store poisoned")
            .insert(slot, document.to_string());
        Ok(())
    }

    async fn clear(&self, slot: Slot) -> VitrineResult<()> {
        self.slots.lock().expect("store poisoned").remove(&slot);
        Ok(())
    }
}
