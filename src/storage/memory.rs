use super::{StorageError, StorageSlot};
use parking_lot::RwLock;

/// In-memory storage slot for tests, benches, and hosts without durable
/// storage. Never fails.
#[derive(Default)]
pub struct MemorySlot {
    payload: RwLock<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.read().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        *self.payload.write() = Some(payload.to_string());
        Ok(())
    }
}
