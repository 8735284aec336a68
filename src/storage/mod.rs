//! Pluggable storage slots backing the playbook.
//!
//! A slot is a single named location holding one raw string payload. The
//! store layers its JSON format and fail-open policy on top; backends just
//! move bytes and report honest errors.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A single shared storage slot.
///
/// `read` returns `None` when the slot has never been written; `write`
/// replaces the whole payload. Implementations take `&self` so one slot
/// can be shared across threads behind the store's own lock.
pub trait StorageSlot {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}
