//! Bounded, newest-first playbook of scored content snippets, plus the
//! heuristics that turn a playbook snapshot into human-readable insights.

pub mod playbook;
pub mod storage;

pub use playbook::entry::{Entry, EntryDraft, EntryKind};
pub use playbook::insights::derive_insights;
pub use playbook::store::{PlaybookStore, StoreConfig};
pub use storage::{FileSlot, MemorySlot, StorageError, StorageSlot};
