use super::entry::{Entry, EntryDraft, EntryKind};
use super::insights::derive_insights;
use crate::storage::StorageSlot;
use parking_lot::Mutex;
use tracing::warn;

/// Configuration for the playbook store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Hard cap on stored entries; the oldest entry past the cap is evicted.
    pub max_entries: usize,
    /// Default minimum score for `winning_hooks`.
    pub hook_threshold: f64,
    /// Default minimum score for `winning_scripts`.
    pub script_threshold: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            hook_threshold: 90.0,
            script_threshold: 80.0,
        }
    }
}

/// Bounded, newest-first store of playbook entries over an injected
/// storage slot.
///
/// The store is fail-open end to end: a missing, unreadable, or corrupt
/// slot reads as an empty playbook, and persist failures are logged and
/// swallowed. The playbook is a convenience cache, not a system of record,
/// so nothing here may ever block the host application.
///
/// Every read re-reads the slot, so external mutation of the backing slot
/// between calls is visible immediately.
pub struct PlaybookStore<S: StorageSlot> {
    slot: S,
    config: StoreConfig,
    // Serializes the load+persist read-modify-write so concurrent appends
    // cannot lose entries or overshoot the cap.
    write_lock: Mutex<()>,
}

impl<S: StorageSlot> PlaybookStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_config(slot, StoreConfig::default())
    }

    pub fn with_config(slot: S, config: StoreConfig) -> Self {
        Self {
            slot,
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the current snapshot, newest first.
    ///
    /// Never fails: a read error, missing payload, or payload that is not
    /// a JSON array of entries all degrade to an empty snapshot.
    pub fn load(&self) -> Vec<Entry> {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("playbook slot read failed, treating as empty: {e}");
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&payload) {
            Ok(values) => values,
            Err(e) => {
                warn!("playbook payload corrupt, treating as empty: {e}");
                return Vec::new();
            }
        };

        // Decode per element so one foreign or mangled entry cannot take
        // the healthy ones down with it.
        values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Entry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("skipping unreadable playbook entry: {e}");
                    None
                }
            })
            .collect()
    }

    /// Saves a new entry at the head of the playbook, evicting the oldest
    /// entry once the cap is reached. Best effort: persist failures are
    /// logged and swallowed.
    pub fn append(&self, draft: EntryDraft) {
        let _guard = self.write_lock.lock();

        let mut entries = self.load();
        entries.insert(0, Entry::from_draft(draft));
        entries.truncate(self.config.max_entries);
        self.persist(&entries);
    }

    /// Entries of the given kind scoring at or above `min_score`, in
    /// stored (newest-first) order.
    pub fn filter_by_kind_and_score(&self, kind: EntryKind, min_score: f64) -> Vec<Entry> {
        self.load()
            .into_iter()
            .filter(|e| e.kind == kind && e.score >= min_score)
            .collect()
    }

    /// High-scoring hooks; `None` uses the configured default threshold.
    pub fn winning_hooks(&self, min_score: Option<f64>) -> Vec<Entry> {
        let threshold = min_score.unwrap_or(self.config.hook_threshold);
        self.filter_by_kind_and_score(EntryKind::Hook, threshold)
    }

    /// High-scoring scripts; `None` uses the configured default threshold.
    pub fn winning_scripts(&self, min_score: Option<f64>) -> Vec<Entry> {
        let threshold = min_score.unwrap_or(self.config.script_threshold);
        self.filter_by_kind_and_score(EntryKind::Script, threshold)
    }

    /// Recomputes insights from the current snapshot.
    pub fn insights(&self) -> Vec<String> {
        derive_insights(&self.load())
    }

    /// Resets the playbook to an empty collection. Best effort, like
    /// `append`.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock();
        self.persist(&[]);
    }

    /// Returns statistics about the current snapshot.
    pub fn stats(&self) -> PlaybookStats {
        let entries = self.load();

        let avg_score = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.score).sum::<f64>() / entries.len() as f64
        };

        PlaybookStats {
            total_entries: entries.len(),
            hooks: entries.iter().filter(|e| e.kind == EntryKind::Hook).count(),
            scripts: entries.iter().filter(|e| e.kind == EntryKind::Script).count(),
            hashtags: entries.iter().filter(|e| e.kind == EntryKind::Hashtag).count(),
            avg_score,
        }
    }

    fn persist(&self, entries: &[Entry]) {
        match serde_json::to_string(entries) {
            Ok(payload) => {
                if let Err(e) = self.slot.write(&payload) {
                    warn!("playbook slot write failed, change not persisted: {e}");
                }
            }
            Err(e) => warn!("playbook serialization failed, change not persisted: {e}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaybookStats {
    pub total_entries: usize,
    pub hooks: usize,
    pub scripts: usize,
    pub hashtags: usize,
    pub avg_score: f64,
}
