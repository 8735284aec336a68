use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of saved content snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Hook,
    Script,
    Hashtag,
}

/// A single scored content snippet saved to the playbook.
///
/// JSON field names match the persisted slot format (`type`, `whyItWorks`,
/// `createdAt`); `created_at` serializes as an RFC 3339 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: String,
    /// Expected range 0-100, but nothing downstream may assume that.
    pub score: f64,
    #[serde(rename = "whyItWorks")]
    pub why_it_works: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new entry; the store assigns `id` and
/// `created_at` on append.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub content: String,
    pub score: f64,
    pub why_it_works: String,
}

impl EntryDraft {
    pub fn new(
        kind: EntryKind,
        content: impl Into<String>,
        score: f64,
        why_it_works: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            content: content.into(),
            score,
            why_it_works: why_it_works.into(),
        }
    }
}

impl Entry {
    /// Materializes a draft into a stored entry with a fresh random id and
    /// the current wall-clock timestamp.
    pub(crate) fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            content: draft.content,
            score: draft.score,
            why_it_works: draft.why_it_works,
            created_at: Utc::now(),
        }
    }
}
