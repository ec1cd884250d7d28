//! Bookmark domain model.
//!
//! # Responsibility
//! - Capture an immutable snapshot of blend weights and focus.
//!
//! # Invariants
//! - `id` is assigned by the store, strictly increasing, never reused.
//! - `blend_snapshot` is an owned deep copy; it never aliases live state.
//! - Fields are private so a bookmark cannot be edited after creation.

use crate::model::blend::BlendState;
use serde::Serialize;

/// Store-assigned bookmark identifier.
pub type BookmarkId = u64;

/// Named snapshot of blend weights and focused index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bookmark {
    id: BookmarkId,
    name: String,
    blend_snapshot: BlendState,
    focused_index: usize,
    /// Unix epoch milliseconds at creation time.
    created_at_ms: i64,
}

impl Bookmark {
    pub fn new(
        id: BookmarkId,
        name: impl Into<String>,
        blend_snapshot: BlendState,
        focused_index: usize,
        created_at_ms: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            blend_snapshot,
            focused_index,
            created_at_ms,
        }
    }

    pub fn id(&self) -> BookmarkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blend_snapshot(&self) -> &BlendState {
        &self.blend_snapshot
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }
}

/// Default display name for the bookmark created when `existing` bookmarks
/// are already stored.
pub fn default_bookmark_name(existing: usize) -> String {
    format!("Configuration {}", existing + 1)
}
