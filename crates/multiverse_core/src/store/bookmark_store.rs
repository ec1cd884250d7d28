//! Bookmark store contract and in-memory implementation.
//!
//! # Responsibility
//! - Append bookmarks in creation order and assign their ids.
//! - Resolve, enumerate and remove bookmarks by id.
//!
//! # Invariants
//! - Ids start at 1, strictly increase and are never reused after removal.
//! - Enumeration order equals creation order.
//! - Stored bookmarks are never mutated.

use crate::model::blend::BlendState;
use crate::model::bookmark::{Bookmark, BookmarkId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, BookmarkStoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkStoreError {
    NotFound(BookmarkId),
}

impl Display for BookmarkStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "bookmark not found: {id}"),
        }
    }
}

impl Error for BookmarkStoreError {}

/// Input for creating one bookmark; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkDraft {
    pub name: String,
    pub blend_snapshot: BlendState,
    pub focused_index: usize,
    pub created_at_ms: i64,
}

/// Storage interface for bookmarks.
pub trait BookmarkStore {
    fn append(&mut self, draft: BookmarkDraft) -> BookmarkId;
    fn get(&self, id: BookmarkId) -> StoreResult<Bookmark>;
    fn all(&self) -> Vec<Bookmark>;
    fn remove(&mut self, id: BookmarkId) -> StoreResult<Bookmark>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed bookmark store.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryBookmarkStore {
    bookmarks: Vec<Bookmark>,
    next_id: BookmarkId,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore for InMemoryBookmarkStore {
    fn append(&mut self, draft: BookmarkDraft) -> BookmarkId {
        let id = self.next_id;
        self.next_id += 1;
        self.bookmarks.push(Bookmark::new(
            id,
            draft.name,
            draft.blend_snapshot,
            draft.focused_index,
            draft.created_at_ms,
        ));
        id
    }

    fn get(&self, id: BookmarkId) -> StoreResult<Bookmark> {
        self.bookmarks
            .iter()
            .find(|bookmark| bookmark.id() == id)
            .cloned()
            .ok_or(BookmarkStoreError::NotFound(id))
    }

    fn all(&self) -> Vec<Bookmark> {
        self.bookmarks.clone()
    }

    fn remove(&mut self, id: BookmarkId) -> StoreResult<Bookmark> {
        let position = self
            .bookmarks
            .iter()
            .position(|bookmark| bookmark.id() == id)
            .ok_or(BookmarkStoreError::NotFound(id))?;
        Ok(self.bookmarks.remove(position))
    }

    fn len(&self) -> usize {
        self.bookmarks.len()
    }
}
