//! In-process state stores owned by the coordinator.
//!
//! # Responsibility
//! - Hold live blend/focus state and the bookmark collection.
//! - Keep mutation primitives small; orchestration lives in `service`.
//!
//! # Invariants
//! - Stores never hand out mutable references to their contents.
//! - Bookmark snapshots and live blend state never share storage.

pub mod blend_store;
pub mod bookmark_store;
