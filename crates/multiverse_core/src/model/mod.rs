//! Domain model for the multi-reality navigator.
//!
//! # Responsibility
//! - Define the canonical records shared by stores, engine and coordinator.
//!
//! # Invariants
//! - Realities are immutable once registered.
//! - Blend weights are always clamped into `[0, 100]`.
//! - Bookmarks own deep copies of the state they capture.

pub mod blend;
pub mod bookmark;
pub mod focus;
pub mod reality;
