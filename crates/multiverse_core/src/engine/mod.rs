//! Pure derivations from blend/focus state.
//!
//! # Responsibility
//! - Map continuous scrub input to a discrete focus index.
//! - Derive relationship strength and circular layout for the reality map.
//! - Derive per-stream visual weights consumed by the presentation layer.
//!
//! # Invariants
//! - No function here owns or caches state.
//! - Every function is deterministic for the same inputs.

pub mod layout;
pub mod scrub;
pub mod visual;
