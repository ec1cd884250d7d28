//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry and store calls into navigation operations.
//! - Keep UI/FFI layers decoupled from store details.

pub mod coordinator;
