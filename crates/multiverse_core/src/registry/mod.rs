//! Reality catalog.
//!
//! # Responsibility
//! - Own the fixed, ordered list of realities for one coordinator.
//! - Resolve realities by id or index with semantic errors.
//! - Load catalogs from the built-in declaration or JSON configuration.
//!
//! # Invariants
//! - A registry is never empty.
//! - Reality ids are unique; order is stable for the registry lifetime.

pub mod catalog;
pub mod reality_registry;
