//! Flutter-facing bindings for the multi-reality navigator core.

pub mod api;
