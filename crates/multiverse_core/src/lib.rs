//! Core navigation logic for the multi-reality navigator.
//! This crate is the single source of truth for focus/blend invariants.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, CoordinatorConfig};
pub use engine::layout::{circular_layout, connection_strength, Point};
pub use engine::scrub::scrub_index;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::blend::{clamp_weight, BlendState};
pub use model::bookmark::{Bookmark, BookmarkId};
pub use model::focus::{FocusState, FocusTransition};
pub use model::reality::{Reality, RealityId, RealityValidationError};
pub use registry::catalog::{load_catalog_file, load_catalog_str, CatalogError, LoadedCatalog};
pub use registry::reality_registry::{RealityRegistry, RegistryError};
pub use service::coordinator::{Coordinator, CoordinatorError, CoordinatorResult};
pub use store::bookmark_store::{BookmarkStore, BookmarkStoreError, InMemoryBookmarkStore};
pub use view::{BookmarkSummary, ConnectionEdge, DimensionalState, LayoutNode, RealityNode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
