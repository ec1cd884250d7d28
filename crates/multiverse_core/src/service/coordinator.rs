//! Focus-and-blend coordinator.
//!
//! # Responsibility
//! - Expose the navigation operation set (shift, blend, lock, scrub,
//!   bookmark, load, delete) over registry, blend store and bookmark store.
//! - Derive read-model views on demand from current state.
//!
//! # Invariants
//! - Blend state has exactly one clamped entry per registered reality.
//! - `focused_index < registry.len()` after every operation.
//! - While locked, focus only changes through unlock-then-shift.
//! - Failed operations validate before mutating and leave state unchanged.
//! - Derived views are recomputed on every read; nothing is cached.

use crate::config::{ConfigError, CoordinatorConfig};
use crate::engine::layout::{circular_position, connection_strength, index_pairs};
use crate::engine::scrub::{scrub_handle_fraction, scrub_index};
use crate::engine::visual::{
    dominant_reality, link_stroke_width, node_opacity, node_scale, stream_scale, stream_z_index,
};
use crate::model::blend::BlendState;
use crate::model::bookmark::{default_bookmark_name, Bookmark, BookmarkId};
use crate::model::focus::{FocusState, FocusTransition};
use crate::model::reality::Reality;
use crate::registry::reality_registry::{RealityRegistry, RegistryError};
use crate::store::blend_store::BlendStateStore;
use crate::store::bookmark_store::{
    BookmarkDraft, BookmarkStore, BookmarkStoreError, InMemoryBookmarkStore,
};
use crate::view::{BookmarkSummary, ConnectionEdge, DimensionalState, LayoutNode, RealityNode};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Caller errors surfaced by coordinator operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorError {
    /// Unknown reality id.
    RealityNotFound(String),
    /// Unknown bookmark id.
    BookmarkNotFound(BookmarkId),
    /// Focus index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// Stored bookmark does not match the active catalog.
    IncompatibleBookmark(BookmarkId),
    /// Spotlight weights outside `[0, 100]`.
    InvalidConfig(ConfigError),
}

impl CoordinatorError {
    /// Whether this error is a missing reality or bookmark.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RealityNotFound(_) | Self::BookmarkNotFound(_))
    }

    /// Stable machine-readable code for logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RealityNotFound(_) => "reality_not_found",
            Self::BookmarkNotFound(_) => "bookmark_not_found",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::IncompatibleBookmark(_) => "incompatible_bookmark",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}

impl Display for CoordinatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RealityNotFound(id) => write!(f, "reality not found: `{id}`"),
            Self::BookmarkNotFound(id) => write!(f, "bookmark not found: {id}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "reality index {index} out of range (len {len})")
            }
            Self::IncompatibleBookmark(id) => {
                write!(f, "bookmark {id} does not match the active reality catalog")
            }
            Self::InvalidConfig(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CoordinatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for CoordinatorError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::RealityNotFound(id) => Self::RealityNotFound(id),
            RegistryError::IndexOutOfRange { index, len } => Self::IndexOutOfRange { index, len },
        }
    }
}

impl From<BookmarkStoreError> for CoordinatorError {
    fn from(value: BookmarkStoreError) -> Self {
        match value {
            BookmarkStoreError::NotFound(id) => Self::BookmarkNotFound(id),
        }
    }
}

impl From<ConfigError> for CoordinatorError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

/// Owner of all navigation state for one session.
pub struct Coordinator<S: BookmarkStore = InMemoryBookmarkStore> {
    registry: RealityRegistry,
    config: CoordinatorConfig,
    state: BlendStateStore,
    bookmarks: S,
}

impl Coordinator<InMemoryBookmarkStore> {
    /// Creates a coordinator with default spotlight weights and an empty
    /// in-memory bookmark store.
    pub fn new(registry: RealityRegistry) -> Self {
        let config = CoordinatorConfig::default();
        let state = BlendStateStore::new(&registry, &config);
        Self {
            registry,
            config,
            state,
            bookmarks: InMemoryBookmarkStore::new(),
        }
    }

    /// Creates a coordinator with custom spotlight weights.
    pub fn with_config(
        registry: RealityRegistry,
        config: CoordinatorConfig,
    ) -> CoordinatorResult<Self> {
        Self::with_store(registry, config, InMemoryBookmarkStore::new())
    }
}

impl<S: BookmarkStore> Coordinator<S> {
    /// Creates a coordinator over a caller-provided bookmark store.
    ///
    /// # Errors
    /// - `InvalidConfig` when a spotlight weight is outside `[0, 100]`.
    pub fn with_store(
        registry: RealityRegistry,
        config: CoordinatorConfig,
        bookmarks: S,
    ) -> CoordinatorResult<Self> {
        config.validate()?;
        let state = BlendStateStore::new(&registry, &config);
        info!(
            "event=coordinator_init module=coordinator status=ok realities={} bookmarks={}",
            registry.len(),
            bookmarks.len()
        );
        Ok(Self {
            registry,
            config,
            state,
            bookmarks,
        })
    }

    /// Brings the reality at `index` into focus.
    ///
    /// # Contract
    /// - Unlocked: focus moves to `index` and the spotlight reset runs.
    /// - Locked on `index`: focus is unlocked, weights untouched.
    /// - Locked on another index: no-op.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`.
    pub fn shift_focus(&mut self, index: usize) -> CoordinatorResult<FocusTransition> {
        let len = self.registry.len();
        if index >= len {
            warn!(
                "event=shift_focus module=coordinator status=error error_code=index_out_of_range index={} len={}",
                index, len
            );
            return Err(CoordinatorError::IndexOutOfRange { index, len });
        }
        Ok(self.apply_focus_request(index, "shift_focus"))
    }

    /// Maps a scrubber position to an index and applies the same focus
    /// logic as [`Coordinator::shift_focus`].
    pub fn scrub(&mut self, position: f64) -> FocusTransition {
        let index = scrub_index(position, self.registry.len());
        self.apply_focus_request(index, "scrub")
    }

    /// Sets one reality's blend weight, clamped into `[0, 100]`.
    ///
    /// Returns the applied weight. Other weights and focus are untouched.
    ///
    /// # Errors
    /// - `RealityNotFound` for unknown ids.
    pub fn set_blend(&mut self, id: &str, percent: f64) -> CoordinatorResult<f64> {
        match self.state.set_weight(id, percent) {
            Some(applied) => {
                debug!(
                    "event=set_blend module=coordinator status=ok reality={} weight={}",
                    id, applied
                );
                Ok(applied)
            }
            None => {
                warn!(
                    "event=set_blend module=coordinator status=error error_code=reality_not_found"
                );
                Err(CoordinatorError::RealityNotFound(id.to_string()))
            }
        }
    }

    /// Flips the focus lock; returns the new lock value.
    pub fn toggle_lock(&mut self) -> bool {
        let locked = self.state.toggle_lock();
        debug!(
            "event=toggle_lock module=coordinator status=ok locked={} focused_index={}",
            locked,
            self.state.focus().focused_index
        );
        locked
    }

    /// Snapshots current blend weights and focus into a new bookmark.
    ///
    /// A blank or absent `name` is replaced by `Configuration {count + 1}`.
    pub fn bookmark(&mut self, name: Option<&str>) -> BookmarkId {
        let name = match name.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default_bookmark_name(self.bookmarks.len()),
        };
        let id = self.bookmarks.append(BookmarkDraft {
            name,
            blend_snapshot: self.state.blend().clone(),
            focused_index: self.state.focus().focused_index,
            created_at_ms: now_epoch_ms(),
        });
        info!(
            "event=bookmark_create module=coordinator status=ok bookmark_id={} total={}",
            id,
            self.bookmarks.len()
        );
        id
    }

    /// Restores blend weights and focused index from a bookmark; the lock
    /// flag is kept as is.
    ///
    /// # Errors
    /// - `BookmarkNotFound` for unknown ids.
    /// - `IncompatibleBookmark` when the snapshot does not cover exactly the
    ///   registered realities.
    pub fn load_bookmark(&mut self, id: BookmarkId) -> CoordinatorResult<()> {
        let bookmark = self.bookmarks.get(id).map_err(|err| {
            warn!(
                "event=bookmark_load module=coordinator status=error error_code=bookmark_not_found bookmark_id={}",
                id
            );
            CoordinatorError::from(err)
        })?;
        if !self.is_compatible(&bookmark) {
            warn!(
                "event=bookmark_load module=coordinator status=error error_code=incompatible_bookmark bookmark_id={}",
                id
            );
            return Err(CoordinatorError::IncompatibleBookmark(id));
        }

        let focused_index = bookmark.focused_index();
        self.state
            .restore(bookmark.blend_snapshot().clone(), focused_index);
        info!(
            "event=bookmark_load module=coordinator status=ok bookmark_id={} focused_index={}",
            id, focused_index
        );
        Ok(())
    }

    /// Removes a bookmark; remaining bookmarks keep their order.
    ///
    /// # Errors
    /// - `BookmarkNotFound` for unknown ids.
    pub fn delete_bookmark(&mut self, id: BookmarkId) -> CoordinatorResult<()> {
        self.bookmarks.remove(id)?;
        info!(
            "event=bookmark_delete module=coordinator status=ok bookmark_id={} total={}",
            id,
            self.bookmarks.len()
        );
        Ok(())
    }

    pub fn registry(&self) -> &RealityRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Ordered realities.
    pub fn realities(&self) -> &[Reality] {
        self.registry.list()
    }

    /// Owned snapshot of blend weights.
    pub fn blend_state(&self) -> BlendState {
        self.state.blend().clone()
    }

    pub fn focus_state(&self) -> FocusState {
        self.state.focus()
    }

    pub fn focused_reality(&self) -> Option<&Reality> {
        self.registry.by_index(self.state.focus().focused_index).ok()
    }

    /// Full bookmark record by id.
    pub fn get_bookmark(&self, id: BookmarkId) -> CoordinatorResult<Bookmark> {
        Ok(self.bookmarks.get(id)?)
    }

    /// Bookmark summaries in creation order.
    pub fn bookmarks(&self) -> Vec<BookmarkSummary> {
        self.bookmarks
            .all()
            .into_iter()
            .map(|bookmark| BookmarkSummary {
                id: bookmark.id(),
                name: bookmark.name().to_string(),
                created_at_ms: bookmark.created_at_ms(),
                focused_index: bookmark.focused_index(),
                dominant_reality: dominant_reality(bookmark.blend_snapshot(), self.registry.ids())
                    .map(str::to_string),
            })
            .collect()
    }

    /// Link strength between two realities under current weights.
    ///
    /// # Errors
    /// - `RealityNotFound` when either id is unknown.
    pub fn connection_strength(&self, id_a: &str, id_b: &str) -> CoordinatorResult<f64> {
        let weight_a = self.weight_of(id_a)?;
        let weight_b = self.weight_of(id_b)?;
        Ok(connection_strength(weight_a, weight_b))
    }

    /// One edge per unordered reality pair, in registry pair order.
    pub fn connection_graph(&self) -> Vec<ConnectionEdge> {
        let realities = self.registry.list();
        let blend = self.state.blend();
        index_pairs(realities.len())
            .map(|(i, j)| {
                let (a, b) = (&realities[i], &realities[j]);
                let strength = connection_strength(
                    blend.get(&a.id).unwrap_or(0.0),
                    blend.get(&b.id).unwrap_or(0.0),
                );
                ConnectionEdge {
                    id_a: a.id.clone(),
                    id_b: b.id.clone(),
                    strength,
                    stroke_width: link_stroke_width(strength),
                }
            })
            .collect()
    }

    /// Circular positions for every reality.
    pub fn layout(&self, radius: f64, center_x: f64, center_y: f64) -> Vec<LayoutNode> {
        let count = self.registry.len();
        self.registry
            .list()
            .iter()
            .enumerate()
            .map(|(index, reality)| {
                let point = circular_position(index, count, radius, center_x, center_y);
                LayoutNode {
                    id: reality.id.clone(),
                    x: point.x,
                    y: point.y,
                }
            })
            .collect()
    }

    /// Map nodes: layout plus blend-driven emphasis.
    pub fn reality_nodes(&self, radius: f64, center_x: f64, center_y: f64) -> Vec<RealityNode> {
        let focused_index = self.state.focus().focused_index;
        let blend = self.state.blend();
        self.layout(radius, center_x, center_y)
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let weight = blend.get(&node.id).unwrap_or(0.0);
                RealityNode {
                    opacity: node_opacity(weight),
                    scale: node_scale(weight),
                    is_active: index == focused_index,
                    id: node.id,
                    x: node.x,
                    y: node.y,
                }
            })
            .collect()
    }

    /// Per-stream rendering state in registry order.
    pub fn dimensional_states(&self) -> Vec<DimensionalState> {
        let focus = self.state.focus();
        let blend = self.state.blend();
        self.registry
            .list()
            .iter()
            .enumerate()
            .map(|(index, reality)| {
                let is_active = index == focus.focused_index;
                let weight = blend.get(&reality.id).unwrap_or(0.0);
                DimensionalState {
                    reality_id: reality.id.clone(),
                    is_active,
                    is_locked: focus.locked && is_active,
                    blend_percentage: weight,
                    opacity: node_opacity(weight),
                    scale: stream_scale(weight),
                    z_index: stream_z_index(is_active),
                }
            })
            .collect()
    }

    /// Scrubber handle position in `[0, 1]` for the focused reality.
    pub fn scrub_handle_fraction(&self) -> f64 {
        scrub_handle_fraction(self.state.focus().focused_index, self.registry.len())
    }

    fn apply_focus_request(&mut self, index: usize, event: &'static str) -> FocusTransition {
        let transition = self
            .state
            .request_focus(&self.registry, index, &self.config);
        debug!(
            "event={} module=coordinator status=ok index={} transition={} locked={}",
            event,
            index,
            transition.as_str(),
            self.state.focus().locked
        );
        transition
    }

    fn weight_of(&self, id: &str) -> CoordinatorResult<f64> {
        self.state
            .blend()
            .get(id)
            .ok_or_else(|| CoordinatorError::RealityNotFound(id.to_string()))
    }

    fn is_compatible(&self, bookmark: &Bookmark) -> bool {
        let snapshot = bookmark.blend_snapshot();
        bookmark.focused_index() < self.registry.len()
            && snapshot.len() == self.registry.len()
            && self.registry.ids().all(|id| snapshot.contains(id))
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
