//! Read-model records handed to presentation collaborators.
//!
//! All records are owned snapshots; mutating them never touches coordinator
//! state.

use crate::model::bookmark::BookmarkId;
use crate::model::reality::RealityId;
use serde::Serialize;

/// Bookmark listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkSummary {
    pub id: BookmarkId,
    pub name: String,
    pub created_at_ms: i64,
    pub focused_index: usize,
    /// Reality with the highest weight in the snapshot, if any is non-zero.
    pub dominant_reality: Option<RealityId>,
}

/// Relationship link between two realities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionEdge {
    pub id_a: RealityId,
    pub id_b: RealityId,
    pub strength: f64,
    pub stroke_width: f64,
}

/// Reality position on the circular map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: RealityId,
    pub x: f64,
    pub y: f64,
}

/// Map node with blend-driven emphasis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealityNode {
    pub id: RealityId,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub is_active: bool,
}

/// Per-stream rendering state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionalState {
    pub reality_id: RealityId,
    pub is_active: bool,
    /// True only for the focused stream while focus is locked.
    pub is_locked: bool,
    pub blend_percentage: f64,
    pub opacity: f64,
    pub scale: f64,
    pub z_index: i32,
}
