//! FFI navigation API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the coordinator operation set and read model to Dart via FRB.
//! - Serialize every call through one process-wide exclusive lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call holds the coordinator lock for its whole duration.
//! - Mutations report failures in `NavActionResponse`, never by panicking.

use log::{error, info};
use multiverse_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_catalog_file,
    ping as ping_inner, BookmarkSummary, ConnectionEdge, Coordinator, CoordinatorError,
    CoordinatorResult, LayoutNode, RealityRegistry,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

const CATALOG_PATH_ENV: &str = "MULTIVERSE_CATALOG_PATH";
static COORDINATOR: OnceLock<Mutex<Coordinator>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Display identity of one reality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavReality {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub display_font: String,
}

/// One blend entry, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBlendEntry {
    pub reality_id: String,
    pub percent: f64,
}

/// Bookmark listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBookmark {
    pub id: u64,
    pub name: String,
    pub created_at_ms: i64,
    pub dominant_reality: Option<String>,
}

/// Full read snapshot taken under one lock acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSnapshot {
    pub blend: Vec<NavBlendEntry>,
    pub focused_index: u32,
    pub locked: bool,
    pub scrub_handle_fraction: f64,
    pub bookmarks: Vec<NavBookmark>,
}

/// Relationship link between two realities.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConnection {
    pub id_a: String,
    pub id_b: String,
    pub strength: f64,
    pub stroke_width: f64,
}

/// Circular map position of one reality.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Generic action response envelope for navigation mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Stable error code on failure (`reality_not_found`, ...).
    pub error_code: Option<String>,
    /// Created bookmark id for `nav_bookmark`.
    pub bookmark_id: Option<u64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NavActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            error_code: None,
            bookmark_id: None,
            message: message.into(),
        }
    }

    fn failure(operation: &str, err: &CoordinatorError) -> Self {
        Self {
            ok: false,
            error_code: Some(err.code().to_string()),
            bookmark_id: None,
            message: format!("{operation} failed: {err}"),
        }
    }

    fn from_result(operation: &str, result: CoordinatorResult<String>) -> Self {
        match result {
            Ok(message) => Self::success(message),
            Err(err) => Self::failure(operation, &err),
        }
    }
}

/// Ordered realities of the active catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_realities() -> Vec<NavReality> {
    with_coordinator(|coordinator| {
        coordinator
            .realities()
            .iter()
            .map(|reality| NavReality {
                id: reality.id.clone(),
                name: reality.name.clone(),
                primary_color: reality.primary_color.clone(),
                secondary_color: reality.secondary_color.clone(),
                display_font: reality.display_font.clone(),
            })
            .collect()
    })
}

/// Blend, focus, lock and bookmark state in one consistent snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_snapshot() -> NavSnapshot {
    with_coordinator(|coordinator| {
        let blend_state = coordinator.blend_state();
        let focus = coordinator.focus_state();
        NavSnapshot {
            blend: coordinator
                .registry()
                .ids()
                .map(|id| NavBlendEntry {
                    reality_id: id.to_string(),
                    percent: blend_state.get(id).unwrap_or(0.0),
                })
                .collect(),
            focused_index: to_u32(focus.focused_index),
            locked: focus.locked,
            scrub_handle_fraction: coordinator.scrub_handle_fraction(),
            bookmarks: coordinator
                .bookmarks()
                .into_iter()
                .map(to_nav_bookmark)
                .collect(),
        }
    })
}

/// Brings one reality into focus (lock semantics apply).
#[flutter_rust_bridge::frb(sync)]
pub fn nav_shift_focus(index: u32) -> NavActionResponse {
    let result = with_coordinator(|coordinator| {
        coordinator
            .shift_focus(index as usize)
            .map(|transition| format!("Focus {}.", transition.as_str()))
    });
    NavActionResponse::from_result("nav_shift_focus", result)
}

/// Sets one reality's blend weight; out-of-range percents are clamped.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_set_blend(reality_id: String, percent: f64) -> NavActionResponse {
    let result = with_coordinator(|coordinator| {
        coordinator
            .set_blend(reality_id.trim(), percent)
            .map(|applied| format!("Blend set to {applied}."))
    });
    NavActionResponse::from_result("nav_set_blend", result)
}

/// Flips the focus lock.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_toggle_lock() -> NavActionResponse {
    let locked = with_coordinator(|coordinator| coordinator.toggle_lock());
    NavActionResponse::success(if locked {
        "Focus locked."
    } else {
        "Focus unlocked."
    })
}

/// Focuses the reality under a scrubber position in `[0, 1]`.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_scrub(position: f64) -> NavActionResponse {
    let transition = with_coordinator(|coordinator| coordinator.scrub(position));
    NavActionResponse::success(format!("Focus {}.", transition.as_str()))
}

/// Bookmarks current blend/focus state; blank names are auto-generated.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_bookmark(name: Option<String>) -> NavActionResponse {
    let id = with_coordinator(|coordinator| coordinator.bookmark(name.as_deref()));
    NavActionResponse {
        bookmark_id: Some(id),
        ..NavActionResponse::success("Configuration saved.")
    }
}

/// Restores a bookmarked configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_load_bookmark(bookmark_id: u64) -> NavActionResponse {
    let result = with_coordinator(|coordinator| {
        coordinator
            .load_bookmark(bookmark_id)
            .map(|()| "Configuration loaded.".to_string())
    });
    NavActionResponse::from_result("nav_load_bookmark", result)
}

/// Deletes a bookmarked configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_delete_bookmark(bookmark_id: u64) -> NavActionResponse {
    let result = with_coordinator(|coordinator| {
        coordinator
            .delete_bookmark(bookmark_id)
            .map(|()| "Configuration deleted.".to_string())
    });
    NavActionResponse::from_result("nav_delete_bookmark", result)
}

/// Relationship links for every unordered reality pair.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_connection_graph() -> Vec<NavConnection> {
    with_coordinator(|coordinator| {
        coordinator
            .connection_graph()
            .into_iter()
            .map(to_nav_connection)
            .collect()
    })
}

/// Circular layout positions for the reality map.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_layout(radius: f64, center_x: f64, center_y: f64) -> Vec<NavLayoutNode> {
    with_coordinator(|coordinator| {
        coordinator
            .layout(radius, center_x, center_y)
            .into_iter()
            .map(to_nav_layout_node)
            .collect()
    })
}

fn with_coordinator<T>(f: impl FnOnce(&mut Coordinator) -> T) -> T {
    let mut guard = lock_coordinator();
    f(&mut guard)
}

fn lock_coordinator() -> MutexGuard<'static, Coordinator> {
    let cell = COORDINATOR.get_or_init(|| Mutex::new(build_coordinator()));
    // Operations never leave partial mutations behind; poisoned guards are reused.
    cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_coordinator() -> Coordinator {
    let path = match std::env::var(CATALOG_PATH_ENV) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => {
            info!("event=coordinator_bootstrap module=ffi status=ok catalog=builtin");
            return Coordinator::new(RealityRegistry::builtin());
        }
    };

    match load_catalog_file(&path)
        .map_err(|err| err.to_string())
        .and_then(|loaded| {
            Coordinator::with_config(loaded.registry, loaded.config).map_err(|err| err.to_string())
        }) {
        Ok(coordinator) => {
            info!("event=coordinator_bootstrap module=ffi status=ok catalog=file");
            coordinator
        }
        Err(err) => {
            error!(
                "event=coordinator_bootstrap module=ffi status=error fallback=builtin error={}",
                err
            );
            Coordinator::new(RealityRegistry::builtin())
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_nav_bookmark(summary: BookmarkSummary) -> NavBookmark {
    NavBookmark {
        id: summary.id,
        name: summary.name,
        created_at_ms: summary.created_at_ms,
        dominant_reality: summary.dominant_reality,
    }
}

fn to_nav_connection(edge: ConnectionEdge) -> NavConnection {
    NavConnection {
        id_a: edge.id_a,
        id_b: edge.id_b,
        strength: edge.strength,
        stroke_width: edge.stroke_width,
    }
}

fn to_nav_layout_node(node: LayoutNode) -> NavLayoutNode {
    NavLayoutNode {
        id: node.id,
        x: node.x,
        y: node.y,
    }
}
