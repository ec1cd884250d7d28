//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `multiverse_core` linkage.
//! - Print a deterministic navigation walkthrough as JSON lines.

use multiverse_core::{Coordinator, RealityRegistry};
use serde_json::json;

fn main() {
    println!("multiverse_core ping={}", multiverse_core::ping());
    println!("multiverse_core version={}", multiverse_core::core_version());

    let mut coordinator = Coordinator::new(RealityRegistry::builtin());
    print_step("initial", &coordinator);

    coordinator.scrub(0.6);
    print_step("scrub 0.6", &coordinator);

    if let Err(err) = coordinator.set_blend("technical", 75.0) {
        eprintln!("set_blend failed: {err}");
        std::process::exit(1);
    }
    let bookmark_id = coordinator.bookmark(None);
    coordinator.toggle_lock();
    coordinator.scrub(0.0);
    print_step("locked, scrub 0.0 ignored", &coordinator);

    if let Err(err) = coordinator.load_bookmark(bookmark_id) {
        eprintln!("load_bookmark failed: {err}");
        std::process::exit(1);
    }
    print_step("bookmark loaded", &coordinator);
}

fn print_step(label: &str, coordinator: &Coordinator) {
    let line = json!({
        "step": label,
        "focus": coordinator.focus_state(),
        "blend": coordinator.blend_state(),
        "connections": coordinator.connection_graph(),
        "bookmarks": coordinator.bookmarks(),
    });
    println!("{line}");
}
