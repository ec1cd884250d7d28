//! Live blend weights plus focus/lock flags.
//!
//! # Invariants
//! - `blend` holds exactly the registry's ids for the store lifetime.
//! - `focus.focused_index` stays below the registry length the store was
//!   created with; the coordinator bound-checks every index it passes in.

use crate::config::CoordinatorConfig;
use crate::model::blend::BlendState;
use crate::model::focus::{FocusState, FocusTransition};
use crate::registry::reality_registry::RealityRegistry;

#[derive(Debug, Clone, PartialEq)]
pub struct BlendStateStore {
    blend: BlendState,
    focus: FocusState,
}

impl BlendStateStore {
    /// Initial state: unlocked, focus on index 0, spotlight weights applied.
    pub fn new(registry: &RealityRegistry, config: &CoordinatorConfig) -> Self {
        let focus = FocusState::default();
        let blend = spotlight_for(registry, focus.focused_index, config);
        Self { blend, focus }
    }

    pub fn blend(&self) -> &BlendState {
        &self.blend
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// Runs one focus request; applies the spotlight reset only when focus
    /// actually shifted.
    pub fn request_focus(
        &mut self,
        registry: &RealityRegistry,
        index: usize,
        config: &CoordinatorConfig,
    ) -> FocusTransition {
        let transition = self.focus.request(index);
        if transition == FocusTransition::Shifted {
            self.blend = spotlight_for(registry, index, config);
        }
        transition
    }

    /// Sets one weight (clamped). Returns `None` for unknown ids.
    pub fn set_weight(&mut self, id: &str, percent: f64) -> Option<f64> {
        self.blend.set(id, percent)
    }

    pub fn toggle_lock(&mut self) -> bool {
        self.focus.toggle_lock()
    }

    /// Replaces blend weights and focused index; keeps the lock flag.
    pub fn restore(&mut self, blend: BlendState, focused_index: usize) {
        self.blend = blend;
        self.focus.focused_index = focused_index;
    }
}

fn spotlight_for(
    registry: &RealityRegistry,
    index: usize,
    config: &CoordinatorConfig,
) -> BlendState {
    let focused_id = registry
        .by_index(index)
        .map(|reality| reality.id.as_str())
        .unwrap_or_default();
    BlendState::spotlight(
        registry.ids(),
        focused_id,
        config.focused_weight,
        config.unfocused_rest_weight,
    )
}
