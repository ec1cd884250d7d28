//! Blend weights for the registered realities.
//!
//! # Responsibility
//! - Hold one weight per reality, keyed by reality id.
//! - Normalize every incoming weight into the closed range `[0, 100]`.
//!
//! # Invariants
//! - Every stored weight is finite and within `[MIN_WEIGHT, MAX_WEIGHT]`.
//! - Entries are only created through the full-catalog constructors, so the
//!   key set never changes after construction.

use crate::model::reality::RealityId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Lowest accepted blend weight.
pub const MIN_WEIGHT: f64 = 0.0;
/// Highest accepted blend weight.
pub const MAX_WEIGHT: f64 = 100.0;

/// Clamps a raw weight into `[MIN_WEIGHT, MAX_WEIGHT]`.
///
/// `NaN` maps to `MIN_WEIGHT`.
pub fn clamp_weight(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_WEIGHT;
    }
    value.clamp(MIN_WEIGHT, MAX_WEIGHT)
}

/// Mapping from reality id to blend weight.
///
/// Cloning produces a fully independent copy; bookmark snapshots rely on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BlendState {
    weights: BTreeMap<RealityId, f64>,
}

impl BlendState {
    /// Builds a state where `focused` gets `focused_weight` and every other
    /// id gets `rest_weight`.
    pub fn spotlight<'a>(
        ids: impl IntoIterator<Item = &'a str>,
        focused: &str,
        focused_weight: f64,
        rest_weight: f64,
    ) -> Self {
        let focused_weight = clamp_weight(focused_weight);
        let rest_weight = clamp_weight(rest_weight);
        let weights = ids
            .into_iter()
            .map(|id| {
                let weight = if id == focused {
                    focused_weight
                } else {
                    rest_weight
                };
                (id.to_string(), weight)
            })
            .collect();
        Self { weights }
    }

    /// Returns the weight for `id`, if the id is known.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.weights.get(id).copied()
    }

    /// Overwrites the weight of an existing entry after clamping.
    ///
    /// Returns the applied weight, or `None` when `id` has no entry.
    pub fn set(&mut self, id: &str, value: f64) -> Option<f64> {
        let slot = self.weights.get_mut(id)?;
        *slot = clamp_weight(value);
        Some(*slot)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.weights.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates `(id, weight)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(id, weight)| (id.as_str(), *weight))
    }

    /// Returns an owned id -> weight map for read-model consumers.
    pub fn to_map(&self) -> BTreeMap<RealityId, f64> {
        self.weights.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_weight, BlendState};

    #[test]
    fn clamp_weight_handles_out_of_range_and_nan() {
        assert_eq!(clamp_weight(-5.0), 0.0);
        assert_eq!(clamp_weight(150.0), 100.0);
        assert_eq!(clamp_weight(42.5), 42.5);
        assert_eq!(clamp_weight(f64::NAN), 0.0);
        assert_eq!(clamp_weight(f64::INFINITY), 100.0);
    }

    #[test]
    fn spotlight_assigns_focus_and_rest_weights() {
        let state = BlendState::spotlight(["a", "b", "c"], "b", 100.0, 30.0);
        assert_eq!(state.get("a"), Some(30.0));
        assert_eq!(state.get("b"), Some(100.0));
        assert_eq!(state.get("c"), Some(30.0));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn set_clamps_and_ignores_unknown_ids() {
        let mut state = BlendState::spotlight(["a", "b"], "a", 100.0, 30.0);
        assert_eq!(state.set("b", 250.0), Some(100.0));
        assert_eq!(state.set("missing", 10.0), None);
        assert!(!state.contains("missing"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let original = BlendState::spotlight(["a", "b"], "a", 100.0, 30.0);
        let mut copy = original.clone();
        copy.set("a", 5.0);
        assert_eq!(original.get("a"), Some(100.0));
        assert_eq!(copy.get("a"), Some(5.0));
    }

    #[test]
    fn serializes_as_plain_map() {
        let state = BlendState::spotlight(["a", "b"], "b", 100.0, 30.0);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "a": 30.0, "b": 100.0 }));
    }
}
