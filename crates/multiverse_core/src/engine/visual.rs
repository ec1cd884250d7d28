//! Visual weights derived from blend percentages.
//!
//! These are the numbers the presentation layer applies to map nodes,
//! relationship links and stream panels.

use crate::model::blend::BlendState;

/// Stacking order of the focused stream panel.
pub const ACTIVE_STREAM_Z_INDEX: i32 = 10;
/// Stacking order of every other stream panel.
pub const INACTIVE_STREAM_Z_INDEX: i32 = 5;

/// Link stroke width for a given connection strength: `2 + 3 * strength`.
pub fn link_stroke_width(strength: f64) -> f64 {
    2.0 + strength * 3.0
}

/// Map node / stream opacity: `weight / 100`.
pub fn node_opacity(weight: f64) -> f64 {
    weight / 100.0
}

/// Map node scale: `0.6 + weight / 250`.
pub fn node_scale(weight: f64) -> f64 {
    0.6 + weight / 250.0
}

/// Stream panel scale: `0.8 + weight / 500`.
pub fn stream_scale(weight: f64) -> f64 {
    0.8 + weight / 500.0
}

pub fn stream_z_index(is_active: bool) -> i32 {
    if is_active {
        ACTIVE_STREAM_Z_INDEX
    } else {
        INACTIVE_STREAM_Z_INDEX
    }
}

/// Id of the reality with the strictly greatest weight, scanning `order`.
///
/// Ties resolve to the earliest id in `order`; returns `None` when every
/// weight is zero or `order` is empty.
pub fn dominant_reality<'a>(
    blend: &BlendState,
    order: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for id in order {
        let weight = blend.get(id).unwrap_or(0.0);
        let current = best.map(|(_, value)| value).unwrap_or(0.0);
        if weight > current {
            best = Some((id, weight));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::{
        dominant_reality, link_stroke_width, node_opacity, node_scale, stream_scale,
        stream_z_index,
    };
    use crate::model::blend::BlendState;

    #[test]
    fn visual_weights_at_spotlight_levels() {
        assert_eq!(link_stroke_width(1.0), 5.0);
        assert_eq!(link_stroke_width(0.0), 2.0);
        assert_eq!(node_opacity(30.0), 0.3);
        assert_eq!(node_scale(100.0), 1.0);
        assert_eq!(stream_scale(100.0), 1.0);
        assert_eq!(stream_z_index(true), 10);
        assert_eq!(stream_z_index(false), 5);
    }

    #[test]
    fn dominant_reality_prefers_first_on_tie() {
        let mut blend = BlendState::spotlight(["a", "b", "c"], "b", 100.0, 30.0);
        assert_eq!(dominant_reality(&blend, ["a", "b", "c"]), Some("b"));

        blend.set("c", 100.0);
        assert_eq!(dominant_reality(&blend, ["a", "b", "c"]), Some("b"));
        assert_eq!(dominant_reality(&blend, ["c", "b", "a"]), Some("c"));
    }

    #[test]
    fn dominant_reality_is_none_when_all_zero() {
        let blend = BlendState::spotlight(["a", "b"], "a", 0.0, 0.0);
        assert_eq!(dominant_reality(&blend, ["a", "b"]), None);
    }
}
