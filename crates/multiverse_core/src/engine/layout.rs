//! Relationship strength and circular layout for the reality map.

use serde::Serialize;
use std::f64::consts::TAU;

/// 2-D point in presentation coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Strength of the link between two realities with the given weights:
/// `min(a, b) / 100`, clamped into `[0, 1]`.
pub fn connection_strength(weight_a: f64, weight_b: f64) -> f64 {
    let strength = weight_a.min(weight_b) / 100.0;
    if strength.is_nan() {
        return 0.0;
    }
    strength.clamp(0.0, 1.0)
}

/// Position of `index` on a circle of `count` evenly spaced slots, starting
/// at angle 0 and advancing by `2π / count`.
pub fn circular_position(
    index: usize,
    count: usize,
    radius: f64,
    center_x: f64,
    center_y: f64,
) -> Point {
    if count == 0 {
        return Point {
            x: center_x,
            y: center_y,
        };
    }
    let angle = TAU * index as f64 / count as f64;
    Point {
        x: center_x + radius * angle.cos(),
        y: center_y + radius * angle.sin(),
    }
}

/// Positions for every index in `[0, count)`.
pub fn circular_layout(count: usize, radius: f64, center_x: f64, center_y: f64) -> Vec<Point> {
    (0..count)
        .map(|index| circular_position(index, count, radius, center_x, center_y))
        .collect()
}

/// Unordered index pairs `(i, j)` with `i < j`, in row-major order.
pub fn index_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| (i, j)))
}
