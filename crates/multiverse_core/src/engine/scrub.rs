//! Scrubber position mapping.

/// Maps a scrubber position to a reality index.
///
/// Computes `clamp(floor(position * count), 0, count - 1)`. Positions outside
/// `[0, 1]` clamp to the ends and `NaN` behaves as `0`. Returns `0` when
/// `count == 0`.
pub fn scrub_index(position: f64, count: usize) -> usize {
    if count == 0 || position.is_nan() {
        return 0;
    }
    let last = count - 1;
    let position = position.clamp(0.0, 1.0);
    let raw = (position * count as f64).floor();
    // `raw` is within [0, count] after the clamp above.
    (raw as usize).min(last)
}

/// Fraction along the scrubber track where the handle of `focused_index`
/// sits, `focused_index / (count - 1)`; `0` for single-reality catalogs.
pub fn scrub_handle_fraction(focused_index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    focused_index.min(count - 1) as f64 / (count - 1) as f64
}
