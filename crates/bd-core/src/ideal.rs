//! Ideal depletion line.

/// Straight-line depletion from `start` to zero across `len` days.
///
/// `ideal[0] == start` and `ideal[len - 1] == 0.0`. A single-day range has no
/// slope to divide by, so it yields the flat series `[start]`; an empty range
/// yields an empty series. Neither degenerate case is an error.
#[allow(clippy::cast_precision_loss)]
pub fn ideal_line(start: f64, len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![start];
    }

    let delta = start / (len - 1) as f64;
    (0..len).map(|i| start - delta * i as f64).collect()
}
