//! Per-point escape iteration.

use tracing::instrument;

/// Fixed-point scale factor: 1.0 is represented as `SCALE`.
pub const SCALE: i64 = 10_000;

/// Squared escape radius (2.0 squared) in doubly-scaled units.
pub const ESCAPE_RADIUS_SQUARED: i64 = 4 * SCALE * SCALE;

/// Iterates `z -> z^2 + c` from `z = c = (x0, y0)` and returns the number of
/// steps taken before `|z|^2` exceeded the escape radius.
///
/// Returns `max_iterations` for points that never escape. The magnitude test
/// runs before each step, so a point already outside the radius returns 0.
#[instrument(level = "trace")]
pub fn escape_iterations(x0: i64, y0: i64, max_iterations: u32) -> u32 {
    let (mut x, mut y) = (x0, y0);
    let mut iterations = 0;

    while x * x + y * y <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        let next_x = (x * x - y * y).div_euclid(SCALE) + x0;
        y = (2 * x * y).div_euclid(SCALE) + y0;
        x = next_x;
        iterations += 1;
    }

    iterations
}
