//! Escape-time Mandelbrot rendering in fixed-point integer arithmetic.
//!
//! Coordinates are real values scaled by [`SCALE`] and truncated to
//! integers. Every division floors, so precision loss accumulates the same
//! way at each iteration step.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod escape;
mod viewport;

pub use escape::{ESCAPE_RADIUS_SQUARED, SCALE, escape_iterations};
pub use viewport::{Cell, Viewport};
