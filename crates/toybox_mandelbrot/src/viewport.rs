//! Pixel grid over the square `[-2, 2] x [-2, 2]`.

use crate::escape::{SCALE, escape_iterations};
use derive_getters::Getters;
use derive_more::Display;
use std::io::Write;
use tracing::{debug, instrument, trace};

/// Width of the rendered region in real units.
const EXTENT: i64 = 4;

/// Classification of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cell {
    /// The point survived every iteration.
    #[display("8")]
    Interior,
    /// The point escaped before the iteration cap.
    #[display("1")]
    Exterior,
}

/// Square render target with an iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Viewport {
    /// Pixels per side.
    size: usize,
    /// Iteration cap per pixel.
    max_iterations: u32,
}

impl Viewport {
    /// Creates a viewport of `size` by `size` pixels.
    #[instrument]
    pub fn new(size: usize, max_iterations: u32) -> Self {
        Self {
            size,
            max_iterations,
        }
    }

    /// Maps a pixel index along either axis to its scaled coordinate.
    ///
    /// The middle pixel maps to 0 and pixel 0 maps to `-2 * SCALE`.
    pub fn pixel_to_fixed(&self, pixel: usize) -> i64 {
        let size = self.size as i64;
        ((pixel as i64 - size / 2) * EXTENT * SCALE).div_euclid(size)
    }

    /// Classifies the pixel at column `px`, row `py`.
    pub fn cell_at(&self, px: usize, py: usize) -> Cell {
        let x0 = self.pixel_to_fixed(px);
        let y0 = self.pixel_to_fixed(py);
        let iterations = escape_iterations(x0, y0, self.max_iterations);
        trace!(px, py, iterations, "Pixel classified");
        if iterations == self.max_iterations {
            Cell::Interior
        } else {
            Cell::Exterior
        }
    }

    /// Renders one row of the grid.
    pub fn row(&self, py: usize) -> String {
        (0..self.size)
            .map(|px| self.cell_at(px, py).to_string())
            .collect()
    }

    /// Iterates over the rendered rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size).map(|py| self.row(py))
    }

    /// Writes the grid to `out`, one newline-terminated line per row.
    #[instrument(skip(out))]
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (py, line) in self.rows().enumerate() {
            writeln!(out, "{}", line)?;
            debug!(row = py, "Row rendered");
        }
        out.flush()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(200, 100)
    }
}
