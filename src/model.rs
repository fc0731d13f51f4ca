use serde::{Deserialize, Serialize};

use crate::config::STREAM_COUNT;

// ────────────────────────────────────────────────────────────────────────────
// Point
// ────────────────────────────────────────────────────────────────────────────

/// Integer screen-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same point shifted by `(dx, dy)` pixels, clamped to the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Relation
// ────────────────────────────────────────────────────────────────────────────

/// An ordered value pair plotted in one quadrant.
///
/// Quadrant `q` pairs stream `q` (`a`) with stream `(q + 1) % 4` (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub a: f64,
    pub b: f64,
}

impl Relation {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// QuadrantPlot
// ────────────────────────────────────────────────────────────────────────────

/// Mapped output of the pipeline: one polyline per quadrant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadrantPlot {
    /// Largest first component per quadrant, used as the scale denominator.
    pub max_values: [f64; STREAM_COUNT],
    /// Screen coordinates per quadrant, in ascending order of `a`.
    pub polylines: [Vec<Point>; STREAM_COUNT],
}

impl QuadrantPlot {
    /// Number of line segments drawn for `quadrant`.
    pub fn segment_count(&self, quadrant: usize) -> usize {
        self.polylines[quadrant].len().saturating_sub(1)
    }
}
