//! Toolkit-independent drawing of a mapped plot.

use crate::color::Rgba;
use crate::config::STREAM_COUNT;
use crate::model::{Point, QuadrantPlot};

/// Pixel offsets at which every segment is repeated to get a 2px wide line.
pub const LINE_OFFSETS: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Drawing surface for plot lines.
pub trait Renderer {
    /// Draw a 1px line between two screen points.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);

    /// Connect consecutive points; N points give N-1 thick segments.
    fn draw_polyline(&mut self, points: &[Point], color: Rgba) {
        for seg in points.windows(2) {
            for (dx, dy) in LINE_OFFSETS {
                self.draw_line(seg[0].offset(dx, dy), seg[1].offset(dx, dy), color);
            }
        }
    }
}

/// Draw every quadrant's polyline in its palette color.
pub fn draw_plot<R: Renderer + ?Sized>(
    renderer: &mut R,
    plot: &QuadrantPlot,
    palette: &[Rgba; STREAM_COUNT],
) {
    for (points, color) in plot.polylines.iter().zip(palette) {
        renderer.draw_polyline(points, *color);
    }
}
