#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, Pos2, Stroke};

use super::geometry::to_screen;
use crate::color::Rgba;
use crate::model::Point;
use crate::render::Renderer;

pub fn rgba_to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, c.3)
}

/// [`Renderer`] that paints 1px segments with an egui painter.
pub struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl Renderer for PainterRenderer<'_> {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.painter.line_segment(
            [to_screen(self.origin, from), to_screen(self.origin, to)],
            Stroke::new(1.0, rgba_to_color32(color)),
        );
    }
}
