#![cfg(feature = "egui")]

use eframe::egui::{Pos2, Rect, Vec2};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::model::Point;

/// Screen rectangle covered by the background image, anchored at `origin`.
pub fn plot_rect(origin: Pos2) -> Rect {
    Rect::from_min_size(origin, Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32))
}

/// Convert a plot coordinate to an egui position relative to `origin`.
pub fn to_screen(origin: Pos2, p: Point) -> Pos2 {
    origin + Vec2::new(p.x as f32, p.y as f32)
}
