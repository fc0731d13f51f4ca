//! Egui-based window that shows the quadrant plot (feature = "egui").
//!
//! The window is fixed to the size of the background image. The plot is
//! computed before the window opens; the app only paints it.

#![cfg(feature = "egui")]

mod background;
mod geometry;
mod render;
mod state;

pub use background::load_background_image;
pub use geometry::{plot_rect, to_screen};
pub use render::{PainterRenderer, rgba_to_color32};
pub use state::{PlotApp, run_window};
