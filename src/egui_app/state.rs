#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};

use super::geometry::plot_rect;
use super::render::PainterRenderer;
use crate::color::Rgba;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, STREAM_COUNT};
use crate::error::{PlotError, Result};
use crate::model::QuadrantPlot;
use crate::render::draw_plot;

/// Window application painting a precomputed plot over its background.
pub struct PlotApp {
    plot: QuadrantPlot,
    palette: [Rgba; STREAM_COUNT],
    background: Option<TextureHandle>,
}

impl PlotApp {
    pub fn new(
        ctx: &egui::Context,
        plot: QuadrantPlot,
        palette: [Rgba; STREAM_COUNT],
        background: Option<egui::ColorImage>,
    ) -> Self {
        let background =
            background.map(|image| ctx.load_texture("background", image, TextureOptions::LINEAR));
        Self {
            plot,
            palette,
            background,
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                if let Some(texture) = &self.background {
                    let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                    painter.image(texture.id(), plot_rect(origin), uv, Color32::WHITE);
                }
                let mut renderer = PainterRenderer::new(painter, origin);
                draw_plot(&mut renderer, &self.plot, &self.palette);
            });
    }
}

/// Open the plot window and block until the user closes it.
pub fn run_window(
    plot: QuadrantPlot,
    palette: [Rgba; STREAM_COUNT],
    background: Option<egui::ColorImage>,
) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("quadplot")
            .with_inner_size([SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "quadplot",
        options,
        Box::new(move |cc| Ok(Box::new(PlotApp::new(&cc.egui_ctx, plot, palette, background)))),
    )
    .map_err(|e| PlotError::GraphicsInit(e.to_string()))
}
