//! Interactive bouquet viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (garden, configuration, RNG) and implements [`eframe::App`] to run
//! the render loop: advance the garden once per frame, spawn a flower
//! wherever the canvas is clicked, and repaint everything.

use bloom_core::{config::Config, garden::Garden};
use eframe::App;
use glam::Vec2;

use crate::paint;

/// Main application state for the bouquet viewer.
///
/// The per-frame update is:
/// 1. Advance the garden by one step (pending flowers join here).
/// 2. Handle a pointer click, queueing a new flower for the next frame.
/// 3. Clear the canvas to black and paint every live flower and star
///    in insertion order.
/// 4. Request a repaint so the loop runs indefinitely.
pub struct Viewer {
    garden: Garden,
    cfg: Config,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a viewer with an empty garden and default parameters.
    pub fn new() -> Self {
        Self {
            garden: Garden::new(),
            cfg: Config::default(),
            rng: rand::rng(),
        }
    }

    /// Advances the simulation by one frame.
    fn step_once(&mut self) {
        self.garden.step(&self.cfg, &mut self.rng);
    }

    /// Queues a randomized flower at the given canvas position.
    ///
    /// The flower joins the live set on the next frame's step, so a
    /// click never mutates the set of flowers already being drawn.
    fn spawn_at(&mut self, pos: Vec2) {
        let id = self.garden.spawn_at(pos, &self.cfg, &mut self.rng);
        log::debug!("spawned flower {id} at ({:.1}, {:.1})", pos.x, pos.y);
    }

    /// Builds the bottom status bar (flower and star counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("stars = {}", self.garden.star_count()));
                ui.label(format!("flowers = {}", self.garden.len()));
                ui.separator();
                ui.label("click to plant a flower");
            });
        });
    }

    /// Builds the central canvas: input handling and all painting.
    fn ui_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Handle click-based spawning before drawing; the new
                // flower is pending and stays invisible this frame.
                if response.clicked()
                    && let Some(p) = response.interact_pointer_pos()
                {
                    self.spawn_at(Vec2::new(p.x, p.y));
                }

                // Clear the whole canvas, then redraw the scene.
                painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::BLACK);

                for flower in self.garden.flowers() {
                    paint::paint_flower(&painter, flower);
                    for star in &flower.stars {
                        paint::paint_star(&painter, star, &mut self.rng);
                    }
                }

                // The animation never pauses: keep the frames coming.
                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback driving one frame of the render loop.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step_once();
        self.ui_status_bar(ctx);
        self.ui_canvas(ctx);
    }
}
