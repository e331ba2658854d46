//! Native viewer using egui
//!
//! One canvas inside a vertical scroll area. Each frame: dispatch a
//! pointer press (if any), then draw whichever view is active.

use eframe::egui;
use tracing::{debug, info};

use crate::config::TextConfig;
use crate::dataset::MapImage;
use crate::geometry::Layout;
use crate::input::{self, Transition};
use crate::state::{AppState, View};
use crate::views::{self, Canvas};

/// Everything loaded before the window opens
pub struct Scene {
    pub state: AppState,
    pub map_image: MapImage,
    pub layout: Layout,
}

/// Run the native viewer
pub fn run_viewer(scene: Scene, window_size: [f32; 2], text: TextConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Volcano Atlas"),
        ..Default::default()
    };

    eframe::run_native(
        "Volcano Atlas",
        options,
        Box::new(|cc| Ok(Box::new(AtlasApp::new(cc, scene, text)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

struct AtlasApp {
    state: AppState,
    layout: Layout,
    text: TextConfig,
    map_texture: egui::TextureHandle,
}

impl AtlasApp {
    fn new(cc: &eframe::CreationContext<'_>, scene: Scene, text: TextConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let Scene { state, map_image, layout } = scene;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [map_image.width as usize, map_image.height as usize],
            &map_image.rgba,
        );
        let map_texture = cc
            .egui_ctx
            .load_texture("world_map", image, egui::TextureOptions::LINEAR);
        debug!("Uploaded map texture {}x{}", map_image.width, map_image.height);

        Self {
            state,
            layout,
            text,
            map_texture,
        }
    }

    fn dispatch_press(&mut self, pointer: crate::geometry::Point) {
        match input::handle_press(&mut self.state, pointer) {
            Transition::Selected(i) => {
                if let Some(v) = self.state.records().get(i) {
                    info!("Selected volcano #{}: {}", i, v.name);
                }
            }
            Transition::Returned => info!("Returned to map view"),
            Transition::Unchanged => {}
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::none().fill(egui::Color32::BLACK);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let size = egui::vec2(
                    self.layout.canvas_width as f32,
                    self.layout.canvas_height as f32,
                );
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;

                let pointer = response
                    .hover_pos()
                    .map(|p| Canvas::new(&painter, origin).to_local(p));

                let pressed = ui.input(|i| i.pointer.primary_pressed());
                if let (true, Some(p)) = (pressed, pointer) {
                    self.dispatch_press(p);
                }

                let canvas = Canvas::new(&painter, origin);
                match self.state.view {
                    View::Map => views::map::draw(
                        &canvas,
                        &self.state,
                        &self.layout,
                        &self.map_texture,
                        &self.text,
                        pointer,
                    ),
                    View::Detail { .. } => views::detail::draw(
                        &canvas,
                        self.state.selected(),
                        &self.layout,
                        &self.text,
                    ),
                }
            });
        });
    }
}
