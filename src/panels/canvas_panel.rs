use egui::{Color32, Sense, Stroke as EguiStroke, Vec2};

use crate::document::Document;
use crate::input::GestureMapper;
use crate::renderer::Renderer;

/// Side length of the square drawing area, matching the phone-sized canvas
/// the app was designed around.
const CANVAS_SIDE: f32 = 400.0;

pub fn canvas_panel(
    document: &mut Document,
    renderer: &Renderer,
    mapper: &mut GestureMapper,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::splat(CANVAS_SIDE), Sense::drag());
            let canvas = response.rect;

            painter.rect_filled(canvas, 0.0, Color32::WHITE);
            painter.rect_stroke(canvas, 0.0, EguiStroke::new(1.0, Color32::BLACK));

            for event in mapper.collect(&response, canvas) {
                GestureMapper::route(document, event);
            }

            renderer.render(&painter, canvas, document.strokes());
        });
    });
}
