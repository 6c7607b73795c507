use egui::{Color32, Slider};

use crate::document::Document;
use crate::stroke::BrushType;

/// Preset swatches offered next to the free color picker.
const PRESET_COLORS: [(&str, Color32); 4] = [
    ("Black", Color32::BLACK),
    ("Red", Color32::RED),
    ("Blue", Color32::BLUE),
    ("Green", Color32::GREEN),
];

pub fn tools_panel(document: &mut Document, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Brush");

            for brush in BrushType::ALL {
                let selected = document.brush_type() == brush;
                if ui.selectable_label(selected, brush.label()).clicked() {
                    log::info!("brush selected: {}", brush.label());
                    document.set_brush_type(brush);
                }
            }

            ui.separator();

            ui.label("Color:");
            ui.horizontal(|ui| {
                for (name, color) in PRESET_COLORS {
                    let swatch = egui::Button::new("")
                        .fill(color)
                        .min_size(egui::vec2(24.0, 24.0));
                    if ui.add(swatch).on_hover_text(name).clicked() {
                        document.set_color(color);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Custom:");
                let mut color = document.color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    document.set_color(color);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Size:");
                let mut size = document.brush_size();
                if ui.add(Slider::new(&mut size, 1.0..=20.0)).changed() {
                    document.set_brush_size(size);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(document.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    document.undo();
                }
                if ui
                    .add_enabled(document.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    document.redo();
                }
                if ui.button("Clear").clicked() {
                    document.clear();
                }
            });

            ui.separator();
            ui.label(format!("Strokes: {}", document.strokes().len()));
        });
}
