use egui::{Color32, Key, KeyboardShortcut, Modifiers, Pos2, Sense, Stroke as EguiStroke, Vec2};
use log::info;

use crate::document::Document;
use crate::input::GestureMapper;
use crate::panels;
use crate::renderer::Renderer;
use crate::stroke::BrushType;

/// How long the splash screen stays up before the canvas appears.
const SPLASH_SECONDS: f64 = 3.0;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Splash,
    Drawing,
}

/// Brush configuration that survives a restart. Drawings themselves are
/// deliberately not persisted.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
struct BrushSettings {
    brush: BrushType,
    color: Color32,
    size: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            brush: crate::document::DEFAULT_BRUSH,
            color: crate::document::DEFAULT_COLOR,
            size: crate::document::DEFAULT_SIZE,
        }
    }
}

/// We derive Deserialize/Serialize so we can persist brush settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    settings: BrushSettings,
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    mapper: GestureMapper,
    #[serde(skip)]
    screen: Screen,
    #[serde(skip)]
    splash_started: Option<f64>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            settings: BrushSettings::default(),
            document: Document::new(),
            renderer: Renderer::new(),
            mapper: GestureMapper::new(),
            screen: Screen::Splash,
            splash_started: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Seed the document with the restored brush settings.
        app.document =
            Document::with_settings(app.settings.brush, app.settings.color, app.settings.size);
        app
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT))
            || ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT_ALT))
        {
            self.document.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.document.undo();
        }
    }

    fn splash_screen(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let started = *self.splash_started.get_or_insert(now);
        if now - started >= SPLASH_SECONDS {
            info!("splash finished, showing canvas");
            self.screen = Screen::Drawing;
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);

                // The app mark: one sample of each brush shape.
                let (response, painter) =
                    ui.allocate_painter(Vec2::new(220.0, 80.0), Sense::hover());
                let rect = response.rect;
                let mid = rect.center().y;
                painter.line_segment(
                    [
                        Pos2::new(rect.left() + 10.0, mid),
                        Pos2::new(rect.left() + 60.0, mid),
                    ],
                    EguiStroke::new(6.0, Color32::RED),
                );
                painter.circle_filled(Pos2::new(rect.center().x, mid), 22.0, Color32::BLUE);
                painter.rect_filled(
                    egui::Rect::from_center_size(
                        Pos2::new(rect.right() - 35.0, mid),
                        Vec2::splat(40.0),
                    ),
                    0.0,
                    Color32::GREEN,
                );

                ui.add_space(12.0);
                ui.heading("inkpad");
                ui.label("a small drawing app");
            });
        });

        // Keep repainting so the transition fires without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn drawing_screen(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(&mut self.document, ctx);
        panels::canvas_panel(&mut self.document, &self.renderer, &mut self.mapper, ctx);
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings = BrushSettings {
            brush: self.document.brush_type(),
            color: self.document.color(),
            size: self.document.brush_size(),
        };
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Splash => self.splash_screen(ctx),
            Screen::Drawing => self.drawing_screen(ctx),
        }
    }
}
