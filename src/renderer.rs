use egui::{Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};

use crate::stroke::{BrushType, StrokeRef};

/// Paints the document's strokes onto an egui painter.
///
/// Rendering is a pure function of the stroke list: the renderer keeps no
/// state of its own and repainting unchanged input yields the same frame.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint every stroke in insertion order, clipped to `canvas`.
    ///
    /// Stroke points are recorded in canvas-local coordinates; they are
    /// offset by the canvas origin here.
    pub fn render(&self, painter: &Painter, canvas: Rect, strokes: &[StrokeRef]) {
        let painter = painter.with_clip_rect(canvas);
        let origin = canvas.min.to_vec2();
        for stroke in strokes {
            self.paint_stroke(&painter, origin, stroke);
        }
    }

    fn paint_stroke(&self, painter: &Painter, origin: Vec2, stroke: &StrokeRef) {
        let at = |p: Pos2| p + origin;
        match stroke.brush() {
            BrushType::Line => {
                // A single recorded point has no segment to draw.
                for pair in stroke.points().windows(2) {
                    painter.line_segment(
                        [at(pair[0]), at(pair[1])],
                        EguiStroke::new(stroke.size(), stroke.color()),
                    );
                }
            }
            BrushType::Circle => {
                for &point in stroke.points() {
                    painter.circle_filled(at(point), stroke.size(), stroke.color());
                }
            }
            BrushType::Rectangle => {
                let side = Vec2::splat(stroke.size());
                for &point in stroke.points() {
                    painter.rect_filled(
                        Rect::from_center_size(at(point), side),
                        0.0,
                        stroke.color(),
                    );
                }
            }
        }
    }
}
