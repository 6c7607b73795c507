use egui::{Pos2, Rect, Response};

use crate::document::Document;

/// A pointer drag reduced to the stroke lifecycle: one `Start`, any number of
/// `Move`s in reported order, one `End`. Cancellation is not distinguished
/// from a normal end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(Pos2),
    Move(Pos2),
    End,
}

/// Translates egui drag responses on the canvas into [`GestureEvent`]s and
/// routes them to the document's stroke lifecycle.
#[derive(Debug, Default)]
pub struct GestureMapper {
    last_pos: Option<Pos2>,
}

impl GestureMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one frame's drag state off the canvas response.
    ///
    /// Positions are converted to canvas-local coordinates. `dragged` holds
    /// every frame of a drag, so moves are only emitted when the pointer
    /// actually changed position.
    pub fn collect(&mut self, response: &Response, canvas: Rect) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        let pointer = response.interact_pointer_pos().map(|p| p - canvas.min.to_vec2());

        if response.drag_started() {
            if let Some(pos) = pointer {
                events.push(GestureEvent::Start(pos));
                self.last_pos = Some(pos);
            }
        } else if response.dragged() {
            if let Some(pos) = pointer {
                if self.last_pos != Some(pos) {
                    events.push(GestureEvent::Move(pos));
                    self.last_pos = Some(pos);
                }
            }
        }

        if response.drag_stopped() {
            events.push(GestureEvent::End);
            self.last_pos = None;
        }

        events
    }

    /// Apply a gesture event to the document.
    pub fn route(document: &mut Document, event: GestureEvent) {
        match event {
            GestureEvent::Start(pos) => document.start_stroke(pos),
            GestureEvent::Move(pos) => document.add_point(pos),
            GestureEvent::End => document.end_stroke(),
        }
    }
}
