use egui::{Color32, Pos2};
use log::debug;

use crate::event::{DocumentEvent, EventBus, EventHandler};
use crate::stroke::{BrushType, Stroke, StrokeRef};

pub const DEFAULT_BRUSH: BrushType = BrushType::Circle;
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;
pub const DEFAULT_SIZE: f32 = 4.0;

/// The drawing state store: completed strokes in paint order, the in-progress
/// stroke, current brush settings, and the undo/redo stacks.
///
/// Every operation is total; undo/redo/end on empty state silently no-op.
/// Each actual mutation emits one [`DocumentEvent`] on the bus after the new
/// state is visible, and bumps the version counter for pull-based observers.
#[derive(Debug)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    active_points: Vec<Pos2>,
    brush: BrushType,
    color: Color32,
    size: f32,
    undo_stack: Vec<StrokeRef>,
    redo_stack: Vec<StrokeRef>,
    bus: EventBus,
    version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            active_points: Vec::new(),
            brush: DEFAULT_BRUSH,
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            bus: EventBus::new(),
            version: 0,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document starting from the given brush settings, without
    /// emitting any events: events mean user-visible mutations, not setup.
    pub fn with_settings(brush: BrushType, color: Color32, size: f32) -> Self {
        Self {
            brush,
            color,
            size,
            ..Self::default()
        }
    }

    /// Subscribe a handler to all subsequent document events.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    fn notify(&mut self, event: DocumentEvent) {
        self.version += 1;
        self.bus.emit(event);
    }

    // --- stroke lifecycle ---

    /// Begin a new stroke at `point` using the current brush settings.
    ///
    /// A drag-start while another stroke is still active finishes the
    /// previous stroke first, so at most one stroke is ever active.
    pub fn start_stroke(&mut self, point: Pos2) {
        if self.is_drawing() {
            self.end_stroke();
        }
        self.active_points = vec![point];
        let stroke = Stroke::new_ref(self.brush, self.color, self.size, self.active_points.clone());
        self.strokes.push(stroke);
        self.notify(DocumentEvent::StrokeStarted { at: point });
    }

    /// Extend the active stroke to `point`.
    ///
    /// The last stroke in the list is replaced with a rebuilt snapshot that
    /// re-reads the current brush settings, so a setter change mid-drag
    /// re-tags the whole in-progress stroke. No-op when nothing is active.
    pub fn add_point(&mut self, point: Pos2) {
        if !self.is_drawing() {
            return;
        }
        self.active_points.push(point);
        let stroke = Stroke::new_ref(self.brush, self.color, self.size, self.active_points.clone());
        // The active stroke is always the last element while a drag is under way.
        if let Some(last) = self.strokes.last_mut() {
            *last = stroke;
        }
        self.notify(DocumentEvent::StrokeExtended { to: point });
    }

    /// Finish the active stroke: push it onto the undo stack and clear the
    /// redo stack. No-op when no stroke is active.
    pub fn end_stroke(&mut self) {
        if !self.is_drawing() {
            return;
        }
        let Some(finished) = self.strokes.last().cloned() else {
            return;
        };
        debug!(
            "stroke finished: {:?}, {} points",
            finished.brush(),
            finished.points().len()
        );
        self.undo_stack.push(finished);
        self.redo_stack.clear();
        self.active_points.clear();
        self.notify(DocumentEvent::StrokeFinished);
    }

    // --- brush settings ---

    pub fn set_brush_type(&mut self, brush: BrushType) {
        self.brush = brush;
        self.notify(DocumentEvent::BrushChanged { brush });
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.notify(DocumentEvent::ColorChanged { color });
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.size = size;
        self.notify(DocumentEvent::SizeChanged { size });
    }

    // --- history ---

    /// Remove the most recently finished stroke and park it for redo.
    ///
    /// No-op while a drag is in progress: the active stroke is the last list
    /// element, and popping it here would let the next extension overwrite a
    /// committed stroke.
    pub fn undo(&mut self) {
        if self.is_drawing() {
            return;
        }
        let Some(stroke) = self.undo_stack.pop() else {
            return;
        };
        self.strokes.pop();
        self.redo_stack.push(stroke);
        debug!("undo: {} strokes remain", self.strokes.len());
        self.notify(DocumentEvent::StrokeUndone);
    }

    /// Reapply the most recently undone stroke at the end of the list.
    /// No-op while a drag is in progress, like [`Self::undo`].
    pub fn redo(&mut self) {
        if self.is_drawing() {
            return;
        }
        let Some(stroke) = self.redo_stack.pop() else {
            return;
        };
        self.strokes.push(stroke.clone());
        self.undo_stack.push(stroke);
        debug!("redo: {} strokes", self.strokes.len());
        self.notify(DocumentEvent::StrokeRedone);
    }

    /// Drop every stroke and both history stacks.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active_points.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        debug!("canvas cleared");
        self.notify(DocumentEvent::Cleared);
    }

    // --- accessors ---

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// Points of the in-progress stroke; empty when no drag is under way.
    pub fn active_points(&self) -> &[Pos2] {
        &self.active_points
    }

    pub fn is_drawing(&self) -> bool {
        !self.active_points.is_empty()
    }

    pub fn brush_type(&self) -> BrushType {
        self.brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> f32 {
        self.size
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Monotonically increasing mutation counter, for observers that poll.
    pub fn version(&self) -> u64 {
        self.version
    }
}
