use crate::stroke::BrushType;
use egui::{Color32, Pos2};

/// Emitted by the document immediately after each state mutation.
///
/// No-op operations (undo on an empty stack, end of an empty stroke) emit
/// nothing: subscribers only hear about actual state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    StrokeStarted { at: Pos2 },
    StrokeExtended { to: Pos2 },
    StrokeFinished,
    StrokeUndone,
    StrokeRedone,
    Cleared,
    BrushChanged { brush: BrushType },
    ColorChanged { color: Color32 },
    SizeChanged { size: f32 },
}
