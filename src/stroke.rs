use egui::{Color32, Pos2};
use std::sync::Arc;

/// The paint primitive applied per recorded point or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BrushType {
    /// Consecutive points joined pairwise with line segments.
    Line,
    /// A filled circle stamped at every recorded point.
    Circle,
    /// A filled square stamped at every recorded point.
    Rectangle,
}

impl BrushType {
    pub const ALL: [BrushType; 3] = [BrushType::Line, BrushType::Circle, BrushType::Rectangle];

    pub fn label(self) -> &'static str {
        match self {
            BrushType::Line => "Line",
            BrushType::Circle => "Circle",
            BrushType::Rectangle => "Rectangle",
        }
    }
}

/// One continuous user-drawn mark. Immutable once constructed; the document
/// replaces the in-progress stroke wholesale on each extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    brush: BrushType,
    color: Color32,
    size: f32,
    points: Vec<Pos2>,
}

/// Reference-counted stroke, cheap to keep on the undo/redo stacks.
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(brush: BrushType, color: Color32, size: f32, points: Vec<Pos2>) -> Self {
        Self {
            brush,
            color,
            size,
            points,
        }
    }

    /// Create a new reference-counted Stroke.
    pub fn new_ref(brush: BrushType, color: Color32, size: f32, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(brush, color, size, points))
    }

    pub fn brush(&self) -> BrushType {
        self.brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}
