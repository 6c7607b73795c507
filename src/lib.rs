#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;

pub use app::PaintApp;
pub use document::Document;
pub use error::AppError;
pub use event::{DocumentEvent, EventBus, EventHandler};
pub use input::{GestureEvent, GestureMapper};
pub use renderer::Renderer;
pub use stroke::{BrushType, Stroke, StrokeRef};
