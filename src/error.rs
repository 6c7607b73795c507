use thiserror::Error;

/// Failures surfaced from the application entry point. The drawing state
/// machine itself is total and never errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start the application window: {0}")]
    Window(#[from] eframe::Error),
}
