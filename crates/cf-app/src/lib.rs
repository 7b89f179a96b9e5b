//! cf-app: service layer for the flow explorer.
//!
//! Provides a unified error type and the render pipeline as one pure
//! function, so CLI and GUI frontends share identical behavior.

pub mod error;
pub mod pipeline;

pub use error::{AppError, AppResult};
pub use pipeline::{Viewport, build_scene};
